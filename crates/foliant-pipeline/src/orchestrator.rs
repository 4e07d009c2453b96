//! Folder Orchestrator (C7): worker pool, sequencer, durable multi-destination output

use crate::error::{PipelineError, PipelineResult};
use crate::job::{ConversionReport, FolderJob};
use crate::multi_writer::MultiWriter;
use crossbeam_channel::bounded;
use foliant_core::{EncodeOptions, PageArtifact};
use foliant_pdf::PdfWriter;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::thread;

/// Convert one folder's pages into a PDF, written identically to every
/// output directory, and durably renamed into place (§4.7).
///
/// A per-page failure is logged and the page is skipped; the folder still
/// produces a PDF with the surviving pages. Only I/O failures on the output
/// sink itself are fatal to the folder.
pub fn convert_folder(
    job: &FolderJob,
    output_dirs: &[PathBuf],
    options: &EncodeOptions,
) -> PipelineResult<ConversionReport> {
    let stem = job.output_stem().to_string();
    let temp_files = open_temp_files(output_dirs, &stem)?;
    let temp_paths: Vec<PathBuf> = temp_files.iter().map(|(p, _)| p.clone()).collect();

    match run_conversion(job, temp_files, options) {
        Ok(report) => {
            finalize(output_dirs, &temp_paths, &stem)?;
            Ok(report)
        }
        Err(err) => {
            for path in &temp_paths {
                let _ = fs::remove_file(path);
            }
            Err(err)
        }
    }
}

fn run_conversion(
    job: &FolderJob,
    temp_files: Vec<(PathBuf, File)>,
    options: &EncodeOptions,
) -> PipelineResult<ConversionReport> {
    let files: Vec<File> = temp_files.into_iter().map(|(_, f)| f).collect();
    let sink = MultiWriter::new(files);
    let mut writer = PdfWriter::new(sink)?;

    let n = job.tiff_paths.len();
    let n_workers = num_cpus::get().min(n.max(1));
    let (task_tx, task_rx) = bounded::<(usize, PathBuf)>(n_workers);
    let (result_tx, result_rx) = bounded::<(usize, Result<PageArtifact, String>)>(n_workers);

    let handles: Vec<_> = (0..n_workers)
        .map(|_| {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let options = *options;
            thread::spawn(move || {
                while let Ok((index, path)) = task_rx.recv() {
                    let outcome = decode_and_encode(&path, &options);
                    if result_tx.send((index, outcome)).is_err() {
                        break;
                    }
                }
            })
        })
        .collect();
    drop(task_rx);
    drop(result_tx);

    let feeder = {
        let paths = job.tiff_paths.clone();
        thread::spawn(move || {
            for (index, path) in paths.into_iter().enumerate() {
                if task_tx.send((index, path)).is_err() {
                    break;
                }
            }
        })
    };

    let mut slots: Vec<Option<Result<PageArtifact, String>>> = (0..n).map(|_| None).collect();
    let mut next_index = 0;
    let mut pages_written = 0;
    let mut page_errors = Vec::new();

    while let Ok((index, outcome)) = result_rx.recv() {
        slots[index] = Some(outcome);
        while next_index < n {
            match slots[next_index].take() {
                None => break,
                Some(Ok(artifact)) => {
                    writer.write_image(&artifact)?;
                    pages_written += 1;
                    next_index += 1;
                }
                Some(Err(message)) => {
                    log::warn!("folder {}: page {next_index} failed: {message}", job.name);
                    page_errors.push(message);
                    next_index += 1;
                }
            }
        }
    }

    let _ = feeder.join();
    for handle in handles {
        let _ = handle.join();
    }

    writer.finish()?;

    Ok(ConversionReport {
        folder: job.name.clone(),
        pages_total: n,
        pages_written,
        page_errors,
    })
}

fn decode_and_encode(path: &Path, options: &EncodeOptions) -> Result<PageArtifact, String> {
    let mut pages = foliant_tiff::decode_pages(path).map_err(|e| e.to_string())?;
    if pages.is_empty() {
        return Err(format!("{} decoded to zero pages", path.display()));
    }
    if pages.len() > 1 {
        log::warn!(
            "{} decoded to {} pages; only the first is used",
            path.display(),
            pages.len()
        );
    }
    let page = pages.remove(0);
    foliant_encode::encode_page(&page, options).map_err(|e| e.to_string())
}

fn open_temp_files(output_dirs: &[PathBuf], stem: &str) -> PipelineResult<Vec<(PathBuf, File)>> {
    output_dirs
        .iter()
        .map(|dir| {
            let path = dir.join(format!("{stem}.tmp"));
            let file = File::create(&path).map_err(|source| PipelineError::CreateTemp {
                path: path.clone(),
                source,
            })?;
            Ok((path, file))
        })
        .collect()
}

fn finalize(output_dirs: &[PathBuf], temp_paths: &[PathBuf], stem: &str) -> PipelineResult<()> {
    for (dir, temp_path) in output_dirs.iter().zip(temp_paths) {
        let file = File::open(temp_path).map_err(|source| PipelineError::Sync {
            path: temp_path.clone(),
            source,
        })?;
        file.sync_all().map_err(|source| PipelineError::Sync {
            path: temp_path.clone(),
            source,
        })?;
        drop(file);

        let final_path = dir.join(format!("{stem}.pdf"));
        fs::rename(temp_path, &final_path).map_err(|source| PipelineError::Rename {
            from: temp_path.clone(),
            to: final_path.clone(),
            source,
        })?;

        let dir_handle = File::open(dir).map_err(|source| PipelineError::Sync {
            path: dir.clone(),
            source,
        })?;
        dir_handle.sync_all().map_err(|source| PipelineError::Sync {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}

//! Request Dispatcher (C8): runs every folder concurrently, longest first

use crate::job::{ConversionReport, FolderJob};
use crate::orchestrator::convert_folder;
use foliant_core::EncodeOptions;
use std::path::PathBuf;
use std::thread;

/// Convert every folder, returning one report per folder
///
/// Folders are sorted descending by page count before dispatch so the
/// largest folder starts first and does not become the straggler; all
/// folders then run concurrently with no additional concurrency cap — each
/// owns its own CPU-bounded worker pool (§4.8).
pub fn dispatch_folders(
    mut folders: Vec<FolderJob>,
    output_dirs: &[PathBuf],
    options: &EncodeOptions,
) -> Vec<ConversionReport> {
    folders.sort_by_key(|f| std::cmp::Reverse(f.tiff_paths.len()));

    thread::scope(|scope| {
        let handles: Vec<_> = folders
            .iter()
            .map(|job| {
                scope.spawn(move || match convert_folder(job, output_dirs, options) {
                    Ok(report) => report,
                    Err(err) => {
                        log::error!("folder {} failed: {err}", job.name);
                        ConversionReport {
                            folder: job.name.clone(),
                            pages_total: job.tiff_paths.len(),
                            pages_written: 0,
                            page_errors: vec![err.to_string()],
                        }
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

//! Folder orchestrator regression test: error handling and durable output
//!
//! Exercises `convert_folder` end-to-end against nonexistent TIFF inputs, so
//! every page fails to decode. The folder must still produce a valid
//! (zero-page) PDF, written atomically to every output directory, with the
//! failures reported rather than aborting the folder.

use foliant_core::EncodeOptions;
use foliant_pipeline::{convert_folder, FolderJob};
use std::path::PathBuf;

#[test]
fn folder_with_all_failing_pages_still_emits_a_pdf() {
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();
    let output_dirs = vec![out_a.path().to_path_buf(), out_b.path().to_path_buf()];

    let job = FolderJob::new(
        "invoice-2",
        vec![
            PathBuf::from("/nonexistent/page1.tiff"),
            PathBuf::from("/nonexistent/page2.tiff"),
        ],
    );

    let report = convert_folder(&job, &output_dirs, &EncodeOptions::default()).unwrap();
    assert_eq!(report.pages_total, 2);
    assert_eq!(report.pages_written, 0);
    assert_eq!(report.page_errors.len(), 2);

    // The "-2" suffix is stripped from the output file name.
    for dir in &output_dirs {
        let pdf_path = dir.join("invoice.pdf");
        assert!(pdf_path.exists(), "{pdf_path:?} should exist");
        let bytes = std::fs::read(&pdf_path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(!dir.join("invoice.tmp").exists(), "temp file should be renamed away");
    }
}

#[test]
fn output_stem_strips_trailing_dash_two() {
    let job = FolderJob::new("batch-2", vec![]);
    assert_eq!(job.output_stem(), "batch");

    let job = FolderJob::new("batch", vec![]);
    assert_eq!(job.output_stem(), "batch");
}

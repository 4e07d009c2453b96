//! Folder discovery: turn `--input`'s immediate subdirectories into
//! `FolderJob`s, grounded on `files_manager.GetTIFFFolders`/`GetTIFFPaths`.

use foliant_pipeline::FolderJob;
use std::fs;
use std::path::{Path, PathBuf};

/// List every immediate subdirectory of `root` that contains at least one
/// `.tif`/`.tiff` file, sorted by file name within each folder (matching
/// the Go source's reliance on `os.ReadDir`'s sorted listing). Mac resource
/// fork files (`._name`) are skipped.
pub fn discover_folders(root: &Path) -> std::io::Result<Vec<FolderJob>> {
    let mut entries: Vec<_> = fs::read_dir(root)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut folders = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let tiffs = tiff_paths(&path)?;
        if tiffs.is_empty() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        folders.push(FolderJob::new(name, tiffs));
    }
    Ok(folders)
}

fn tiff_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if name.starts_with("._") {
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
        if ext == "tif" || ext == "tiff" {
            paths.push(path);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, write};

    #[test]
    fn finds_tiff_folders_and_skips_empty_and_resource_fork_files() {
        let root = tempfile::tempdir().unwrap();
        let page_folder = root.path().join("invoice-1");
        create_dir(&page_folder).unwrap();
        write(page_folder.join("002.tiff"), b"x").unwrap();
        write(page_folder.join("001.tif"), b"x").unwrap();
        write(page_folder.join("._001.tif"), b"x").unwrap();
        write(page_folder.join("notes.txt"), b"x").unwrap();

        let empty_folder = root.path().join("empty");
        create_dir(&empty_folder).unwrap();

        let folders = discover_folders(root.path()).unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "invoice-1");
        let names: Vec<_> = folders[0]
            .tiff_paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["001.tif", "002.tiff"]);
    }
}

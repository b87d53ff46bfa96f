use crate::error::{Result, TcgError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// フォルダ直下の通常ファイルを列挙（拡張子は問わない）
///
/// フォルダが存在しない場合は `FolderNotFound`。空の場合は空のVecを返す。
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageFile>> {
    if !folder.is_dir() {
        return Err(TcgError::FolderNotFound(folder.display().to_string()));
    }

    let mut files: Vec<ImageFile> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| ImageFile {
            file_name: e.file_name().to_string_lossy().to_string(),
            path: e.into_path(),
        })
        .collect();

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// スキャンして、1件も無ければ `NoFilesFound`
pub fn scan_non_empty(folder: &Path) -> Result<Vec<ImageFile>> {
    let files = scan_folder(folder)?;
    if files.is_empty() {
        return Err(TcgError::NoFilesFound(folder.display().to_string()));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(TcgError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Import");
        File::create(&file).unwrap();

        let result = scan_folder(&file);
        assert!(matches!(result, Err(TcgError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        let result = scan_folder(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_non_empty_rejects_empty() {
        let dir = tempdir().unwrap();
        let result = scan_non_empty(dir.path());
        assert!(matches!(result, Err(TcgError::NoFilesFound(_))));
    }

    #[test]
    fn test_scan_all_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("card1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("card2.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();
        File::create(dir.path().join("noext")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["card1.jpg", "card2.PNG", "noext", "notes.txt"]);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("inner.jpg")).unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "top.jpg");
        assert_eq!(result[0].path, dir.path().join("top.jpg"));
    }

    #[test]
    fn test_only_subdirectories_counts_as_empty() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let result = scan_non_empty(dir.path());
        assert!(matches!(result, Err(TcgError::NoFilesFound(_))));
    }
}

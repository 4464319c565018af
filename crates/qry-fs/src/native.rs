use std::fs;
use std::path::Path;

use crate::path::{lexically_clean, normalize_separator};
use crate::{Error, FileSystem};

/// [`FileSystem`] backed by `std::fs`.
///
/// Stateless and freely shareable; construct one at the call site and pass it
/// down (no singleton).
#[derive(Default, Clone, Copy)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }

    fn io(path: &str, err: std::io::Error) -> Error {
        Error::Io(path.to_owned(), err)
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(&normalize_separator(path)).is_file()
    }

    fn dir_exists(&self, path: &str) -> bool {
        Path::new(&normalize_separator(path)).is_dir()
    }

    fn mk_dir(&self, path: &str) -> Result<(), Error> {
        fs::create_dir_all(normalize_separator(path)).map_err(|e| Self::io(path, e))
    }

    fn clear_dir(&self, path: &str) -> Result<(), Error> {
        let entries = fs::read_dir(normalize_separator(path)).map_err(|e| Self::io(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Self::io(path, e))?;
            let entry_path = entry.path();
            if entry_path.is_file() {
                fs::remove_file(&entry_path)
                    .map_err(|e| Self::io(&entry_path.to_string_lossy(), e))?;
            }
        }
        Ok(())
    }

    fn copy_file(&self, src: &str, dst: &str) -> Result<(), Error> {
        let src_key = lexically_clean(&normalize_separator(src));
        let dst_key = lexically_clean(&normalize_separator(dst));
        if src_key == dst_key {
            return Ok(());
        }
        fs::copy(&src_key, &dst_key)
            .map(|_| ())
            .map_err(|e| Self::io(src, e))
    }

    fn copy_dir(&self, src: &str, dst: &str) -> Result<(), Error> {
        let src_dir = normalize_separator(src);
        let dst_dir = normalize_separator(dst);
        self.mk_dir(&dst_dir)?;
        let entries = fs::read_dir(&src_dir).map_err(|e| Self::io(src, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Self::io(src, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let from = format!("{}/{name}", src_dir.trim_end_matches('/'));
            let to = format!("{}/{name}", dst_dir.trim_end_matches('/'));
            if entry.path().is_dir() {
                self.copy_dir(&from, &to)?;
            } else if !Path::new(&to).exists() {
                self.copy_file(&from, &to)?;
            }
        }
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, Error> {
        fs::read_to_string(normalize_separator(path)).map_err(|e| Self::io(path, e))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), Error> {
        fs::write(normalize_separator(path), content).map_err(|e| Self::io(path, e))
    }

    fn read_dir(&self, path: &str, extension: &str) -> Result<Vec<String>, Error> {
        let dir = normalize_separator(path);
        let suffix = extension.to_lowercase();
        let entries = fs::read_dir(&dir).map_err(|e| Self::io(path, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Self::io(path, e))?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if suffix.is_empty() || name.to_lowercase().ends_with(&suffix) {
                files.push(format!("{}/{name}", dir.trim_end_matches('/')));
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_files_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_string_lossy().into_owned();
        let fs = NativeFileSystem::new();

        let nested = format!("{root}/a/b/c");
        fs.mk_dir(&nested).unwrap();
        assert!(fs.dir_exists(&nested));

        let file = format!("{nested}/note.txt");
        fs.write_file(&file, "content").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "content");

        let copy = format!("{nested}/copy.txt");
        fs.copy_file(&file, &copy).unwrap();
        assert_eq!(fs.read_file(&copy).unwrap(), "content");

        // Copy onto itself succeeds without truncation.
        fs.copy_file(&file, &file).unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), "content");
    }

    #[test]
    fn read_dir_lists_one_level_with_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_string_lossy().into_owned();
        let fs = NativeFileSystem::new();

        fs.write_file(&format!("{root}/a.PNG"), "a").unwrap();
        fs.write_file(&format!("{root}/b.png"), "b").unwrap();
        fs.write_file(&format!("{root}/c.ogg"), "c").unwrap();
        fs.mk_dir(&format!("{root}/sub")).unwrap();
        fs.write_file(&format!("{root}/sub/d.png"), "d").unwrap();

        let pngs = fs.read_dir(&root, ".png").unwrap();
        assert_eq!(pngs.len(), 2);
        assert!(pngs.iter().all(|p| p.to_lowercase().ends_with(".png")));
    }

    #[test]
    fn clear_dir_spares_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_string_lossy().into_owned();
        let fs = NativeFileSystem::new();

        fs.write_file(&format!("{root}/a.txt"), "a").unwrap();
        fs.mk_dir(&format!("{root}/sub")).unwrap();
        fs.write_file(&format!("{root}/sub/b.txt"), "b").unwrap();

        fs.clear_dir(&root).unwrap();
        assert!(!fs.exists(&format!("{root}/a.txt")));
        assert!(fs.exists(&format!("{root}/sub/b.txt")));
    }
}

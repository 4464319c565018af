use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::path::{dir_name_from, file_name_from, lexically_clean, normalize_separator};
use crate::{Error, FileSystem};

/// Deterministic in-memory filesystem used as a test double.
///
/// Holds a flat map of cleaned paths to file contents plus an explicit set of
/// directories. Windows-style paths work on any host since all resolution is
/// lexical. Interior mutability keeps the [`FileSystem`] trait `&self`-based;
/// the pipeline is single-threaded so no synchronization is needed.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<String, String>>,
    dirs: RefCell<BTreeSet<String>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filesystem prepopulated with `(path, content)` pairs.
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path, content);
        }
        fs
    }

    /// Inserts a file, implicitly creating parent directories.
    pub fn insert(&self, path: &str, content: &str) {
        let path = Self::key(path);
        self.record_parents(&path);
        self.files.borrow_mut().insert(path, content.to_owned());
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    fn key(path: &str) -> String {
        lexically_clean(&normalize_separator(path))
    }

    fn record_parents(&self, path: &str) {
        let mut dirs = self.dirs.borrow_mut();
        let mut dir = dir_name_from(path);
        while !dir.is_empty() && dir != "/" && dirs.insert(dir.clone()) {
            dir = dir_name_from(&dir);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(&Self::key(path))
    }

    fn dir_exists(&self, path: &str) -> bool {
        let key = Self::key(path);
        key == "/" || self.dirs.borrow().contains(&key)
    }

    fn mk_dir(&self, path: &str) -> Result<(), Error> {
        let key = Self::key(path);
        let mut dirs = self.dirs.borrow_mut();
        let mut dir = key;
        while !dir.is_empty() && dir != "/" && dirs.insert(dir.clone()) {
            dir = dir_name_from(&dir);
        }
        Ok(())
    }

    fn clear_dir(&self, path: &str) -> Result<(), Error> {
        let key = Self::key(path);
        self.files
            .borrow_mut()
            .retain(|file, _| dir_name_from(file) != key);
        Ok(())
    }

    fn copy_file(&self, src: &str, dst: &str) -> Result<(), Error> {
        let src_key = Self::key(src);
        let dst_key = Self::key(dst);
        if src_key == dst_key {
            return Ok(());
        }
        let content = self
            .files
            .borrow()
            .get(&src_key)
            .cloned()
            .ok_or_else(|| Error::NotFound(src.to_owned()))?;
        self.record_parents(&dst_key);
        self.files.borrow_mut().insert(dst_key, content);
        Ok(())
    }

    fn copy_dir(&self, src: &str, dst: &str) -> Result<(), Error> {
        let src_key = Self::key(src);
        let dst_key = Self::key(dst);
        let mut prefix = src_key.trim_end_matches('/').to_owned();
        prefix.push('/');
        let to_copy: Vec<(String, String)> = self
            .files
            .borrow()
            .iter()
            .filter_map(|(file, content)| {
                file.strip_prefix(&prefix)
                    .map(|suffix| (format!("{}/{suffix}", dst_key.trim_end_matches('/')), content.clone()))
            })
            .collect();
        for (target, content) in to_copy {
            // Present files are kept, not overwritten.
            if !self.files.borrow().contains_key(&target) {
                self.record_parents(&target);
                self.files.borrow_mut().insert(target, content);
            }
        }
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, Error> {
        self.files
            .borrow()
            .get(&Self::key(path))
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_owned()))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), Error> {
        self.insert(path, content);
        Ok(())
    }

    fn read_dir(&self, path: &str, extension: &str) -> Result<Vec<String>, Error> {
        let key = Self::key(path);
        let suffix = extension.to_lowercase();
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|file| dir_name_from(file) == key)
            .filter(|file| {
                suffix.is_empty() || file_name_from(file).to_lowercase().ends_with(&suffix)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_keyed_by_normalized_path() {
        let fs = MemoryFileSystem::with_files([("C:\\res\\hero.png", "png")]);
        assert!(fs.exists("C:/res/hero.png"));
        assert!(fs.exists("C:\\res\\hero.png"));
        assert!(fs.dir_exists("C:/res"));
        assert!(!fs.exists("C:/res/other.png"));
    }

    #[test]
    fn copy_file_onto_itself_is_a_noop_success() {
        let fs = MemoryFileSystem::with_files([("/a/file.png", "x")]);
        fs.copy_file("/a/file.png", "/a/file.png").unwrap();
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn copy_of_a_missing_source_fails() {
        let fs = MemoryFileSystem::new();
        assert!(fs.copy_file("/missing.png", "/dst.png").is_err());
    }

    #[test]
    fn clear_dir_removes_one_level_only() {
        let fs = MemoryFileSystem::with_files([
            ("/export/a.png", "a"),
            ("/export/b.png", "b"),
            ("/export/sub/c.png", "c"),
        ]);
        fs.clear_dir("/export").unwrap();
        assert!(!fs.exists("/export/a.png"));
        assert!(!fs.exists("/export/b.png"));
        assert!(fs.exists("/export/sub/c.png"));
    }

    #[test]
    fn read_dir_filters_extension_case_insensitively() {
        let fs = MemoryFileSystem::with_files([
            ("/res/a.PNG", "a"),
            ("/res/b.png", "b"),
            ("/res/c.ogg", "c"),
            ("/res/sub/d.png", "d"),
        ]);
        let pngs = fs.read_dir("/res", ".png").unwrap();
        assert_eq!(pngs, vec!["/res/a.PNG".to_owned(), "/res/b.png".to_owned()]);
        let all = fs.read_dir("/res", "").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn copy_dir_skips_files_already_present() {
        let fs = MemoryFileSystem::with_files([
            ("/src/a.png", "new"),
            ("/src/sub/b.png", "b"),
            ("/dst/a.png", "old"),
        ]);
        fs.copy_dir("/src", "/dst").unwrap();
        assert_eq!(fs.read_file("/dst/a.png").unwrap(), "old");
        assert_eq!(fs.read_file("/dst/sub/b.png").unwrap(), "b");
    }
}

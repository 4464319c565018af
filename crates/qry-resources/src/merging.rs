//! Consolidation of every referenced file into one destination.

use std::collections::BTreeMap;

use qry_fs::{normalize_separator, FileSystem};
use qry_project::ResourceWorker;

use crate::new_name_generator;

/// Bijective old→new filename table built across one traversal.
///
/// Shared by the project-wide and per-object merging policies: the same
/// source path always maps to the same destination name, and two distinct
/// sources never share one.
#[derive(Default)]
pub(crate) struct RenameTable {
    /// Normalized absolute old path → new name.
    old_filenames: BTreeMap<String, String>,
    /// New name → normalized absolute old path. Inverse, used to detect
    /// collisions before they happen.
    new_filenames: BTreeMap<String, String>,
}

impl RenameTable {
    /// New name already chosen for this source, if any.
    pub(crate) fn get(&self, old_abs_path: &str) -> Option<&String> {
        self.old_filenames.get(old_abs_path)
    }

    /// Deduplicates `candidate` against the already-allocated names and
    /// records the pair. Returns the final name.
    pub(crate) fn allocate(&mut self, old_abs_path: &str, candidate: &str) -> String {
        let new_name = new_name_generator::generate_unprefixed(candidate, |name| {
            self.new_filenames.contains_key(name)
        });
        self.old_filenames
            .insert(old_abs_path.to_owned(), new_name.clone());
        self.new_filenames
            .insert(new_name.clone(), old_abs_path.to_owned());
        new_name
    }

    /// The stabilized new→old map, consumed by the copier.
    pub(crate) fn new_to_old(&self) -> BTreeMap<String, String> {
        self.new_filenames.clone()
    }
}

/// Worker computing a collision-free destination name for every distinct
/// file touched by a traversal, rewriting each reference in place to the
/// chosen name.
///
/// With `preserve_directories_structure` the destination name keeps the path
/// relative to the base directory when one exists; otherwise everything is
/// flattened to basenames. Absolute paths that cannot be expressed relative
/// to the base either fall back to their basename or survive untouched,
/// depending on `preserve_absolute_filenames`.
pub struct ResourcesMergingHelper<'a> {
    fs: &'a dyn FileSystem,
    base_directory: String,
    preserve_directories_structure: bool,
    preserve_absolute_filenames: bool,
    table: RenameTable,
}

impl<'a> ResourcesMergingHelper<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            base_directory: String::new(),
            preserve_directories_structure: false,
            preserve_absolute_filenames: true,
            table: RenameTable::default(),
        }
    }

    /// Directory resource paths resolve against; normally the directory of
    /// the project file.
    pub fn set_base_directory(&mut self, base_directory: &str) {
        self.base_directory = normalize_separator(base_directory);
    }

    pub fn set_preserve_directories_structure(&mut self, preserve: bool) {
        self.preserve_directories_structure = preserve;
    }

    pub fn set_preserve_absolute_filenames(&mut self, preserve: bool) {
        self.preserve_absolute_filenames = preserve;
    }

    /// The finished `new name → old absolute path` map. Call once the
    /// traversal that fed this helper is complete; the copier iterates it.
    pub fn get_all_resources_old_and_new_filename(&self) -> BTreeMap<String, String> {
        self.table.new_to_old()
    }
}

impl ResourceWorker for ResourcesMergingHelper<'_> {
    fn expose_file(&mut self, file: &mut String) {
        // An empty reference is never a resource.
        if file.is_empty() {
            return;
        }
        let normalized = normalize_separator(file);
        let Some(abs_path) = self.fs.make_absolute(&normalized, &self.base_directory) else {
            return;
        };

        // Idempotent: a source already seen keeps its first name.
        if let Some(new_name) = self.table.get(&abs_path) {
            *file = new_name.clone();
            return;
        }

        let candidate = if !self.preserve_directories_structure {
            self.fs.file_name_from(&abs_path)
        } else {
            match self.fs.make_relative(&abs_path, &self.base_directory) {
                Some(relative) if !relative.is_empty() => relative,
                Some(_) => self.fs.file_name_from(&abs_path),
                None if self.preserve_absolute_filenames => {
                    // The original absolute path survives as-is in the
                    // export; no table entry is created.
                    return;
                }
                None => self.fs.file_name_from(&abs_path),
            }
        };

        *file = self.table.allocate(&abs_path, &candidate);
    }
}

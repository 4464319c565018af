//! Diagnostic pass flagging absolute resource paths.

use qry_fs::is_absolute;
use qry_project::{Project, ResourceWorker};

use crate::exposer::expose_whole_project_resources;

/// Worker recording whether any visited file path is absolute.
///
/// Purely diagnostic: exports still proceed, but absolute paths usually mean
/// the project will not be portable across machines, which is worth
/// surfacing before a consolidation run.
#[derive(Default)]
pub struct AbsolutePathChecker {
    has_absolute_filenames: bool,
}

impl AbsolutePathChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_absolute_filenames(&self) -> bool {
        self.has_absolute_filenames
    }
}

impl ResourceWorker for AbsolutePathChecker {
    fn expose_file(&mut self, file: &mut String) {
        if is_absolute(file) {
            self.has_absolute_filenames = true;
        }
    }
}

/// Returns true when any resource reference in the project uses an absolute
/// path.
pub fn has_project_absolute_paths(project: &mut Project) -> bool {
    let mut checker = AbsolutePathChecker::new();
    expose_whole_project_resources(project, &mut checker);
    checker.has_absolute_filenames()
}

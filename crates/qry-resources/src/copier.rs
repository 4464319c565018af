//! Orchestration: rename-table computation followed by physical copies.

use std::collections::BTreeMap;

use log::{info, warn};
use qry_fs::FileSystem;
use qry_project::{Object, Project};

use crate::absolute_path::has_project_absolute_paths;
use crate::asset_merging::AssetMergingHelper;
use crate::exposer::expose_whole_project_resources;
use crate::merging::ResourcesMergingHelper;
use crate::Error;

/// Knobs of a consolidation run.
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    /// When true the live project's references are rewritten to the new
    /// names; when false the traversal runs over a deep copy and the caller's
    /// project is left untouched.
    pub update_original_project: bool,
    /// Keep absolute paths that cannot be expressed relative to the project
    /// directory as-is instead of flattening them.
    pub preserve_absolute_filenames: bool,
    /// Mirror the project's subdirectory layout in the destination instead
    /// of flattening everything to basenames.
    pub preserve_directories_structure: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            update_original_project: false,
            preserve_absolute_filenames: true,
            preserve_directories_structure: true,
        }
    }
}

/// Outcome of a best-effort copy pass.
///
/// A failed file never aborts the run; it is logged, recorded here and
/// skipped. Callers needing strict failure detection inspect `failures`.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Files the run attempted to copy.
    pub attempted: usize,
    /// Files copied successfully.
    pub copied: usize,
    /// Source paths that could not be copied.
    pub failures: Vec<String>,
}

impl CopyReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copies every file a project references into a destination directory,
/// under collision-free names.
pub struct ProjectResourcesCopier;

impl ProjectResourcesCopier {
    /// Consolidates the whole project into `destination_dir`.
    ///
    /// The rename table is fully computed before the first copy; resource
    /// sharing cannot be detected earlier.
    pub fn copy_all_resources_to(
        project: &mut Project,
        fs: &dyn FileSystem,
        destination_dir: &str,
        options: CopyOptions,
    ) -> Result<CopyReport, Error> {
        if has_project_absolute_paths(project) {
            info!("project contains absolute resource paths; export will rewrite them");
        }

        let base_directory = fs.dir_name_from(&project.file_path);
        let mut helper = ResourcesMergingHelper::new(fs);
        helper.set_base_directory(&base_directory);
        helper.set_preserve_absolute_filenames(options.preserve_absolute_filenames);
        helper.set_preserve_directories_structure(options.preserve_directories_structure);

        if options.update_original_project {
            expose_whole_project_resources(project, &mut helper);
        } else {
            let mut scratch = project.clone();
            expose_whole_project_resources(&mut scratch, &mut helper);
        }

        let table = helper.get_all_resources_old_and_new_filename();
        Ok(Self::copy_table(&table, fs, destination_dir))
    }

    /// Consolidates one object's resources into `destination_dir`, naming
    /// files after `object_full_name`. The object is looked up globally
    /// first, then in each layout; the live project is never modified.
    pub fn copy_object_resources_to(
        project: &Project,
        object_name: &str,
        fs: &dyn FileSystem,
        destination_dir: &str,
        object_full_name: &str,
    ) -> Result<CopyReport, Error> {
        let mut object = Self::find_object(project, object_name)
            .ok_or_else(|| Error::ObjectNotFound(object_name.to_owned()))?
            .clone();
        let base_directory = fs.dir_name_from(&project.file_path);
        let mut helper = AssetMergingHelper::for_object(
            &project.resources,
            &object,
            fs,
            &base_directory,
            object_full_name,
        );
        object.expose_resources(&mut helper);
        let table = helper.get_all_resources_old_and_new_filename();
        Ok(Self::copy_table(&table, fs, destination_dir))
    }

    fn find_object<'a>(project: &'a Project, object_name: &str) -> Option<&'a Object> {
        project
            .objects
            .iter()
            .chain(project.layouts.iter().flat_map(|l| l.objects.iter()))
            .find(|o| o.name == object_name)
    }

    fn copy_table(
        table: &BTreeMap<String, String>,
        fs: &dyn FileSystem,
        destination_dir: &str,
    ) -> CopyReport {
        let mut report = CopyReport::default();
        for (new_name, old_path) in table {
            if old_path.is_empty() {
                continue;
            }
            report.attempted += 1;
            let destination = fs
                .make_absolute(new_name, destination_dir)
                .unwrap_or_else(|| {
                    format!("{}/{new_name}", destination_dir.trim_end_matches('/'))
                });

            let destination_parent = fs.dir_name_from(&destination);
            if !destination_parent.is_empty() && !fs.dir_exists(&destination_parent) {
                if let Err(err) = fs.mk_dir(&destination_parent) {
                    warn!("unable to create directory '{destination_parent}': {err}");
                    report.failures.push(old_path.clone());
                    continue;
                }
            }

            match fs.copy_file(old_path, &destination) {
                Ok(()) => report.copied += 1,
                Err(err) => {
                    warn!("unable to copy '{old_path}' to '{destination}': {err}");
                    report.failures.push(old_path.clone());
                }
            }
        }
        report
    }
}

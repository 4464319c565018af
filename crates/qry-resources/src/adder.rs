//! Catalogue maintenance: finding and pruning unused resources.

use qry_project::{Project, ResourceKind};

use crate::exposer::expose_whole_project_resources;
use crate::usage::ResourcesInUseHelper;

/// Maintenance entry points over the resource catalogue.
pub struct ProjectResourcesAdder;

impl ProjectResourcesAdder {
    /// Catalogue entries of `kind` that no usage site references, in
    /// catalogue order.
    pub fn get_all_useless(project: &mut Project, kind: ResourceKind) -> Vec<String> {
        let mut helper = ResourcesInUseHelper::new();
        expose_whole_project_resources(project, &mut helper);
        let used = helper.get_all(kind);
        project
            .resources
            .iter()
            .filter(|r| r.kind == kind && !used.contains(&r.name))
            .map(|r| r.name.clone())
            .collect()
    }

    /// Removes every unused entry of `kind` from the catalogue.
    pub fn remove_all_useless(project: &mut Project, kind: ResourceKind) {
        for name in Self::get_all_useless(project, kind) {
            project.resources.remove(&name);
        }
    }
}

//! Logical renames: rewriting resource identifiers, never files.

use std::collections::BTreeMap;

use qry_project::{Project, ResourceKind, ResourceWorker, ResourcesContainer};
use serde_json::Value;

use crate::exposer::expose_whole_project_resources;

/// Worker substituting logical resource identifiers through a caller-supplied
/// `old → new` table.
///
/// `expose_file` is deliberately a strict no-op: renaming an identifier must
/// never touch the file it points at.
pub struct ResourcesRenamer {
    old_to_new: BTreeMap<String, String>,
}

impl ResourcesRenamer {
    pub fn new(old_to_new: BTreeMap<String, String>) -> Self {
        Self { old_to_new }
    }
}

impl ResourceWorker for ResourcesRenamer {
    fn expose_resource_of_kind(&mut self, _kind: ResourceKind, name: &mut String) {
        if let Some(new_name) = self.old_to_new.get(name.as_str()) {
            *name = new_name.clone();
        }
    }
}

/// Renames resources project-wide: catalogue entries, every reference, and
/// identifiers nested in embedded resource mappings.
///
/// Identifiers absent from the catalogue are ignored (nothing to do, not a
/// failure); a rename whose target name is already taken by another entry
/// skips the catalogue part but still rewrites references, matching the
/// caller's explicit table.
pub fn rename_resources(project: &mut Project, old_to_new: &BTreeMap<String, String>) {
    let mut renamer = ResourcesRenamer::new(old_to_new.clone());
    expose_whole_project_resources(project, &mut renamer);
    for (old_name, new_name) in old_to_new {
        // Input errors (unknown name, taken target) are treated as
        // "nothing to do" per the engine's error taxonomy.
        let _ = project.resources.rename(old_name, new_name);
    }
    rename_embedded_resources(&mut project.resources, old_to_new);
}

/// Rewrites the values (never the keys) of every `embeddedResourcesMapping`
/// object found in catalogue metadata through the rename table.
///
/// Metadata that is not valid JSON, or has no such mapping, is left exactly
/// as it was.
pub fn rename_embedded_resources(
    resources: &mut ResourcesContainer,
    old_to_new: &BTreeMap<String, String>,
) {
    for resource in resources.iter_mut() {
        if resource.metadata.is_empty() {
            continue;
        }
        let Ok(Value::Object(mut root)) = serde_json::from_str(&resource.metadata) else {
            continue;
        };
        let Some(Value::Object(mapping)) = root.get_mut("embeddedResourcesMapping") else {
            continue;
        };
        let mut changed = false;
        for value in mapping.values_mut() {
            if let Value::String(identifier) = value {
                if let Some(new_name) = old_to_new.get(identifier.as_str()) {
                    *identifier = new_name.clone();
                    changed = true;
                }
            }
        }
        if changed {
            if let Ok(metadata) = serde_json::to_string(&Value::Object(root)) {
                resource.metadata = metadata;
            }
        }
    }
}

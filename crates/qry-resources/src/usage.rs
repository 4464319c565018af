//! Collection of the resource names a project or scene actually uses.
//!
//! Three shapes of the same idea: per-kind sets, a flat set, and a
//! serializable ordered declaration. All track logical names, never files,
//! and silently collapse duplicates.

use std::collections::{BTreeMap, BTreeSet};

use qry_project::{Project, ResourceKind, ResourceWorker};
use serde::{Deserialize, Serialize};

use crate::exposer::{expose_layout_resources, expose_whole_project_resources};
use crate::Error;

/// Worker collecting one set of names per resource kind.
#[derive(Default)]
pub struct ResourcesInUseHelper {
    by_kind: BTreeMap<ResourceKind, BTreeSet<String>>,
}

impl ResourcesInUseHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names seen for one kind.
    pub fn get_all(&self, kind: ResourceKind) -> BTreeSet<String> {
        self.by_kind.get(&kind).cloned().unwrap_or_default()
    }

    /// Every name seen, all kinds merged.
    pub fn get_all_resource_names(&self) -> BTreeSet<String> {
        self.by_kind.values().flatten().cloned().collect()
    }
}

impl ResourceWorker for ResourcesInUseHelper {
    fn expose_resource_of_kind(&mut self, kind: ResourceKind, name: &mut String) {
        if !name.is_empty() {
            self.by_kind.entry(kind).or_default().insert(name.clone());
        }
    }
}

/// Worker collecting a single flat set of names, kind ignored.
#[derive(Default)]
struct ResourcesCollector {
    names: BTreeSet<String>,
}

impl ResourceWorker for ResourcesCollector {
    fn expose_resource_of_kind(&mut self, _kind: ResourceKind, name: &mut String) {
        if !name.is_empty() {
            self.names.insert(name.clone());
        }
    }
}

/// Static entry points answering "which resources does this project / this
/// scene use".
pub struct SceneResourcesFinder;

impl SceneResourcesFinder {
    /// Names used anywhere in the project.
    pub fn find_project_resources(project: &mut Project) -> BTreeSet<String> {
        let mut collector = ResourcesCollector::default();
        expose_whole_project_resources(project, &mut collector);
        collector.names
    }

    /// Names one scene can reach (its objects, layers, events and linked
    /// sheets).
    pub fn find_scene_resources(
        project: &mut Project,
        layout_name: &str,
    ) -> Result<BTreeSet<String>, Error> {
        let mut collector = ResourcesCollector::default();
        expose_layout_resources(project, layout_name, &mut collector)?;
        Ok(collector.names)
    }
}

/// One entry of a [`UsedResourcesDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedResource {
    pub kind: ResourceKind,
    pub name: String,
}

/// Serializable, ordered list of the resources something uses, written into
/// output documents (preview manifests, hot-reload indexes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedResourcesDeclaration {
    pub resources: Vec<UsedResource>,
}

/// Worker appending each first sighting of a resource to a declaration,
/// deduplicating through a local set while keeping discovery order.
#[derive(Default)]
pub struct UsedResourcesDeclarer {
    declaration: UsedResourcesDeclaration,
    seen: BTreeSet<(ResourceKind, String)>,
}

impl UsedResourcesDeclarer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_declaration(self) -> UsedResourcesDeclaration {
        self.declaration
    }

    /// Declares everything the whole project uses.
    pub fn declare_project_resources(project: &mut Project) -> UsedResourcesDeclaration {
        let mut declarer = Self::new();
        expose_whole_project_resources(project, &mut declarer);
        declarer.into_declaration()
    }

    /// Declares everything one scene uses.
    pub fn declare_scene_resources(
        project: &mut Project,
        layout_name: &str,
    ) -> Result<UsedResourcesDeclaration, Error> {
        let mut declarer = Self::new();
        expose_layout_resources(project, layout_name, &mut declarer)?;
        Ok(declarer.into_declaration())
    }
}

impl ResourceWorker for UsedResourcesDeclarer {
    fn expose_resource_of_kind(&mut self, kind: ResourceKind, name: &mut String) {
        if name.is_empty() {
            return;
        }
        if self.seen.insert((kind, name.clone())) {
            self.declaration.resources.push(UsedResource {
                kind,
                name: name.clone(),
            });
        }
    }
}

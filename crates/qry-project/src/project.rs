use crate::events::Event;
use crate::layout::Layout;
use crate::object::Object;
use crate::resource::{ResourceKind, ResourcesContainer};

/// Event sheet living outside any layout, included from layouts through link
/// events.
#[derive(Clone)]
pub struct ExternalEvents {
    pub name: String,
    /// Layout this sheet is edited against. Purely informational for the
    /// pipeline: resource usage follows links, not this association.
    pub associated_layout: String,
    pub events: Vec<Event>,
}

impl ExternalEvents {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            associated_layout: String::new(),
            events: Vec::new(),
        }
    }
}

/// Function defined in an events-based extension.
#[derive(Clone)]
pub struct EventsFunction {
    pub name: String,
    pub events: Vec<Event>,
}

/// Events-based extension: a bag of functions whose event sheets may
/// reference resources.
#[derive(Clone)]
pub struct EventsFunctionsExtension {
    pub name: String,
    pub functions: Vec<EventsFunction>,
}

/// Platform-specific asset slot (per-OS icon, splash screen, …) referencing a
/// catalogue entry by name.
#[derive(Clone)]
pub struct PlatformAsset {
    pub platform: String,
    pub slot: String,
    pub kind: ResourceKind,
    pub resource_name: String,
}

/// The project root: the resource catalogue plus everything that references
/// it.
#[derive(Clone)]
pub struct Project {
    /// Path of the project file on disk; resource paths resolve against its
    /// containing directory.
    pub file_path: String,
    pub resources: ResourcesContainer,
    /// Objects shared by every layout.
    pub objects: Vec<Object>,
    pub layouts: Vec<Layout>,
    pub external_events: Vec<ExternalEvents>,
    pub extensions: Vec<EventsFunctionsExtension>,
    pub platform_assets: Vec<PlatformAsset>,
}

impl Project {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            resources: ResourcesContainer::new(),
            objects: Vec::new(),
            layouts: Vec::new(),
            external_events: Vec::new(),
            extensions: Vec::new(),
            platform_assets: Vec::new(),
        }
    }

    pub fn insert_new_layout(&mut self, name: &str) -> &mut Layout {
        self.layouts.push(Layout::new(name));
        let last = self.layouts.len() - 1;
        &mut self.layouts[last]
    }

    pub fn insert_new_external_events(&mut self, name: &str) -> &mut ExternalEvents {
        self.external_events.push(ExternalEvents::new(name));
        let last = self.external_events.len() - 1;
        &mut self.external_events[last]
    }

    pub fn get_layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn get_layout_mut(&mut self, name: &str) -> Option<&mut Layout> {
        self.layouts.iter_mut().find(|l| l.name == name)
    }

    pub fn has_layout(&self, name: &str) -> bool {
        self.layouts.iter().any(|l| l.name == name)
    }

    pub fn has_external_events(&self, name: &str) -> bool {
        self.external_events.iter().any(|e| e.name == name)
    }
}

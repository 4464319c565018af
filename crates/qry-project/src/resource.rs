use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by the resource catalogue.
#[derive(Error, Debug)]
pub enum Error {
    /// Name already used by another catalogue entry.
    #[error("resource name '{0}' already used")]
    NameAlreadyUsed(String),
    /// No entry under this name.
    #[error("resource '{0}' not found")]
    ResourceNotFound(String),
}

/// Closed set of resource kinds the pipeline understands.
///
/// The string spellings (`bitmapFont`, `model3D`, …) follow the on-disk
/// project convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Image,
    Audio,
    Font,
    Video,
    Json,
    Tilemap,
    Tileset,
    BitmapFont,
    Model3D,
    Atlas,
    Spine,
}

impl ResourceKind {
    /// Every kind, for callers that iterate per-kind collections.
    pub const ALL: [Self; 11] = [
        Self::Image,
        Self::Audio,
        Self::Font,
        Self::Video,
        Self::Json,
        Self::Tilemap,
        Self::Tileset,
        Self::BitmapFont,
        Self::Model3D,
        Self::Atlas,
        Self::Spine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Font => "font",
            Self::Video => "video",
            Self::Json => "json",
            Self::Tilemap => "tilemap",
            Self::Tileset => "tileset",
            Self::BitmapFont => "bitmapFont",
            Self::Model3D => "model3D",
            Self::Atlas => "atlas",
            Self::Spine => "spine",
        }
    }

    pub fn from_str(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalogue entry: a logical name bound to a file path plus free-form
/// metadata.
///
/// Everything else in the project references the entry by `name`, never by
/// pointer. The `metadata` string may itself hold a JSON object with an
/// `embeddedResourcesMapping` member whose values are other resource names;
/// renaming passes must rewrite those values too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub kind: ResourceKind,
    pub file: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub metadata: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, kind: ResourceKind, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            file: file.into(),
            metadata: String::new(),
        }
    }
}

/// Project-wide catalogue of resources, unique by name, iteration in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResourcesContainer {
    resources: Vec<Resource>,
}

impl ResourcesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry; fails when the name is already taken.
    pub fn add(&mut self, resource: Resource) -> Result<(), Error> {
        if self.has(&resource.name) {
            return Err(Error::NameAlreadyUsed(resource.name));
        }
        self.resources.push(resource);
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.resources.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| r.name == name)
    }

    /// Removes and returns the entry, if present.
    pub fn remove(&mut self, name: &str) -> Option<Resource> {
        let index = self.resources.iter().position(|r| r.name == name)?;
        Some(self.resources.remove(index))
    }

    /// Renames an entry. Fails when the old name is unknown or the new name
    /// is taken by a different entry.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), Error> {
        if old_name == new_name {
            return Ok(());
        }
        if self.has(new_name) {
            return Err(Error::NameAlreadyUsed(new_name.to_owned()));
        }
        let resource = self
            .get_mut(old_name)
            .ok_or_else(|| Error::ResourceNotFound(old_name.to_owned()))?;
        resource.name = new_name.to_owned();
        Ok(())
    }

    pub fn names(&self) -> Vec<String> {
        self.resources.iter().map(|r| r.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Resource> {
        self.resources.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

//! Per-object consolidation with human-readable destination names.

use std::collections::BTreeMap;

use log::warn;
use qry_fs::{normalize_separator, FileSystem};
use qry_project::{Object, ResourceKind, ResourceWorker, ResourcesContainer, SpriteConfiguration};

use crate::merging::RenameTable;

/// Worker consolidating the resources of a single object, naming sprite
/// frames after the object instead of their source files.
///
/// Frames of an animation are named
/// `<objectFullName>[_<animationName>][_<frameIndexList>].<ext>`; frames
/// sharing one source image collapse their indices into a semicolon-joined
/// list, so a looping four-frame animation reusing two images yields two
/// renamed files. The index list is omitted when the animation uses a single
/// image. A resource claimed by more than one animation keeps the first
/// animation's name; later claims are logged and skipped (known, accepted
/// limitation of the reference behavior).
pub struct AssetMergingHelper<'a> {
    fs: &'a dyn FileSystem,
    base_directory: String,
    /// Resource name → source file, snapshot of the catalogue.
    catalogue_files: BTreeMap<String, String>,
    /// Resource name → destination name derived from the object's
    /// animations. Resources without an entry fall back to their basename.
    desired_filenames: BTreeMap<String, String>,
    table: RenameTable,
}

impl<'a> AssetMergingHelper<'a> {
    /// Prepares a helper for one object. The animation-derived names are
    /// fully decided here, before any reference is visited, because frame
    /// sharing can only be detected once all frames are known.
    pub fn for_object(
        resources: &ResourcesContainer,
        object: &Object,
        fs: &'a dyn FileSystem,
        base_directory: &str,
        object_full_name: &str,
    ) -> Self {
        let catalogue_files = resources
            .iter()
            .map(|r| (r.name.clone(), r.file.clone()))
            .collect();
        let mut helper = Self {
            fs,
            base_directory: normalize_separator(base_directory),
            catalogue_files,
            desired_filenames: BTreeMap::new(),
            table: RenameTable::default(),
        };
        if let Some(sprite) = object
            .configuration
            .as_any()
            .downcast_ref::<SpriteConfiguration>()
        {
            helper.plan_sprite_names(sprite, object_full_name);
        }
        helper
    }

    /// The finished `new name → old absolute path` map.
    pub fn get_all_resources_old_and_new_filename(&self) -> BTreeMap<String, String> {
        self.table.new_to_old()
    }

    fn plan_sprite_names(&mut self, sprite: &SpriteConfiguration, object_full_name: &str) {
        for animation in &sprite.animations {
            // Group the animation's frames by source image, first-seen order.
            let mut frames_by_image: Vec<(String, Vec<usize>)> = Vec::new();
            let mut frame_index = 0usize;
            for direction in &animation.directions {
                for frame in &direction.sprites {
                    if !frame.image_name.is_empty() {
                        match frames_by_image
                            .iter_mut()
                            .find(|(name, _)| *name == frame.image_name)
                        {
                            Some((_, indices)) => indices.push(frame_index),
                            None => frames_by_image
                                .push((frame.image_name.clone(), vec![frame_index])),
                        }
                    }
                    frame_index += 1;
                }
            }

            let several_images = frames_by_image.len() > 1;
            for (resource_name, indices) in frames_by_image {
                if self.desired_filenames.contains_key(&resource_name) {
                    warn!(
                        "resource '{resource_name}' is used by several animations; \
                         keeping the name chosen by the first one"
                    );
                    continue;
                }
                let mut destination = object_full_name.to_owned();
                if !animation.name.is_empty() {
                    destination.push('_');
                    destination.push_str(&animation.name);
                }
                if several_images {
                    destination.push('_');
                    let list: Vec<String> = indices.iter().map(usize::to_string).collect();
                    destination.push_str(&list.join(";"));
                }
                if let Some(extension) = self.extension_of(&resource_name) {
                    destination.push('.');
                    destination.push_str(&extension);
                }
                self.desired_filenames.insert(resource_name, destination);
            }
        }
    }

    fn extension_of(&self, resource_name: &str) -> Option<String> {
        let file = self.catalogue_files.get(resource_name)?;
        let basename = self.fs.file_name_from(file);
        let idx = basename.rfind('.')?;
        let extension = &basename[idx + 1..];
        (!extension.is_empty()).then(|| extension.to_owned())
    }
}

impl ResourceWorker for AssetMergingHelper<'_> {
    fn expose_resource_of_kind(&mut self, _kind: ResourceKind, name: &mut String) {
        if name.is_empty() {
            return;
        }
        // Unknown identifiers are not resources of this project.
        let Some(file) = self.catalogue_files.get(name.as_str()) else {
            return;
        };
        if file.is_empty() {
            return;
        }
        let normalized = normalize_separator(file);
        let Some(abs_path) = self.fs.make_absolute(&normalized, &self.base_directory) else {
            return;
        };
        if let Some(new_name) = self.table.get(&abs_path) {
            *name = new_name.clone();
            return;
        }
        let candidate = self
            .desired_filenames
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| self.fs.file_name_from(&abs_path));
        *name = self.table.allocate(&abs_path, &candidate);
    }
}

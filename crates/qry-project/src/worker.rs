use crate::resource::ResourceKind;

/// Capability interface over every resource reference found in a project.
///
/// The traversal hands each reference to the worker as a `&mut String`, so a
/// worker may rewrite it in place; the mutation channel is explicit in every
/// signature rather than hidden behind aliasing.
///
/// Two hooks cover the two shapes of reference:
/// - [`expose_file`](Self::expose_file) receives physical file paths (the
///   catalogue entries' `file` fields). Default: no-op.
/// - the per-kind methods ([`expose_image`](Self::expose_image), …) receive
///   logical resource names from usage sites. Each defaults to
///   [`expose_resource_of_kind`](Self::expose_resource_of_kind), itself a
///   no-op, so a worker either overrides the kinds it cares about or
///   overrides the single generic hook to treat all kinds alike.
pub trait ResourceWorker {
    /// Visits a physical file path.
    fn expose_file(&mut self, _file: &mut String) {}

    /// Generic hook behind every per-kind method. Default: no-op.
    fn expose_resource_of_kind(&mut self, _kind: ResourceKind, _name: &mut String) {}

    fn expose_image(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Image, name);
    }

    fn expose_audio(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Audio, name);
    }

    fn expose_font(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Font, name);
    }

    fn expose_video(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Video, name);
    }

    fn expose_json(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Json, name);
    }

    fn expose_tilemap(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Tilemap, name);
    }

    fn expose_tileset(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Tileset, name);
    }

    fn expose_bitmap_font(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::BitmapFont, name);
    }

    fn expose_model_3d(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Model3D, name);
    }

    fn expose_atlas(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Atlas, name);
    }

    fn expose_spine(&mut self, name: &mut String) {
        self.expose_resource_of_kind(ResourceKind::Spine, name);
    }

    /// Dispatches a typed reference to the matching per-kind method, so that
    /// a worker overriding only `expose_image` still sees image references
    /// coming from kind-tagged locations (event parameters, asset slots).
    fn expose_resource(&mut self, kind: ResourceKind, name: &mut String) {
        match kind {
            ResourceKind::Image => self.expose_image(name),
            ResourceKind::Audio => self.expose_audio(name),
            ResourceKind::Font => self.expose_font(name),
            ResourceKind::Video => self.expose_video(name),
            ResourceKind::Json => self.expose_json(name),
            ResourceKind::Tilemap => self.expose_tilemap(name),
            ResourceKind::Tileset => self.expose_tileset(name),
            ResourceKind::BitmapFont => self.expose_bitmap_font(name),
            ResourceKind::Model3D => self.expose_model_3d(name),
            ResourceKind::Atlas => self.expose_atlas(name),
            ResourceKind::Spine => self.expose_spine(name),
        }
    }
}

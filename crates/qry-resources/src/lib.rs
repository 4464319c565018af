//! Resource discovery, consolidation and export engine.
//!
//! The engine walks a project ([`exposer`]), hands every resource reference
//! to a policy ([`qry_project::ResourceWorker`] implementations in this
//! crate), and orchestrates physical copies ([`copier`]).
//!
//! The policies built on the shared traversal:
//! - [`ResourcesMergingHelper`] computes a collision-free old→new filename
//!   table for consolidating every referenced file into one destination,
//!   rewriting references in place as it goes.
//! - [`AssetMergingHelper`] does the same for a single object, renaming
//!   sprite frames to a human-readable `object_animation_frames.ext` scheme.
//! - [`ResourcesRenamer`] rewrites logical resource identifiers (never
//!   files), cascading into embedded resource mappings in metadata.
//! - [`ResourcesInUseHelper`], [`SceneResourcesFinder`] and
//!   [`UsedResourcesDeclarer`] collect which resources a project or a single
//!   scene actually uses.
//! - [`AbsolutePathChecker`] flags references using absolute paths.
//! - [`ProjectResourcesCopier`] runs a merging traversal and then copies
//!   every file, tolerating and logging per-file failures.
//!
//! Everything is synchronous and single-threaded; run one engine instance
//! per project if exporting several in parallel.

use thiserror::Error;

mod absolute_path;
mod adder;
mod asset_merging;
mod copier;
mod exposer;
mod merging;
mod new_name_generator;
mod renamer;
mod usage;

pub use absolute_path::{has_project_absolute_paths, AbsolutePathChecker};
pub use adder::ProjectResourcesAdder;
pub use asset_merging::AssetMergingHelper;
pub use copier::{CopyOptions, CopyReport, ProjectResourcesCopier};
pub use exposer::{
    expose_layout_resources, expose_project_resources, expose_whole_project_resources,
};
pub use merging::ResourcesMergingHelper;
pub use new_name_generator::{generate, generate_unprefixed};
pub use renamer::{rename_embedded_resources, rename_resources, ResourcesRenamer};
pub use usage::{
    ResourcesInUseHelper, SceneResourcesFinder, UsedResource, UsedResourcesDeclaration,
    UsedResourcesDeclarer,
};

/// Error returned by engine entry points.
///
/// Per-file copy failures are not errors: they are logged and skipped so one
/// bad asset never aborts the rest of an export (see [`CopyReport`]).
#[derive(Error, Debug)]
pub enum Error {
    /// The named object exists neither globally nor in any layout.
    #[error("object '{0}' not found in the project")]
    ObjectNotFound(String),
    /// No layout with this name.
    #[error("layout '{0}' not found in the project")]
    LayoutNotFound(String),
    /// Filesystem failure outside the per-file best-effort loop.
    #[error(transparent)]
    FileSystem(#[from] qry_fs::Error),
}

//! In-memory project model consumed by the resource pipeline.
//!
//! A project owns a resource catalogue (logical name → file + metadata) and a
//! tree of elements that reference catalogue entries by name: objects and
//! their configurations, behaviors, layer and object effects, events with
//! resource-typed parameters, external event sheets, extension functions and
//! platform-specific asset slots.
//!
//! The model deliberately stops at the boundary the pipeline needs:
//! serialization of whole projects, the extension registry and anything
//! UI-related live elsewhere. What matters here is that every resource
//! reference is reachable, mutable in place, and visited through the
//! [`ResourceWorker`] capability trait.

mod events;
mod layout;
mod object;
mod project;
mod resource;
mod worker;

pub use events::{Event, Instruction, Parameter};
pub use layout::{Layer, Layout};
pub use object::{
    Animation, Behavior, Direction, Effect, GenericConfiguration, Object, ObjectConfiguration,
    Sprite, SpriteConfiguration,
};
pub use project::{
    EventsFunction, EventsFunctionsExtension, ExternalEvents, PlatformAsset, Project,
};
pub use resource::{Error, Resource, ResourceKind, ResourcesContainer};
pub use worker::ResourceWorker;

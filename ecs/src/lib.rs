//! # RedLilium ECS
//!
//! A small entity-component store and the registry editor built on top of
//! the RedLilium inspector.
//!
//! ## Core Types
//!
//! - [`Entity`] — Slot index plus spawn tick; inspected as an opaque handle
//! - [`World`] — Owns entities and one [`ComponentStorage`] per component type
//! - [`SparseSetInner`] — Typed sparse set behind each storage
//! - [`Component`] — Bound for storable types (`Clone + Send + Sync + 'static`)
//!
//! ## Editor
//!
//! - [`ui::RegistryEditor`] — Filterable entity list with add/remove/clone/delete
//! - [`ui::EditorConfig`] — TOML-loaded editor settings

mod component;
mod entity;
mod sparse_set;
pub mod ui;
mod world;

pub use component::Component;
pub use entity::Entity;
pub use sparse_set::{ComponentStorage, SparseSetInner};
pub use world::{EcsError, World};

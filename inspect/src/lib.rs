//! # RedLilium Inspect
//!
//! Type-driven value inspector. Any value whose type implements [`Inspect`]
//! can be drawn as an editable tree with a single call.
//!
//! ## Core Types
//!
//! - [`Inspect`] - Per-type rendering, read-only and editable
//! - [`Shape`] / [`ShapeFacts`] - Compile-time classification into rendering strategies
//! - [`Inspector`] - Entry point owning the type-name cache and override table
//! - [`InspectContext`] - Per-pass recursion context with the depth bound
//! - [`Overrides`] - Per-type rendering and default-value replacements
//! - [`TypeNames`] - Readable display names for Rust types
//!
//! ## Drawing
//!
//! - [`Widgets`] - Widget surface the strategies draw on
//! - [`EguiWidgets`] - `egui` implementation of [`Widgets`]
//!
//! ```ignore
//! let inspector = Inspector::new();
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     inspector.show_mut(&mut EguiWidgets::new(ui), &mut settings, "Settings");
//! });
//! ```

extern crate self as redlilium_inspect;

mod context;
mod depth;
mod egui_widgets;
mod impls;
mod inspect;
mod inspector;
mod overrides;
pub mod scalar;
mod shape;
pub mod strategy;
pub mod theme;
mod type_name;
mod widgets;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use context::InspectContext;
pub use depth::{DEPTH_PLACEHOLDER, MAX_DEPTH, current_depth};
pub use egui_widgets::EguiWidgets;
pub use inspect::Inspect;
pub use inspect_macro::Inspect;
pub use inspector::Inspector;
pub use overrides::Overrides;
pub use scalar::{FloatKind, IntKind, Integer};
pub use shape::{SequenceKind, Shape, ShapeFacts};
pub use strategy::READONLY_REASON;
pub use type_name::{CacheStats, PRETTY_WRAP_LEN, TypeNameError, TypeNames, pretty, short_name};
pub use widgets::{AddContents, ButtonKind, Tone, Widgets};

#[doc(hidden)]
pub use bitflags;

//! The [`Inspect`] trait.
//!
//! Implementations exist for std scalars, containers, tuples, wrappers and
//! smart pointers. User types get one through `#[derive(Inspect)]`:
//!
//! ```ignore
//! #[derive(Inspect, Default)]
//! struct Player {
//!     name: String,
//!     health: f32,
//!     inventory: Vec<Item>,
//! }
//! ```
//!
//! # Writing an impl by hand
//!
//! A hand-written impl is how a type opts out of structural handling. Set
//! `SHAPE` to [`Shape::UserOverride`] and draw through the context:
//!
//! ```ignore
//! impl Inspect for Angle {
//!     const SHAPE: Shape = Shape::UserOverride;
//!
//!     fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
//!         let text = format!("{:.1} deg", self.0.to_degrees());
//!         cx.readonly::<Self>(name, &text);
//!     }
//!
//!     fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
//!         let mut degrees = self.0.to_degrees() as f64;
//!         if cx.ui().float_edit(name, &mut degrees, FloatKind::Single, "Angle") {
//!             self.0 = (degrees as f32).to_radians();
//!         }
//!     }
//! }
//! ```

use crate::context::InspectContext;
use crate::inspector::Inspector;
use crate::shape::Shape;

/// A value the dispatcher knows how to render.
///
/// `inspect` is the read-only path and must never mutate; `inspect_mut`
/// may edit in place and perform structural changes (add/remove elements,
/// switch alternatives, create/clear optionals).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be inspected",
    label = "no inspection shape for this type",
    note = "derive `Inspect` for structs and enums, or implement it by hand to supply an override"
)]
pub trait Inspect: Sized + 'static {
    /// Rendering strategy category, resolved at compile time.
    const SHAPE: Shape;

    /// Whether [`construct`](Self::construct) produces a value.
    const CONSTRUCTIBLE: bool = false;

    /// Fresh default instance used for emplace, alternative switches and
    /// component creation.
    fn construct() -> Option<Self> {
        None
    }

    /// Like [`construct`](Self::construct), but members are built through
    /// `inspector` so its default providers reach nested values. Composite
    /// types override this; leaves keep the default.
    fn construct_with(inspector: &Inspector) -> Option<Self> {
        let _ = inspector;
        Self::construct()
    }

    /// Whether [`construct_with`](Self::construct_with) produces a value.
    fn constructible_with(inspector: &Inspector) -> bool {
        let _ = inspector;
        Self::CONSTRUCTIBLE
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>);

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>);
}

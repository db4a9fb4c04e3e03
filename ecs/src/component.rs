//! Component bound.
//!
//! Components can be any `Clone + Send + Sync + 'static` type. `Clone` is
//! required so [`World::clone_components`](crate::World::clone_components)
//! can deep-copy an entity without knowing its component types.

/// Marker for types storable in a [`World`](crate::World).
///
/// Implemented for every eligible type; there is nothing to derive.
pub trait Component: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Component for T {}

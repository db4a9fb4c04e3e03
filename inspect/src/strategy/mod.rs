//! Rendering strategies, one module per shape family.
//!
//! Built-in and derived [`Inspect`](crate::Inspect) impls are thin: they
//! pick the strategy matching their [`Shape`](crate::Shape) and hand over
//! the value. Strategies recurse through
//! [`InspectContext::show`](crate::InspectContext::show) and never touch a
//! GUI toolkit directly.

pub mod aggregate;
pub mod enumeration;
pub mod flags;
pub mod handle;
pub mod indirection;
pub mod optional;
pub mod sequence;
pub mod sum;

/// Tooltip on any value or action that cannot change on the read-only path.
pub const READONLY_REASON: &str = "Cannot edit this field it is not writable.";

/// Tooltip on create actions whose type has no default value.
pub const NOT_CONSTRUCTIBLE: &str =
    "Cannot create default instance the type is not default-constructible";

/// Tooltip on alternatives that cannot be switched to.
pub const ALTERNATIVE_NOT_CONSTRUCTIBLE: &str = "This alternative is not default-constructible!";

/// Tooltip on clear actions for containers without a reset operation.
pub const NOT_RESETTABLE: &str = "This value cannot be cleared";

/// Tooltip on add/remove actions of fixed-size containers.
pub const FIXED_SIZE: &str = "This container has a fixed size";

/// Placeholder text for zero-size values.
pub const EMPTY_TEXT: &str = "{ empty }";

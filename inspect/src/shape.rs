//! Shape classification.
//!
//! Every inspectable type belongs to exactly one [`Shape`]. The shape is an
//! associated constant of [`Inspect`](crate::Inspect), so it is resolved once
//! per type at compile time. Derived and built-in impls describe what a type
//! can do with a [`ShapeFacts`] record and let [`Shape::classify`] pick the
//! winning category in a fixed precedence order.
//!
//! ```
//! use redlilium_inspect::{SequenceKind, Shape, ShapeFacts};
//!
//! // A keyed container that also has a Display impl is still a sequence.
//! let facts = ShapeFacts {
//!     sequence: Some(SequenceKind::Keyed),
//!     text: true,
//!     ..ShapeFacts::NONE
//! };
//! assert_eq!(Shape::classify(facts), Some(Shape::Sequence(SequenceKind::Keyed)));
//! ```

/// How a container's elements are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Elements are looked up by key and labelled with the key's text.
    Keyed,
    /// Elements are ordered by position and labelled `[i]`.
    Positional,
    /// A path-shaped container edited as a single line of text.
    PathLike,
}

/// Structural category that selects the rendering strategy for a type.
///
/// Variants are listed in precedence order: when a type could match more
/// than one category, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Rendering supplied by hand, replacing any structural handling.
    UserOverride,
    /// A plain enumeration shown as a single-choice list.
    EnumerationScalar,
    /// Independent bits shown as a checkbox grid.
    BitflagScalar,
    /// An identifier shown only as its underlying integer.
    OpaqueHandle,
    /// Built-in scalars: numbers, booleans, characters, strings, small vectors, colors.
    Primitive,
    /// A homogeneous container.
    Sequence(SequenceKind),
    /// Fixed-arity heterogeneous product.
    FixedTuple,
    /// Tagged union with exactly one active alternative.
    SumType,
    /// Zero-or-one value with explicit create and clear.
    Optional,
    /// Pointer-like value that may be null.
    Indirection,
    /// Zero-size type with nothing to render.
    EmptyMarker,
    /// Rendered through its canonical text form.
    TextConvertible,
    /// Field-carrying composite walked in declaration order.
    ReflectableAggregate,
}

impl Shape {
    /// Position in the precedence chain, `0` being the strongest.
    pub const fn rank(self) -> u8 {
        match self {
            Shape::UserOverride => 0,
            Shape::EnumerationScalar => 1,
            Shape::BitflagScalar => 2,
            Shape::OpaqueHandle => 3,
            Shape::Primitive => 4,
            Shape::Sequence(_) => 5,
            Shape::FixedTuple => 6,
            Shape::SumType => 7,
            Shape::Optional => 8,
            Shape::Indirection => 9,
            Shape::EmptyMarker => 10,
            Shape::TextConvertible => 11,
            Shape::ReflectableAggregate => 12,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::UserOverride => "override",
            Shape::EnumerationScalar => "enumeration",
            Shape::BitflagScalar => "bitflags",
            Shape::OpaqueHandle => "handle",
            Shape::Primitive => "primitive",
            Shape::Sequence(SequenceKind::Keyed) => "keyed sequence",
            Shape::Sequence(SequenceKind::Positional) => "sequence",
            Shape::Sequence(SequenceKind::PathLike) => "path",
            Shape::FixedTuple => "tuple",
            Shape::SumType => "variant",
            Shape::Optional => "optional",
            Shape::Indirection => "pointer",
            Shape::EmptyMarker => "empty",
            Shape::TextConvertible => "text",
            Shape::ReflectableAggregate => "aggregate",
        }
    }

    /// Picks the strongest category the facts allow, or `None` when the
    /// type matches nothing and needs a hand-written impl.
    pub const fn classify(facts: ShapeFacts) -> Option<Shape> {
        if facts.user_override {
            Some(Shape::UserOverride)
        } else if facts.enumeration {
            Some(Shape::EnumerationScalar)
        } else if facts.bitflags {
            Some(Shape::BitflagScalar)
        } else if facts.opaque {
            Some(Shape::OpaqueHandle)
        } else if facts.primitive {
            Some(Shape::Primitive)
        } else if let Some(kind) = facts.sequence {
            Some(Shape::Sequence(kind))
        } else if facts.tuple {
            Some(Shape::FixedTuple)
        } else if facts.sum {
            Some(Shape::SumType)
        } else if facts.optional {
            Some(Shape::Optional)
        } else if facts.indirection {
            Some(Shape::Indirection)
        } else if facts.empty {
            Some(Shape::EmptyMarker)
        } else if facts.text {
            Some(Shape::TextConvertible)
        } else if facts.aggregate {
            Some(Shape::ReflectableAggregate)
        } else {
            None
        }
    }

    /// Const-context form of [`classify`](Self::classify) that refuses to
    /// compile for types matching no category.
    pub const fn of(facts: ShapeFacts) -> Shape {
        match Self::classify(facts) {
            Some(shape) => shape,
            None => panic!(
                "type matches no inspection shape; implement `Inspect` by hand to supply an override"
            ),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities of a type, as seen by the classifier.
///
/// `enumeration`, `bitflags` and `opaque` are disjoint views of enum-like
/// types: a flag set is never also reported as a plain enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeFacts {
    pub user_override: bool,
    pub enumeration: bool,
    pub bitflags: bool,
    pub opaque: bool,
    pub primitive: bool,
    pub sequence: Option<SequenceKind>,
    pub tuple: bool,
    pub sum: bool,
    pub optional: bool,
    pub indirection: bool,
    pub empty: bool,
    pub text: bool,
    pub aggregate: bool,
}

impl ShapeFacts {
    /// No capabilities at all. Classifies to `None`.
    pub const NONE: Self = Self {
        user_override: false,
        enumeration: false,
        bitflags: false,
        opaque: false,
        primitive: false,
        sequence: None,
        tuple: false,
        sum: false,
        optional: false,
        indirection: false,
        empty: false,
        text: false,
        aggregate: false,
    };
}

impl Default for ShapeFacts {
    fn default() -> Self {
        Self::NONE
    }
}

//! [`Inspect`](crate::Inspect) for std and math types.

mod collections;
mod math;
mod primitives;
mod tuples;
mod wrappers;

use crate::shape::{SequenceKind, Shape, ShapeFacts};

pub(crate) const PRIMITIVE: Shape = Shape::of(ShapeFacts {
    primitive: true,
    ..ShapeFacts::NONE
});

pub(crate) const fn sequence(kind: SequenceKind) -> Shape {
    Shape::of(ShapeFacts {
        sequence: Some(kind),
        ..ShapeFacts::NONE
    })
}

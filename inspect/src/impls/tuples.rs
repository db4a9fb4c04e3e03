use std::marker::PhantomData;

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::inspector::Inspector;
use crate::shape::{Shape, ShapeFacts};
use crate::strategy::aggregate::{show_empty, tuple_label};

const TUPLE: Shape = Shape::of(ShapeFacts {
    tuple: true,
    ..ShapeFacts::NONE
});

const EMPTY: Shape = Shape::of(ShapeFacts {
    empty: true,
    ..ShapeFacts::NONE
});

/// Single-member tuples are inlined under the outer name.
fn member_label(arity: usize, index: usize, name: &str) -> String {
    if arity == 1 {
        name.to_owned()
    } else {
        tuple_label(index)
    }
}

macro_rules! impl_inspect_tuple {
    ($arity:literal => $($ty:ident $index:tt),+) => {
        impl<$($ty: Inspect),+> Inspect for ($($ty,)+) {
            const SHAPE: Shape = TUPLE;
            const CONSTRUCTIBLE: bool = $(<$ty as Inspect>::CONSTRUCTIBLE)&&+;

            fn construct() -> Option<Self> {
                Some(($(<$ty as Inspect>::construct()?,)+))
            }

            fn construct_with(inspector: &Inspector) -> Option<Self> {
                Some(($(inspector.construct::<$ty>()?,)+))
            }

            fn constructible_with(inspector: &Inspector) -> bool {
                $(inspector.can_construct::<$ty>())&&+
            }

            fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
                cx.group::<Self>(name, $arity, |cx| {
                    $(cx.show(&self.$index, &member_label($arity, $index, name));)+
                });
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
                cx.group::<Self>(name, $arity, |cx| {
                    $(cx.show_mut(&mut self.$index, &member_label($arity, $index, name));)+
                });
            }
        }
    };
}

impl_inspect_tuple!(1 => A 0);
impl_inspect_tuple!(2 => A 0, B 1);
impl_inspect_tuple!(3 => A 0, B 1, C 2);
impl_inspect_tuple!(4 => A 0, B 1, C 2, D 3);
impl_inspect_tuple!(5 => A 0, B 1, C 2, D 3, E 4);
impl_inspect_tuple!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
impl_inspect_tuple!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_inspect_tuple!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_inspect_tuple!(9 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_inspect_tuple!(10 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_inspect_tuple!(11 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_inspect_tuple!(12 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

// ---------------------------------------------------------------------------
// Empty markers
// ---------------------------------------------------------------------------

impl Inspect for () {
    const SHAPE: Shape = EMPTY;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_empty::<()>(name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_empty::<()>(name, cx);
    }
}

impl<T: ?Sized + 'static> Inspect for PhantomData<T> {
    const SHAPE: Shape = EMPTY;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(PhantomData)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_empty::<Self>(name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_empty::<Self>(name, cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(member_label(1, 0, "pair"), "pair");
        assert_eq!(member_label(3, 2, "triple"), ".2");
    }

    #[test]
    fn construct_requires_every_member() {
        assert_eq!(<(u8, String)>::construct(), Some((0, String::new())));
        assert!(<(u8, String)>::CONSTRUCTIBLE);
        assert!(!<(u8, &'static str)>::CONSTRUCTIBLE);
        assert_eq!(<(u8, &'static str)>::construct(), None);
    }

    #[test]
    fn tuple_shape() {
        assert_eq!(<(i32, f32, bool)>::SHAPE, Shape::FixedTuple);
        assert_eq!(<()>::SHAPE, Shape::EmptyMarker);
    }
}

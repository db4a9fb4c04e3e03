use std::cell::{Cell, OnceCell, RefCell};
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::inspector::Inspector;
use crate::shape::{Shape, ShapeFacts};
use crate::strategy::indirection::{edit_pointer, show_pointer};
use crate::strategy::optional::{OptionalLike, edit_optional, show_optional};
use crate::strategy::sum::{SumType, edit_sum, show_sum};

const OPTIONAL: Shape = Shape::of(ShapeFacts {
    optional: true,
    ..ShapeFacts::NONE
});

const INDIRECTION: Shape = Shape::of(ShapeFacts {
    indirection: true,
    ..ShapeFacts::NONE
});

const SUM: Shape = Shape::of(ShapeFacts {
    sum: true,
    ..ShapeFacts::NONE
});

// ---------------------------------------------------------------------------
// Optional
// ---------------------------------------------------------------------------

impl<T: Inspect> Inspect for Option<T> {
    const SHAPE: Shape = OPTIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(None)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_optional(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_optional(self, name, cx);
    }
}

impl<T: Inspect> OptionalLike for Option<T> {
    type Inner = T;

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        self.as_mut()
    }

    fn emplace(&mut self, inner: T) {
        *self = Some(inner);
    }

    fn reset(&mut self) {
        *self = None;
    }
}

impl<T: Inspect> Inspect for OnceCell<T> {
    const SHAPE: Shape = OPTIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(OnceCell::new())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_optional(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_optional(self, name, cx);
    }
}

impl<T: Inspect> OptionalLike for OnceCell<T> {
    type Inner = T;

    fn get(&self) -> Option<&T> {
        OnceCell::get(self)
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        OnceCell::get_mut(self)
    }

    fn emplace(&mut self, inner: T) {
        self.take();
        let _ = self.set(inner);
    }

    fn reset(&mut self) {
        self.take();
    }
}

// ---------------------------------------------------------------------------
// Sum types
// ---------------------------------------------------------------------------

impl<T: Inspect, E: Inspect> Inspect for Result<T, E> {
    const SHAPE: Shape = SUM;
    const CONSTRUCTIBLE: bool = T::CONSTRUCTIBLE;

    fn construct() -> Option<Self> {
        T::construct().map(Ok)
    }

    fn construct_with(inspector: &Inspector) -> Option<Self> {
        Self::construct_alternative(0, inspector)
    }

    fn constructible_with(inspector: &Inspector) -> bool {
        Self::can_construct_alternative(0, inspector)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_sum(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_sum(self, name, cx);
    }
}

impl<T: Inspect, E: Inspect> SumType for Result<T, E> {
    const ALTERNATIVES: &'static [&'static str] = &["Ok", "Err"];

    fn active(&self) -> usize {
        match self {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }

    fn can_construct_alternative(index: usize, inspector: &Inspector) -> bool {
        match index {
            0 => inspector.can_construct::<T>(),
            1 => inspector.can_construct::<E>(),
            _ => false,
        }
    }

    fn construct_alternative(index: usize, inspector: &Inspector) -> Option<Self> {
        match index {
            0 => inspector.construct::<T>().map(Ok),
            1 => inspector.construct::<E>().map(Err),
            _ => None,
        }
    }

    fn show_active(&self, cx: &mut InspectContext<'_, '_>) {
        match self {
            Ok(value) => cx.show(value, "Ok"),
            Err(error) => cx.show(error, "Err"),
        }
    }

    fn show_active_mut(&mut self, cx: &mut InspectContext<'_, '_>) {
        match self {
            Ok(value) => cx.show_mut(value, "Ok"),
            Err(error) => cx.show_mut(error, "Err"),
        }
    }
}

// ---------------------------------------------------------------------------
// Indirection
// ---------------------------------------------------------------------------

impl<T: Inspect> Inspect for Box<T> {
    const SHAPE: Shape = INDIRECTION;
    const CONSTRUCTIBLE: bool = T::CONSTRUCTIBLE;

    fn construct() -> Option<Self> {
        T::construct().map(Box::new)
    }

    fn construct_with(inspector: &Inspector) -> Option<Self> {
        inspector.construct::<T>().map(Box::new)
    }

    fn constructible_with(inspector: &Inspector) -> bool {
        inspector.can_construct::<T>()
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_pointer::<Self, T>(Some(&**self), name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_pointer::<Self, T>(Some(&mut **self), name, cx);
    }
}

macro_rules! impl_inspect_shared {
    ($($ptr:ident),+) => {$(
        /// Editable only while uniquely owned.
        impl<T: Inspect> Inspect for $ptr<T> {
            const SHAPE: Shape = INDIRECTION;
            const CONSTRUCTIBLE: bool = T::CONSTRUCTIBLE;

            fn construct() -> Option<Self> {
                T::construct().map($ptr::new)
            }

            fn construct_with(inspector: &Inspector) -> Option<Self> {
                inspector.construct::<T>().map($ptr::new)
            }

            fn constructible_with(inspector: &Inspector) -> bool {
                inspector.can_construct::<T>()
            }

            fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
                show_pointer::<Self, T>(Some(&**self), name, cx);
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
                match $ptr::get_mut(self) {
                    Some(target) => edit_pointer::<Self, T>(Some(target), name, cx),
                    None => show_pointer::<Self, T>(Some(&**self), name, cx),
                }
            }
        }
    )+};
}

impl_inspect_shared!(Rc, Arc);

macro_rules! impl_inspect_weak {
    ($($weak:ty),+) => {$(
        impl<T: Inspect> Inspect for $weak {
            const SHAPE: Shape = INDIRECTION;
            const CONSTRUCTIBLE: bool = true;

            fn construct() -> Option<Self> {
                Some(<$weak>::new())
            }

            fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
                let target = self.upgrade();
                show_pointer::<Self, T>(target.as_deref(), name, cx);
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
                self.inspect(name, cx);
            }
        }
    )+};
}

impl_inspect_weak!(rc::Weak<T>, sync::Weak<T>);

impl<T: Inspect> Inspect for RefCell<T> {
    const SHAPE: Shape = INDIRECTION;
    const CONSTRUCTIBLE: bool = T::CONSTRUCTIBLE;

    fn construct() -> Option<Self> {
        T::construct().map(RefCell::new)
    }

    fn construct_with(inspector: &Inspector) -> Option<Self> {
        inspector.construct::<T>().map(RefCell::new)
    }

    fn constructible_with(inspector: &Inspector) -> bool {
        inspector.can_construct::<T>()
    }

    /// A cell that is mutably borrowed elsewhere renders as null.
    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        match self.try_borrow() {
            Ok(target) => show_pointer::<Self, T>(Some(&*target), name, cx),
            Err(_) => show_pointer::<Self, T>(None, name, cx),
        }
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_pointer::<Self, T>(Some(self.get_mut()), name, cx);
    }
}

impl<T: Inspect + Copy> Inspect for Cell<T> {
    const SHAPE: Shape = INDIRECTION;
    const CONSTRUCTIBLE: bool = T::CONSTRUCTIBLE;

    fn construct() -> Option<Self> {
        T::construct().map(Cell::new)
    }

    fn construct_with(inspector: &Inspector) -> Option<Self> {
        inspector.construct::<T>().map(Cell::new)
    }

    fn constructible_with(inspector: &Inspector) -> bool {
        inspector.can_construct::<T>()
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_pointer::<Self, T>(Some(&self.get()), name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_pointer::<Self, T>(Some(self.get_mut()), name, cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_alternatives_follow_payload_defaults() {
        type Outcome = Result<u32, &'static str>;
        let inspector = Inspector::new();
        assert!(Outcome::can_construct_alternative(0, &inspector));
        assert!(!Outcome::can_construct_alternative(1, &inspector));
        assert_eq!(Outcome::construct_alternative(0, &inspector), Some(Ok(0)));
        assert_eq!(Outcome::construct_alternative(1, &inspector), None);
        assert_eq!(Err::<u32, &str>("boom").active_name(), "Err");
    }

    #[test]
    fn once_cell_reset_and_emplace() {
        let mut cell = OnceCell::new();
        cell.emplace(3u8);
        assert_eq!(OptionalLike::get(&cell), Some(&3));
        cell.emplace(4u8);
        assert_eq!(OptionalLike::get(&cell), Some(&4));
        cell.reset();
        assert_eq!(OptionalLike::get(&cell), None);
    }

    #[test]
    fn wrapper_shapes() {
        assert_eq!(<Option<u8>>::SHAPE, Shape::Optional);
        assert_eq!(<Rc<u8>>::SHAPE, Shape::Indirection);
        assert_eq!(<rc::Weak<u8>>::SHAPE, Shape::Indirection);
        assert_eq!(<Result<u8, String>>::SHAPE, Shape::SumType);
    }
}

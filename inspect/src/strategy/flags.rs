//! Bitflag sets from the `bitflags` crate: one checkbox per named bit and a
//! bulk `Clear` action.
//!
//! Types opt in with [`impl_inspect_flags!`](crate::impl_inspect_flags):
//!
//! ```
//! use redlilium_inspect::impl_inspect_flags;
//!
//! bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct Layers: u8 {
//!         const WORLD = 1 << 0;
//!         const UI = 1 << 1;
//!     }
//! }
//!
//! impl_inspect_flags!(Layers);
//! ```

use bitflags::{Bits, Flags};

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::widgets::ButtonKind;

/// Checkbox-grid column count for `count` flags.
pub const fn flag_columns(count: usize) -> usize {
    if count <= 3 {
        1
    } else if count <= 9 {
        2
    } else {
        3
    }
}

/// Named flags that own at least one bit. Zero-valued and unnamed entries are
/// not editable on their own.
fn editable_flags<F: Flags>() -> impl Iterator<Item = &'static bitflags::Flag<F>> {
    F::FLAGS
        .iter()
        .filter(|flag| !flag.name().is_empty() && flag.value().bits() != F::Bits::EMPTY)
}

/// Text form of the set flags, `A | B`, or `(empty)`.
pub fn flags_text<F: Flags>(value: &F) -> String {
    let names: Vec<&str> = editable_flags::<F>()
        .filter(|flag| value.contains(F::from_bits_retain(flag.value().bits())))
        .map(|flag| flag.name())
        .collect();
    if names.is_empty() {
        "(empty)".to_owned()
    } else {
        names.join(" | ")
    }
}

pub fn show_flags<F: Flags + Inspect>(value: &F, name: &str, cx: &mut InspectContext<'_, '_>) {
    cx.readonly::<F>(name, &flags_text(value));
}

pub fn edit_flags<F: Flags + Inspect>(value: &mut F, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<F>();
    let columns = flag_columns(editable_flags::<F>().count());
    cx.id_scope(name, |cx| {
        cx.horizontal(|cx| {
            cx.ui().field_label(name, &type_name);
            if cx.ui().button("Clear", ButtonKind::Remove) {
                *value = F::empty();
            }
        });
        cx.grid("flags", columns, |cx| {
            for (index, flag) in editable_flags::<F>().enumerate() {
                let bits = F::from_bits_retain(flag.value().bits());
                let mut set = value.contains(F::from_bits_retain(flag.value().bits()));
                if cx.ui().checkbox(flag.name(), &mut set) {
                    value.set(bits, set);
                }
                if (index + 1) % columns == 0 {
                    cx.ui().end_row();
                }
            }
        });
    });
}

/// Implements [`Inspect`](crate::Inspect) for types generated by
/// `bitflags::bitflags!`. New values start empty.
#[macro_export]
macro_rules! impl_inspect_flags {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Inspect for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::of($crate::ShapeFacts {
                bitflags: true,
                ..$crate::ShapeFacts::NONE
            });
            const CONSTRUCTIBLE: bool = true;

            fn construct() -> ::core::option::Option<Self> {
                ::core::option::Option::Some(<$ty as $crate::bitflags::Flags>::empty())
            }

            fn inspect(&self, name: &str, cx: &mut $crate::InspectContext<'_, '_>) {
                $crate::strategy::flags::show_flags(self, name, cx);
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut $crate::InspectContext<'_, '_>) {
                $crate::strategy::flags::edit_flags(self, name, cx);
            }
        }
    )+};
}

#[cfg(test)]
mod tests {
    use super::*;

    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Access: u8 {
            const NONE = 0;
            const READ = 1 << 0;
            const WRITE = 1 << 1;
            const EXEC = 1 << 2;
        }
    }

    #[test]
    fn column_rule() {
        assert_eq!(flag_columns(0), 1);
        assert_eq!(flag_columns(3), 1);
        assert_eq!(flag_columns(4), 2);
        assert_eq!(flag_columns(9), 2);
        assert_eq!(flag_columns(10), 3);
        assert_eq!(flag_columns(32), 3);
    }

    #[test]
    fn zero_flag_is_not_editable() {
        let names: Vec<_> = editable_flags::<Access>().map(|f| f.name()).collect();
        assert_eq!(names, ["READ", "WRITE", "EXEC"]);
    }

    #[test]
    fn text_lists_set_flags() {
        assert_eq!(flags_text(&(Access::READ | Access::EXEC)), "READ | EXEC");
        assert_eq!(flags_text(&Access::empty()), "(empty)");
    }
}

use std::path::{Path, PathBuf};

use super::{PRIMITIVE, sequence};
use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::scalar::{FloatKind, Integer};
use crate::shape::{SequenceKind, Shape};

macro_rules! impl_inspect_int {
    ($($ty:ty),+) => {$(
        impl Inspect for $ty {
            const SHAPE: Shape = PRIMITIVE;
            const CONSTRUCTIBLE: bool = true;

            fn construct() -> Option<Self> {
                Some(0)
            }

            fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
                cx.readonly::<$ty>(name, &self.to_string());
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
                let type_name = cx.type_name::<$ty>();
                let mut wide = self.widen();
                if cx.ui().int_edit(name, &mut wide, <$ty as Integer>::KIND, &type_name) {
                    *self = <$ty as Integer>::narrow(wide);
                }
            }
        }
    )+};
}

impl_inspect_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_inspect_float {
    ($($ty:ty => $kind:expr),+) => {$(
        impl Inspect for $ty {
            const SHAPE: Shape = PRIMITIVE;
            const CONSTRUCTIBLE: bool = true;

            fn construct() -> Option<Self> {
                Some(0.0)
            }

            fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
                let text = format!("{:.*}", $kind.decimals(), self);
                cx.readonly::<$ty>(name, &text);
            }

            fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
                let type_name = cx.type_name::<$ty>();
                let mut wide = *self as f64;
                if cx.ui().float_edit(name, &mut wide, $kind, &type_name) {
                    *self = wide as $ty;
                }
            }
        }
    )+};
}

impl_inspect_float!(f32 => FloatKind::Single, f64 => FloatKind::Double);

impl Inspect for bool {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(false)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<bool>(name, if *self { "true" } else { "false" });
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.ui().checkbox(name, self);
    }
}

impl Inspect for char {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(' ')
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<char>(name, &self.to_string());
    }

    /// Edits as a text field; the first character of the new text wins and
    /// clearing the field keeps the old value.
    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<char>();
        let mut text = self.to_string();
        if cx.ui().text_edit(name, &mut text, &type_name)
            && let Some(first) = text.chars().next()
        {
            *self = first;
        }
    }
}

impl Inspect for String {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(String::new())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<String>(name, self);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<String>();
        cx.ui().text_edit(name, self, &type_name);
    }
}

impl Inspect for &'static str {
    const SHAPE: Shape = PRIMITIVE;

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<&str>(name, self);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        self.inspect(name, cx);
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

impl Inspect for PathBuf {
    const SHAPE: Shape = sequence(SequenceKind::PathLike);
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(PathBuf::new())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<PathBuf>(name, &self.to_string_lossy());
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<PathBuf>();
        let mut text = self.to_string_lossy().into_owned();
        if cx.ui().text_edit(name, &mut text, &type_name) {
            *self = PathBuf::from(text);
        }
    }
}

impl Inspect for &'static Path {
    const SHAPE: Shape = sequence(SequenceKind::PathLike);

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<&Path>(name, &self.to_string_lossy());
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        self.inspect(name, cx);
    }
}

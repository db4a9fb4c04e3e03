//! Opaque identifiers: shown as their underlying integer and nothing else.
//!
//! Handles such as entity ids or asset slots are meaningless to edit field
//! by field, so they collapse to a single number. The read-only path shows
//! text; the editable path offers an integer field bounded by the raw type.

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::scalar::Integer;

/// Identifier backed by a single integer.
pub trait Handle: Inspect {
    type Raw: Integer;

    /// Whether the raw value may be edited in place.
    const EDITABLE: bool = false;

    fn raw(&self) -> Self::Raw;

    /// Rebuilds the handle from an edited raw value.
    fn from_raw(_raw: Self::Raw) -> Option<Self> {
        None
    }
}

pub fn show_handle<H: Handle>(value: &H, name: &str, cx: &mut InspectContext<'_, '_>) {
    cx.readonly::<H>(name, &value.raw().to_string());
}

pub fn edit_handle<H: Handle>(value: &mut H, name: &str, cx: &mut InspectContext<'_, '_>) {
    if !H::EDITABLE {
        show_handle(value, name, cx);
        return;
    }

    let type_name = cx.type_name::<H>();
    let mut wide = value.raw().widen();
    if cx
        .ui()
        .int_edit(name, &mut wide, <H::Raw as Integer>::KIND, &type_name)
        && let Some(edited) = H::from_raw(<H::Raw as Integer>::narrow(wide))
    {
        *value = edited;
    }
}

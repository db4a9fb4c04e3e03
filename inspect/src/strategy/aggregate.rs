//! Product types and leaf fallbacks: tuples, field-carrying structs, empty
//! markers and values rendered through their text form.
//!
//! Tuples and structs share [`InspectContext::group`]: members are visited in
//! declaration order, and only multi-member values get a collapsible header.

use std::fmt::Display;

use crate::context::InspectContext;
use crate::strategy::EMPTY_TEXT;
use crate::widgets::Tone;

/// Label of the tuple member at `index`.
pub fn tuple_label(index: usize) -> String {
    format!(".{index}")
}

/// Zero-size value: its name and a placeholder.
pub fn show_empty<T: ?Sized>(name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<T>();
    cx.horizontal(|cx| {
        cx.ui().field_label(name, &type_name);
        cx.ui().label(EMPTY_TEXT, Tone::Weak);
    });
}

/// Read-only text form of `value`. Used on both paths.
pub fn show_text<T: Display>(value: &T, name: &str, cx: &mut InspectContext<'_, '_>) {
    cx.readonly::<T>(name, &value.to_string());
}

//! Plain enumerations: a framed single-choice list.

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::strategy::READONLY_REASON;
use crate::widgets::Tone;

/// Fieldless enum with symbolic variant names.
///
/// Derived for enums whose variants carry no data.
pub trait Enumeration: Inspect {
    const VARIANTS: &'static [&'static str];

    fn index(&self) -> usize;

    fn from_index(index: usize) -> Option<Self>;

    fn variant_name(&self) -> &'static str {
        Self::VARIANTS.get(self.index()).copied().unwrap_or("?")
    }
}

pub fn show_enumeration<E: Enumeration>(value: &E, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<E>();
    let active = value.index();
    cx.id_scope(name, |cx| {
        cx.list_box(name, &type_name, |cx| {
            for (index, variant) in E::VARIANTS.iter().enumerate() {
                if index == active {
                    cx.ui().selectable(variant, true);
                } else {
                    cx.ui().label(variant, Tone::Weak);
                    cx.ui().hover_text(READONLY_REASON, Tone::Error);
                }
            }
        });
    });
}

pub fn edit_enumeration<E: Enumeration>(
    value: &mut E,
    name: &str,
    cx: &mut InspectContext<'_, '_>,
) {
    let type_name = cx.type_name::<E>();
    let active = value.index();
    cx.id_scope(name, |cx| {
        cx.list_box(name, &type_name, |cx| {
            for (index, variant) in E::VARIANTS.iter().enumerate() {
                if cx.ui().selectable(variant, index == active)
                    && index != active
                    && let Some(chosen) = E::from_index(index)
                {
                    *value = chosen;
                }
            }
        });
    });
}

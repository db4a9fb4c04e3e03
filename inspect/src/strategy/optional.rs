//! Zero-or-one values with explicit create (`+`) and clear (`-`) actions.

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::strategy::{NOT_CONSTRUCTIBLE, NOT_RESETTABLE, READONLY_REASON};
use crate::widgets::ButtonKind;

/// Container holding at most one value.
pub trait OptionalLike: Inspect {
    type Inner: Inspect;

    /// Whether a present value can be cleared.
    const RESETTABLE: bool = true;

    fn get(&self) -> Option<&Self::Inner>;

    fn get_mut(&mut self) -> Option<&mut Self::Inner>;

    fn emplace(&mut self, inner: Self::Inner);

    fn reset(&mut self);
}

pub fn show_optional<O: OptionalLike>(value: &O, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<O>();
    cx.id_scope(name, |cx| {
        cx.horizontal(|cx| match value.get() {
            Some(inner) => {
                cx.ui().disabled_button("-", READONLY_REASON);
                cx.show(inner, name);
            }
            None => {
                cx.ui().disabled_button("+", READONLY_REASON);
                cx.ui().field_label(name, &type_name);
            }
        });
    });
}

pub fn edit_optional<O: OptionalLike>(value: &mut O, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<O>();
    cx.id_scope(name, |cx| {
        cx.horizontal(|cx| {
            if value.get().is_some() {
                if !O::RESETTABLE {
                    cx.ui().disabled_button("-", NOT_RESETTABLE);
                } else if cx.ui().button("-", ButtonKind::Remove) {
                    log::debug!("cleared optional `{name}`");
                    value.reset();
                    cx.ui().field_label(name, &type_name);
                    return;
                }
                if let Some(inner) = value.get_mut() {
                    cx.show_mut(inner, name);
                }
            } else {
                if !cx.can_construct::<O::Inner>() {
                    cx.ui().disabled_button("+", NOT_CONSTRUCTIBLE);
                } else if cx.ui().button("+", ButtonKind::Add)
                    && let Some(inner) = cx.construct::<O::Inner>()
                {
                    log::debug!("created optional `{name}`");
                    value.emplace(inner);
                }
                cx.ui().field_label(name, &type_name);
            }
        });
    });
}

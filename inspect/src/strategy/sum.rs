//! Tagged unions: a `Current Type` row with a `Change` menu, followed by the
//! active alternative's payload.

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::inspector::Inspector;
use crate::strategy::{ALTERNATIVE_NOT_CONSTRUCTIBLE, READONLY_REASON};
use crate::widgets::{ButtonKind, Tone};

/// Value holding exactly one of a fixed list of alternatives.
pub trait SumType: Inspect {
    /// Alternative names in declaration order.
    const ALTERNATIVES: &'static [&'static str];

    /// Index of the active alternative in [`ALTERNATIVES`](Self::ALTERNATIVES).
    fn active(&self) -> usize;

    /// Whether [`construct_alternative`](Self::construct_alternative) can
    /// produce alternative `index`, counting `inspector`'s default providers.
    fn can_construct_alternative(index: usize, inspector: &Inspector) -> bool;

    /// Default value of alternative `index`, its payload built through
    /// `inspector`.
    fn construct_alternative(index: usize, inspector: &Inspector) -> Option<Self>;

    /// Draws the active payload read-only.
    fn show_active(&self, cx: &mut InspectContext<'_, '_>);

    /// Draws the active payload editable.
    fn show_active_mut(&mut self, cx: &mut InspectContext<'_, '_>);

    fn active_name(&self) -> &'static str {
        Self::ALTERNATIVES.get(self.active()).copied().unwrap_or("?")
    }
}

fn current_type_label<S: SumType>(value: &S, cx: &mut InspectContext<'_, '_>) {
    cx.ui()
        .label(&format!("Current Type: {}", value.active_name()), Tone::Info);
}

pub fn show_sum<S: SumType>(value: &S, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<S>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                current_type_label(value, cx);
                cx.ui().disabled_button("Change", READONLY_REASON);
            });
            value.show_active(cx);
        });
    });
}

pub fn edit_sum<S: SumType>(value: &mut S, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<S>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                current_type_label(value, cx);
                cx.menu("Change", ButtonKind::Normal, |cx| {
                    let active = value.active();
                    let inspector = cx.inspector();
                    for (index, &alternative) in S::ALTERNATIVES.iter().enumerate() {
                        if !S::can_construct_alternative(index, inspector) {
                            cx.ui()
                                .disabled_label(alternative, ALTERNATIVE_NOT_CONSTRUCTIBLE);
                            continue;
                        }
                        if cx.ui().selectable(alternative, index == active) {
                            if index != active
                                && let Some(switched) = S::construct_alternative(index, inspector)
                            {
                                log::debug!("`{name}` switched to {alternative}");
                                *value = switched;
                            }
                            cx.ui().close_menu();
                        }
                    }
                });
            });
            value.show_active_mut(cx);
        });
    });
}

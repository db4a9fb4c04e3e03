//! Per-pass rendering context.
//!
//! [`InspectContext`] pairs the drawing surface with the [`Inspector`] that
//! owns the type-name cache and override table. Every recursive step goes
//! through [`show`](InspectContext::show) or
//! [`show_mut`](InspectContext::show_mut), which enforce the depth bound and
//! give user overrides the first chance to draw.

use std::rc::Rc;

use crate::depth::{DEPTH_PLACEHOLDER, DepthGuard, current_depth};
use crate::inspect::Inspect;
use crate::inspector::Inspector;
use crate::widgets::{AddContents, ButtonKind, Tone, Widgets};

pub struct InspectContext<'u, 'i> {
    ui: &'u mut dyn Widgets,
    inspector: &'i Inspector,
}

impl<'u, 'i> InspectContext<'u, 'i> {
    pub fn new(ui: &'u mut dyn Widgets, inspector: &'i Inspector) -> Self {
        Self { ui, inspector }
    }

    pub fn ui(&mut self) -> &mut dyn Widgets {
        &mut *self.ui
    }

    pub fn inspector(&self) -> &'i Inspector {
        self.inspector
    }

    // -----------------------------------------------------------------------
    // Recursive entry points
    // -----------------------------------------------------------------------

    /// Renders `value` read-only.
    pub fn show<T: Inspect>(&mut self, value: &T, name: &str) {
        let Some(_depth) = DepthGuard::enter() else {
            self.depth_exceeded(name);
            return;
        };
        log::trace!("show `{name}` as {} at depth {}", T::SHAPE, current_depth());

        let inspector = self.inspector;
        if !inspector.overrides().show(value, name, self) {
            value.inspect(name, self);
        }
    }

    /// Renders `value` editable.
    pub fn show_mut<T: Inspect>(&mut self, value: &mut T, name: &str) {
        let Some(_depth) = DepthGuard::enter() else {
            self.depth_exceeded(name);
            return;
        };
        log::trace!("edit `{name}` as {} at depth {}", T::SHAPE, current_depth());

        let inspector = self.inspector;
        if !inspector.overrides().show_mut(value, name, self) {
            value.inspect_mut(name, self);
        }
    }

    fn depth_exceeded(&mut self, name: &str) {
        log::trace!("depth limit reached at `{name}`");
        self.ui
            .label(&format!("{name}: {DEPTH_PLACEHOLDER}"), Tone::Warning);
    }

    // -----------------------------------------------------------------------
    // Helpers for strategies
    // -----------------------------------------------------------------------

    /// Normalized display name of `T`.
    pub fn type_name<T: ?Sized>(&self) -> Rc<str> {
        self.inspector.type_names().of::<T>()
    }

    pub fn construct<T: Inspect>(&self) -> Option<T> {
        self.inspector.construct::<T>()
    }

    pub fn can_construct<T: Inspect>(&self) -> bool {
        self.inspector.can_construct::<T>()
    }

    /// Non-editable text labelled `name`, with `T`'s type on hover.
    pub fn readonly<T: ?Sized>(&mut self, name: &str, text: &str) {
        let type_name = self.type_name::<T>();
        self.ui.readonly_text(name, text, &type_name);
    }

    /// Draws `add` inside a collapsible header when `fields > 1` and the
    /// value is named, inline otherwise.
    pub fn group<T: ?Sized>(
        &mut self,
        name: &str,
        fields: usize,
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        if fields > 1 && !name.is_empty() {
            let type_name = self.type_name::<T>();
            self.id_scope(name, |cx| cx.tree_node(name, &type_name, add));
        } else {
            self.id_scope(name, add);
        }
    }

    pub fn id_scope(&mut self, id: &str, add: impl FnOnce(&mut InspectContext<'_, 'i>)) {
        self.scoped(|ui, contents| ui.id_scope(id, contents), add);
    }

    pub fn horizontal(&mut self, add: impl FnOnce(&mut InspectContext<'_, 'i>)) {
        self.scoped(|ui, contents| ui.horizontal(contents), add);
    }

    pub fn tree_node(
        &mut self,
        label: &str,
        type_name: &str,
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        self.scoped(|ui, contents| ui.tree_node(label, type_name, contents), add);
    }

    pub fn menu(
        &mut self,
        label: &str,
        kind: ButtonKind,
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        self.scoped(|ui, contents| ui.menu(label, kind, contents), add);
    }

    pub fn list_box(
        &mut self,
        label: &str,
        type_name: &str,
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        self.scoped(|ui, contents| ui.list_box(label, type_name, contents), add);
    }

    pub fn grid(
        &mut self,
        id: &str,
        columns: usize,
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        self.scoped(|ui, contents| ui.grid(id, columns, contents), add);
    }

    fn scoped(
        &mut self,
        open: impl FnOnce(&mut dyn Widgets, AddContents<'_>),
        add: impl FnOnce(&mut InspectContext<'_, 'i>),
    ) {
        let inspector = self.inspector;
        let mut add = Some(add);
        open(&mut *self.ui, &mut |ui: &mut dyn Widgets| {
            if let Some(add) = add.take() {
                add(&mut InspectContext::new(ui, inspector));
            }
        });
    }
}

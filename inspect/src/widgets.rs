//! Drawing primitives the dispatcher renders through.
//!
//! The dispatcher never talks to a GUI toolkit directly. Strategies call into
//! a [`Widgets`] implementation: [`EguiWidgets`](crate::EguiWidgets) for real
//! editors, or the scripted recorder in `testing` for headless tests.
//!
//! Scoped operations take a `&mut dyn FnMut(&mut dyn Widgets)` so the trait
//! stays object-safe and nested scopes can be re-entered freely.

use crate::scalar::{FloatKind, IntKind};

/// Nested drawing callback.
pub type AddContents<'a> = &'a mut dyn FnMut(&mut dyn Widgets);

/// Semantic color of a label or tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Normal,
    /// Disabled or informational text.
    Weak,
    /// Type names and other secondary annotations.
    Info,
    Warning,
    Error,
}

/// Styling of a clickable button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Normal,
    /// Green: creates or appends something.
    Add,
    /// Red: removes or clears something.
    Remove,
}

/// Synchronous immediate-mode drawing surface.
///
/// Methods returning `bool` report "value changed" or "activated" for the
/// current frame. Hover queries and tooltips refer to the most recently
/// drawn item.
pub trait Widgets {
    // -- scopes -------------------------------------------------------------

    /// Draws `add` with `id` pushed onto the identifier stack.
    fn id_scope(&mut self, id: &str, add: AddContents<'_>);

    /// Lays out `add` left to right.
    fn horizontal(&mut self, add: AddContents<'_>);

    /// Collapsible section. `type_name` is shown when the header is hovered.
    /// `add` is only called while the section is open.
    fn tree_node(&mut self, label: &str, type_name: &str, add: AddContents<'_>);

    /// Button that opens a popup menu; `add` draws the menu contents while open.
    fn menu(&mut self, label: &str, kind: ButtonKind, add: AddContents<'_>);

    /// Closes the innermost open menu.
    fn close_menu(&mut self);

    /// Framed single-choice list.
    fn list_box(&mut self, label: &str, type_name: &str, add: AddContents<'_>);

    /// Grid with a fixed column count. Rows end with [`end_row`](Self::end_row).
    fn grid(&mut self, id: &str, columns: usize, add: AddContents<'_>);

    fn end_row(&mut self);

    /// Side-by-side panels; the left one is `left_width` points wide.
    fn split(&mut self, left_width: f32, left: AddContents<'_>, right: AddContents<'_>);

    fn separator(&mut self);

    // -- text ---------------------------------------------------------------

    fn label(&mut self, text: &str, tone: Tone);

    /// Field name that reveals `type_name` on hover.
    fn field_label(&mut self, text: &str, type_name: &str);

    /// Attaches a tooltip to the last drawn item.
    fn hover_text(&mut self, text: &str, tone: Tone);

    /// Whether the last drawn item is hovered this frame.
    fn is_hovered(&self) -> bool;

    /// Non-editable value with a read-only tooltip.
    fn readonly_text(&mut self, label: &str, text: &str, type_name: &str);

    // -- editors ------------------------------------------------------------

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;

    fn text_edit(&mut self, label: &str, text: &mut String, type_name: &str) -> bool;

    fn int_edit(&mut self, label: &str, value: &mut i128, kind: IntKind, type_name: &str) -> bool;

    fn float_edit(&mut self, label: &str, value: &mut f64, kind: FloatKind, type_name: &str)
    -> bool;

    fn vec2_edit(&mut self, label: &str, value: &mut [f32; 2], type_name: &str) -> bool;

    fn vec4_edit(&mut self, label: &str, value: &mut [f32; 4], type_name: &str) -> bool;

    /// Unmultiplied RGBA in `0.0..=1.0`.
    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], type_name: &str) -> bool;

    // -- actions ------------------------------------------------------------

    fn button(&mut self, text: &str, kind: ButtonKind) -> bool;

    /// Greyed-out button explaining why it cannot be used.
    fn disabled_button(&mut self, text: &str, reason: &str);

    fn selectable(&mut self, text: &str, selected: bool) -> bool;

    /// Greyed-out label explaining why it cannot be chosen.
    fn disabled_label(&mut self, text: &str, reason: &str) {
        self.label(text, Tone::Weak);
        self.hover_text(reason, Tone::Error);
    }
}

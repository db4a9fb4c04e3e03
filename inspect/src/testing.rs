//! Headless [`Widgets`] backend for UI tests.
//!
//! [`ScriptedWidgets`] records every drawing call as an [`Event`] and plays
//! back scripted user input: button clicks, checkbox toggles, numeric and
//! text edits, and hovering. Each recorded item has a key built from the
//! identifier scopes it was drawn in, e.g. `player/inventory/0/-`. Script
//! entries match a key exactly or any key ending in `/` + the pattern, and
//! fire once.
//!
//! ```
//! use redlilium_inspect::Inspector;
//! use redlilium_inspect::testing::ScriptedWidgets;
//!
//! let inspector = Inspector::new();
//! let mut value: Option<i32> = None;
//! let mut ui = ScriptedWidgets::new();
//! ui.click("limit/+");
//! inspector.show_mut(&mut ui, &mut value, "limit");
//! assert_eq!(value, Some(0));
//! ```

use std::collections::HashSet;

use crate::depth::current_depth;
use crate::scalar::{FloatKind, IntKind};
use crate::widgets::{AddContents, ButtonKind, Tone, Widgets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TreeNode,
    Menu,
    CloseMenu,
    ListBox,
    Grid,
    EndRow,
    Separator,
    Label,
    FieldLabel,
    HoverText,
    ReadonlyText,
    Checkbox,
    TextEdit,
    IntEdit,
    FloatEdit,
    Vec2Edit,
    Vec4Edit,
    ColorEdit,
    Button,
    DisabledButton,
    Selectable,
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Enclosing scopes joined with `/`.
    pub path: String,
    pub label: String,
    /// Kind-specific payload: the shown value, tooltip reason, type name or tone.
    pub detail: String,
    /// Recursion depth of the dispatcher when the item was drawn.
    pub depth: u32,
}

impl Event {
    pub fn key(&self) -> String {
        join_key(&self.path, &self.label)
    }
}

fn join_key(path: &str, label: &str) -> String {
    if path.is_empty() {
        label.to_owned()
    } else {
        format!("{path}/{label}")
    }
}

fn key_matches(key: &str, pattern: &str) -> bool {
    key == pattern
        || key
            .strip_suffix(pattern)
            .is_some_and(|prefix| prefix.ends_with('/'))
}

/// Recording widget backend with scripted input.
#[derive(Debug, Default)]
pub struct ScriptedWidgets {
    events: Vec<Event>,
    path: Vec<String>,
    clicks: Vec<String>,
    checks: Vec<(String, bool)>,
    ints: Vec<(String, i128)>,
    floats: Vec<(String, f64)>,
    texts: Vec<(String, String)>,
    hovered: HashSet<String>,
    collapsed: HashSet<String>,
    last_key: Option<String>,
    max_depth: u32,
}

impl ScriptedWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Script
    // -----------------------------------------------------------------------

    /// Clicks the next button, selectable or menu entry matching `pattern`.
    pub fn click(&mut self, pattern: &str) -> &mut Self {
        self.clicks.push(pattern.to_owned());
        self
    }

    pub fn set_checkbox(&mut self, pattern: &str, value: bool) -> &mut Self {
        self.checks.push((pattern.to_owned(), value));
        self
    }

    pub fn set_int(&mut self, pattern: &str, value: i128) -> &mut Self {
        self.ints.push((pattern.to_owned(), value));
        self
    }

    pub fn set_float(&mut self, pattern: &str, value: f64) -> &mut Self {
        self.floats.push((pattern.to_owned(), value));
        self
    }

    pub fn set_text(&mut self, pattern: &str, value: &str) -> &mut Self {
        self.texts.push((pattern.to_owned(), value.to_owned()));
        self
    }

    /// Keeps items matching `pattern` hovered until cleared.
    pub fn hover(&mut self, pattern: &str) -> &mut Self {
        self.hovered.insert(pattern.to_owned());
        self
    }

    /// Draws tree nodes matching `pattern` closed.
    pub fn collapse(&mut self, pattern: &str) -> &mut Self {
        self.collapsed.insert(pattern.to_owned());
        self
    }

    /// Scripted input that never matched a drawn item.
    pub fn pending(&self) -> Vec<String> {
        let mut pending = self.clicks.clone();
        pending.extend(self.checks.iter().map(|(pattern, _)| pattern.clone()));
        pending.extend(self.ints.iter().map(|(pattern, _)| pattern.clone()));
        pending.extend(self.floats.iter().map(|(pattern, _)| pattern.clone()));
        pending.extend(self.texts.iter().map(|(pattern, _)| pattern.clone()));
        pending
    }

    // -----------------------------------------------------------------------
    // Recorded output
    // -----------------------------------------------------------------------

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Forgets recorded events so the next frame starts clean.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.max_depth = 0;
    }

    /// First event of `kind` whose key matches `pattern`.
    pub fn find(&self, kind: EventKind, pattern: &str) -> Option<&Event> {
        self.events
            .iter()
            .find(|event| event.kind == kind && key_matches(&event.key(), pattern))
    }

    /// Labels of every event of `kind`, in drawing order.
    pub fn labels(&self, kind: EventKind) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.label.as_str())
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }

    /// Whether any text-bearing event shows `text` as its label or detail.
    pub fn shows(&self, text: &str) -> bool {
        self.events
            .iter()
            .any(|event| event.label == text || event.detail == text)
    }

    /// Deepest dispatcher recursion observed while drawing.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn record(&mut self, kind: EventKind, label: &str, detail: impl Into<String>) -> String {
        let depth = current_depth();
        self.max_depth = self.max_depth.max(depth);
        let event = Event {
            kind,
            path: self.path.join("/"),
            label: label.to_owned(),
            detail: detail.into(),
            depth,
        };
        let key = event.key();
        self.events.push(event);
        self.last_key = Some(key.clone());
        key
    }

    fn take_click(&mut self, key: &str) -> bool {
        take_matching(&mut self.clicks, key, |pattern| pattern).is_some()
    }

    fn scoped(&mut self, segment: &str, add: AddContents<'_>) {
        self.path.push(segment.to_owned());
        add(self);
        self.path.pop();
    }
}

/// Removes and returns the first scripted entry whose pattern matches `key`.
fn take_matching<T>(entries: &mut Vec<T>, key: &str, pattern: impl Fn(&T) -> &String) -> Option<T> {
    let position = entries
        .iter()
        .position(|entry| key_matches(key, pattern(entry)))?;
    Some(entries.remove(position))
}

impl Widgets for ScriptedWidgets {
    fn id_scope(&mut self, id: &str, add: AddContents<'_>) {
        self.scoped(id, add);
    }

    fn horizontal(&mut self, add: AddContents<'_>) {
        add(self);
    }

    fn tree_node(&mut self, label: &str, type_name: &str, add: AddContents<'_>) {
        let key = self.record(EventKind::TreeNode, label, type_name);
        let open = !self.collapsed.iter().any(|pattern| key_matches(&key, pattern));
        if open {
            self.scoped(label, add);
        }
    }

    /// Menus are always drawn open.
    fn menu(&mut self, label: &str, kind: ButtonKind, add: AddContents<'_>) {
        self.record(EventKind::Menu, label, format!("{kind:?}"));
        self.scoped(label, add);
    }

    fn close_menu(&mut self) {
        self.record(EventKind::CloseMenu, "", "");
    }

    fn list_box(&mut self, label: &str, type_name: &str, add: AddContents<'_>) {
        self.record(EventKind::ListBox, label, type_name);
        self.scoped(label, add);
    }

    fn grid(&mut self, id: &str, columns: usize, add: AddContents<'_>) {
        self.record(EventKind::Grid, id, columns.to_string());
        self.scoped(id, add);
    }

    fn end_row(&mut self) {
        self.record(EventKind::EndRow, "", "");
    }

    fn split(&mut self, _left_width: f32, left: AddContents<'_>, right: AddContents<'_>) {
        left(self);
        right(self);
    }

    fn separator(&mut self) {
        self.record(EventKind::Separator, "", "");
    }

    fn label(&mut self, text: &str, tone: Tone) {
        self.record(EventKind::Label, text, format!("{tone:?}"));
    }

    fn field_label(&mut self, text: &str, type_name: &str) {
        self.record(EventKind::FieldLabel, text, type_name);
    }

    /// Recorded under the item it is attached to.
    fn hover_text(&mut self, text: &str, _tone: Tone) {
        let owner = self.last_key.clone().unwrap_or_default();
        let depth = current_depth();
        self.events.push(Event {
            kind: EventKind::HoverText,
            path: owner,
            label: text.to_owned(),
            detail: text.to_owned(),
            depth,
        });
    }

    fn is_hovered(&self) -> bool {
        self.last_key.as_deref().is_some_and(|key| {
            self.hovered.iter().any(|pattern| key_matches(key, pattern))
        })
    }

    fn readonly_text(&mut self, label: &str, text: &str, _type_name: &str) {
        self.record(EventKind::ReadonlyText, label, text);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let key = self.record(EventKind::Checkbox, label, value.to_string());
        match take_matching(&mut self.checks, &key, |(pattern, _)| pattern) {
            Some((_, checked)) if checked != *value => {
                *value = checked;
                true
            }
            _ => false,
        }
    }

    fn text_edit(&mut self, label: &str, text: &mut String, _type_name: &str) -> bool {
        let key = self.record(EventKind::TextEdit, label, text.clone());
        match take_matching(&mut self.texts, &key, |(pattern, _)| pattern) {
            Some((_, edited)) if edited != *text => {
                *text = edited;
                true
            }
            _ => false,
        }
    }

    fn int_edit(&mut self, label: &str, value: &mut i128, kind: IntKind, _type_name: &str) -> bool {
        let key = self.record(EventKind::IntEdit, label, value.to_string());
        match take_matching(&mut self.ints, &key, |(pattern, _)| pattern) {
            Some((_, edited)) => {
                let edited = kind.clamp(edited);
                let changed = edited != *value;
                *value = edited;
                changed
            }
            None => false,
        }
    }

    fn float_edit(
        &mut self,
        label: &str,
        value: &mut f64,
        _kind: FloatKind,
        _type_name: &str,
    ) -> bool {
        let key = self.record(EventKind::FloatEdit, label, value.to_string());
        match take_matching(&mut self.floats, &key, |(pattern, _)| pattern) {
            Some((_, edited)) => {
                let changed = edited != *value;
                *value = edited;
                changed
            }
            None => false,
        }
    }

    fn vec2_edit(&mut self, label: &str, value: &mut [f32; 2], _type_name: &str) -> bool {
        self.record(EventKind::Vec2Edit, label, format!("{value:?}"));
        false
    }

    fn vec4_edit(&mut self, label: &str, value: &mut [f32; 4], _type_name: &str) -> bool {
        self.record(EventKind::Vec4Edit, label, format!("{value:?}"));
        false
    }

    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], _type_name: &str) -> bool {
        self.record(EventKind::ColorEdit, label, format!("{rgba:?}"));
        false
    }

    fn button(&mut self, text: &str, kind: ButtonKind) -> bool {
        let key = self.record(EventKind::Button, text, format!("{kind:?}"));
        self.take_click(&key)
    }

    fn disabled_button(&mut self, text: &str, reason: &str) {
        self.record(EventKind::DisabledButton, text, reason);
    }

    fn selectable(&mut self, text: &str, selected: bool) -> bool {
        let key = self.record(EventKind::Selectable, text, selected.to_string());
        self.take_click(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_matching_respects_segments() {
        assert!(key_matches("a/b/c", "c"));
        assert!(key_matches("a/b/c", "b/c"));
        assert!(key_matches("a/b/c", "a/b/c"));
        assert!(!key_matches("a/bb/c", "b/c"));
        assert!(!key_matches("a/b/c", "b"));
    }

    #[test]
    fn clicks_fire_once() {
        let mut ui = ScriptedWidgets::new();
        ui.click("save");
        ui.id_scope("panel", &mut |ui: &mut dyn Widgets| {
            assert!(ui.button("save", ButtonKind::Normal));
            assert!(!ui.button("save", ButtonKind::Normal));
        });
        assert!(ui.pending().is_empty());
        assert_eq!(ui.count(EventKind::Button), 2);
    }

    #[test]
    fn collapsed_nodes_skip_contents() {
        let mut ui = ScriptedWidgets::new();
        ui.collapse("outer");
        let mut visited = false;
        ui.tree_node("outer", "T", &mut |_: &mut dyn Widgets| visited = true);
        assert!(!visited);
    }

    #[test]
    fn hover_follows_last_item() {
        let mut ui = ScriptedWidgets::new();
        ui.hover("target");
        ui.label("other", Tone::Normal);
        assert!(!ui.is_hovered());
        ui.label("target", Tone::Normal);
        assert!(ui.is_hovered());
    }
}

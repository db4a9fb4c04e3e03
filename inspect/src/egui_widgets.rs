//! [`Widgets`] backend drawing into an [`egui::Ui`].

use egui::{Button, CollapsingHeader, DragValue, Grid, Label, RichText, TextEdit};

use crate::READONLY_REASON;
use crate::scalar::{FloatKind, IntKind};
use crate::theme;
use crate::widgets::{AddContents, ButtonKind, Tone, Widgets};

/// Draws inspector widgets into an egui container.
///
/// ```ignore
/// egui::Window::new("Inspector").show(ctx, |ui| {
///     inspector.show_mut(&mut EguiWidgets::new(ui), &mut settings, "settings");
/// });
/// ```
pub struct EguiWidgets<'u> {
    ui: &'u mut egui::Ui,
    /// Response of the most recently drawn item, target of hover queries.
    last: Option<egui::Response>,
}

impl<'u> EguiWidgets<'u> {
    pub fn new(ui: &'u mut egui::Ui) -> Self {
        Self { ui, last: None }
    }

    fn type_label(ui: &mut egui::Ui, text: &str, type_name: &str) -> egui::Response {
        ui.label(text).on_hover_text(theme::type_tooltip(type_name))
    }
}

impl Widgets for EguiWidgets<'_> {
    fn id_scope(&mut self, id: &str, add: AddContents<'_>) {
        let response = self.ui.push_id(id, |ui| add(&mut EguiWidgets::new(ui)));
        self.last = Some(response.response);
    }

    fn horizontal(&mut self, add: AddContents<'_>) {
        let response = self.ui.horizontal(|ui| add(&mut EguiWidgets::new(ui)));
        self.last = Some(response.response);
    }

    fn tree_node(&mut self, label: &str, type_name: &str, add: AddContents<'_>) {
        let response = CollapsingHeader::new(label)
            .id_salt(label)
            .show(self.ui, |ui| add(&mut EguiWidgets::new(ui)));
        self.last = Some(
            response
                .header_response
                .on_hover_text(theme::type_tooltip(type_name)),
        );
    }

    fn menu(&mut self, label: &str, kind: ButtonKind, add: AddContents<'_>) {
        let title = match theme::button_fill(kind) {
            Some(color) => RichText::new(label).color(color).strong(),
            None => RichText::new(label),
        };
        let response = self
            .ui
            .menu_button(title, |ui| add(&mut EguiWidgets::new(ui)));
        self.last = Some(response.response);
    }

    fn close_menu(&mut self) {
        self.ui.close();
    }

    fn list_box(&mut self, label: &str, type_name: &str, add: AddContents<'_>) {
        let response = egui::Frame::group(self.ui.style()).show(self.ui, |ui| {
            Self::type_label(ui, label, type_name);
            add(&mut EguiWidgets::new(ui));
        });
        self.last = Some(response.response);
    }

    fn grid(&mut self, id: &str, columns: usize, add: AddContents<'_>) {
        let response = Grid::new(id)
            .num_columns(columns)
            .show(self.ui, |ui| add(&mut EguiWidgets::new(ui)));
        self.last = Some(response.response);
    }

    fn end_row(&mut self) {
        self.ui.end_row();
    }

    fn split(&mut self, left_width: f32, left: AddContents<'_>, right: AddContents<'_>) {
        self.ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(left_width);
                left(&mut EguiWidgets::new(ui));
            });
            ui.separator();
            ui.vertical(|ui| right(&mut EguiWidgets::new(ui)));
        });
        self.last = None;
    }

    fn separator(&mut self) {
        let response = self.ui.separator();
        self.last = Some(response);
    }

    fn label(&mut self, text: &str, tone: Tone) {
        let response = self.ui.label(theme::rich(text, tone));
        self.last = Some(response);
    }

    fn field_label(&mut self, text: &str, type_name: &str) {
        let response = Self::type_label(self.ui, text, type_name);
        self.last = Some(response);
    }

    fn hover_text(&mut self, text: &str, tone: Tone) {
        if let Some(response) = self.last.take() {
            let text = theme::rich(text, tone);
            self.last = Some(if response.enabled() {
                response.on_hover_text(text)
            } else {
                response.on_disabled_hover_text(text)
            });
        }
    }

    fn is_hovered(&self) -> bool {
        self.last.as_ref().is_some_and(egui::Response::hovered)
    }

    fn readonly_text(&mut self, label: &str, text: &str, type_name: &str) {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            let mut shown = text;
            ui.add(
                TextEdit::singleline(&mut shown)
                    .background_color(theme::READONLY_BG)
                    .text_color(theme::TEXT_PRIMARY),
            )
            .on_hover_text(theme::rich(READONLY_REASON, Tone::Error));
        });
        self.last = Some(response.response);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let response = self.ui.checkbox(value, label);
        let changed = response.changed();
        self.last = Some(response);
        changed
    }

    fn text_edit(&mut self, label: &str, text: &mut String, type_name: &str) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            ui.text_edit_singleline(text).changed()
        });
        self.last = Some(response.response);
        response.inner
    }

    fn int_edit(&mut self, label: &str, value: &mut i128, kind: IntKind, type_name: &str) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            if kind.signed {
                let mut v = *value as i64;
                let range = kind.min() as i64..=kind.max() as i64;
                let changed = ui.add(DragValue::new(&mut v).range(range)).changed();
                if changed {
                    *value = v as i128;
                }
                changed
            } else {
                let mut v = *value as u64;
                let range = 0..=kind.max() as u64;
                let changed = ui.add(DragValue::new(&mut v).range(range)).changed();
                if changed {
                    *value = v as i128;
                }
                changed
            }
        });
        self.last = Some(response.response);
        response.inner
    }

    fn float_edit(
        &mut self,
        label: &str,
        value: &mut f64,
        kind: FloatKind,
        type_name: &str,
    ) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            ui.add(
                DragValue::new(value)
                    .speed(0.01)
                    .max_decimals(kind.decimals()),
            )
            .changed()
        });
        self.last = Some(response.response);
        response.inner
    }

    fn vec2_edit(&mut self, label: &str, value: &mut [f32; 2], type_name: &str) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            let [x, y] = value;
            let x = ui.add(DragValue::new(x).speed(0.01).prefix("x: "));
            let y = ui.add(DragValue::new(y).speed(0.01).prefix("y: "));
            x.changed() || y.changed()
        });
        self.last = Some(response.response);
        response.inner
    }

    fn vec4_edit(&mut self, label: &str, value: &mut [f32; 4], type_name: &str) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            let mut changed = false;
            for (component, prefix) in value.iter_mut().zip(["x: ", "y: ", "z: ", "w: "]) {
                changed |= ui
                    .add(DragValue::new(component).speed(0.01).prefix(prefix))
                    .changed();
            }
            changed
        });
        self.last = Some(response.response);
        response.inner
    }

    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], type_name: &str) -> bool {
        let response = self.ui.horizontal(|ui| {
            Self::type_label(ui, label, type_name);
            ui.color_edit_button_rgba_unmultiplied(rgba).changed()
        });
        self.last = Some(response.response);
        response.inner
    }

    fn button(&mut self, text: &str, kind: ButtonKind) -> bool {
        let button = match theme::button_fill(kind) {
            Some(fill) => Button::new(RichText::new(text).color(theme::TEXT_PRIMARY)).fill(fill),
            None => Button::new(text),
        };
        let response = self.ui.add(button);
        let clicked = response.clicked();
        self.last = Some(response);
        clicked
    }

    fn disabled_button(&mut self, text: &str, reason: &str) {
        let response = self
            .ui
            .add_enabled(false, Button::new(text))
            .on_disabled_hover_text(theme::rich(reason, Tone::Error));
        self.last = Some(response);
    }

    fn selectable(&mut self, text: &str, selected: bool) -> bool {
        let response = self.ui.selectable_label(selected, text);
        let clicked = response.clicked();
        self.last = Some(response);
        clicked
    }

    fn disabled_label(&mut self, text: &str, reason: &str) {
        let response = self
            .ui
            .add_enabled(false, Label::new(text))
            .on_disabled_hover_text(theme::rich(reason, Tone::Error));
        self.last = Some(response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Inspector;

    #[derive(crate::Inspect, Default)]
    struct Settings {
        volume: f32,
        muted: bool,
        title: String,
        tags: Vec<u16>,
        limit: Option<i32>,
    }

    #[test]
    fn renders_headless_frame() {
        let ctx = egui::Context::default();
        let inspector = Inspector::new();
        let mut settings = Settings {
            tags: vec![1, 2, 3],
            limit: Some(4),
            ..Settings::default()
        };

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut widgets = EguiWidgets::new(ui);
                inspector.show_mut(&mut widgets, &mut settings, "settings");
                inspector.show(&mut widgets, &settings, "settings (read-only)");
            });
        });

        assert_eq!(settings.tags, vec![1, 2, 3]);
        assert_eq!(settings.limit, Some(4));
    }
}

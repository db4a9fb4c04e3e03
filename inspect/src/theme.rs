//! Inspector colors.

use egui::{Color32, RichText};

use crate::widgets::{ButtonKind, Tone};

// --- Actions ---

pub const ADD: Color32 = Color32::from_rgb(26, 204, 26);
pub const REMOVE: Color32 = Color32::from_rgb(204, 26, 26);

// --- Text ---

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 236, 242);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 129, 145);
pub const TYPE_NAME: Color32 = Color32::from_rgb(102, 178, 255);
pub const WARNING: Color32 = Color32::from_rgb(230, 185, 92);
pub const ERROR: Color32 = Color32::from_rgb(255, 102, 102);

// --- Frames ---

/// Background of read-only value boxes.
pub const READONLY_BG: Color32 = Color32::from_rgb(64, 64, 71);

/// Text color for a tone, `None` meaning the style default.
pub fn tone_color(tone: Tone) -> Option<Color32> {
    match tone {
        Tone::Normal => None,
        Tone::Weak => Some(TEXT_MUTED),
        Tone::Info => Some(TYPE_NAME),
        Tone::Warning => Some(WARNING),
        Tone::Error => Some(ERROR),
    }
}

pub fn rich(text: &str, tone: Tone) -> RichText {
    let text = RichText::new(text);
    match tone_color(tone) {
        Some(color) => text.color(color),
        None => text,
    }
}

/// Fill color for a button, `None` meaning the style default.
pub fn button_fill(kind: ButtonKind) -> Option<Color32> {
    match kind {
        ButtonKind::Normal => None,
        ButtonKind::Add => Some(ADD),
        ButtonKind::Remove => Some(REMOVE),
    }
}

/// Type tooltip text: `Type: <name>`, wrapped when long.
pub fn type_tooltip(type_name: &str) -> RichText {
    RichText::new(format!("Type: {}", crate::type_name::pretty(type_name))).color(TYPE_NAME)
}

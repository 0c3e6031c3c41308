// src/ui/helpers.rs
use crate::view_models::{Notice, NoticeKind};
use egui::{Color32, Key, RichText, TextEdit, Ui};

/// Single-line labelled input. Returns true when Enter was pressed inside it.
pub fn labelled_input(ui: &mut Ui, label: &str, text: &mut String, width: f32) -> bool {
    ui.label(label);
    let response = ui.add(TextEdit::singleline(text).desired_width(width));
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

pub fn notice_label(ui: &mut Ui, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color32::from_rgb(60, 160, 60),
        NoticeKind::Warning => Color32::from_rgb(210, 150, 0),
        NoticeKind::Error => Color32::from_rgb(200, 50, 50),
    };
    ui.label(RichText::new(&notice.text).color(color).strong());
}

use crate::FlashcardApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, Ui};

pub fn top_panel(app: &mut FlashcardApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            match app.state {
                AppState::Quiz => {
                    if ui.button("📇 Flashcards").clicked() {
                        app.back_to_deck();
                    }
                    if ui.button("🔄 Restart quiz").clicked() {
                        app.start_quiz();
                    }
                }
                AppState::Deck => {
                    if app.has_active_quiz() && ui.button("▶ Continue quiz").clicked() {
                        app.resume_quiz();
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    app.show_settings = !app.show_settings;
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut FlashcardApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.dark_mode = true;
                }
                if ui.button("☀ Light mode").clicked() {
                    app.dark_mode = false;
                }
                ui.label(format!("{} card(s)", app.engine.len()));
            }
        );
    });
}

/// Central panel with content capped at `max_width` and a uniform margin.
pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(margin)
            .show(ui, |ui| {
                ui.set_width(w);
                inner(ui);
            });
    });
}

/// Two equally sized buttons on one row. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 32.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 32.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

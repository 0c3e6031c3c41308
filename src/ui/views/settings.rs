use crate::FlashcardApp;
use crate::config::{ScoringMode, SelectionMode};
use egui::{ComboBox, Context, Window};

pub fn ui_settings(app: &mut FlashcardApp, ctx: &Context) {
    let mut open = app.show_settings;
    let mut config = app.config;

    Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ComboBox::from_label("Scoring")
                .selected_text(config.scoring.label())
                .show_ui(ui, |ui| {
                    for mode in ScoringMode::ALL {
                        ui.selectable_value(&mut config.scoring, mode, mode.label());
                    }
                });
            ComboBox::from_label("Question order")
                .selected_text(config.selection.label())
                .show_ui(ui, |ui| {
                    for mode in SelectionMode::ALL {
                        ui.selectable_value(&mut config.selection, mode, mode.label());
                    }
                });

            if config.scoring == ScoringMode::AlwaysCorrect {
                ui.weak("Answers are not checked: every submission extends the streak.");
            } else {
                ui.weak("A wrong answer resets the streak; the score is kept.");
            }
        });

    if config != app.config {
        app.apply_config(config);
    }
    app.show_settings = open;
}

mod helpers;
pub mod layout;
pub mod views;

use crate::app::FlashcardApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl App for FlashcardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.set_visuals(if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.state {
            AppState::Deck => views::deck::ui_deck(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
        }

        if self.show_settings {
            views::settings::ui_settings(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}

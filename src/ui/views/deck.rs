use crate::FlashcardApp;
use crate::ui::helpers::{labelled_input, notice_label};
use crate::ui::layout::{simple_panel, two_button_row};
use egui::{Context, Margin, ScrollArea};

pub fn ui_deck(app: &mut FlashcardApp, ctx: &Context) {
    simple_panel(ctx, 480.0, Margin::symmetric(16, 12), |ui| {
        let width = ui.available_width();
        ui.heading("Flashcards");
        ui.add_space(8.0);

        let enter_q = labelled_input(ui, "Question:", &mut app.question_input, width);
        let enter_a = labelled_input(ui, "Answer:", &mut app.answer_input, width);
        if enter_q || enter_a {
            app.add_card();
        }

        ui.add_space(8.0);
        let (add, start) = two_button_row(ui, width, "Add Flashcard", "Start Quiz");
        if add {
            app.add_card();
        }
        if start {
            app.start_quiz();
        }
        if ui.button("📚 Load sample deck").clicked() {
            app.load_sample_deck();
        }

        ui.add_space(6.0);
        notice_label(ui, app.notice.as_ref());
        ui.separator();

        let rows = app.card_rows();
        if rows.is_empty() {
            ui.weak("No flashcards yet.");
        } else {
            ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                for row in rows {
                    ui.label(row.label());
                }
            });
        }
    });
}

use crate::FlashcardApp;
use crate::ui::helpers::{labelled_input, notice_label};
use crate::ui::layout::simple_panel;
use egui::{Button, Context, Margin, RichText, TextEdit};

pub fn ui_quiz(app: &mut FlashcardApp, ctx: &Context) {
    simple_panel(ctx, 480.0, Margin::symmetric(16, 12), |ui| {
        let width = ui.available_width();
        let board = app.score_board();

        ui.horizontal(|ui| {
            ui.label(RichText::new(board.score_label()).strong().size(16.0));
            ui.add_space(12.0);
            ui.label(board.streak_label());
        });
        ui.add_space(10.0);

        let question = app
            .current_question()
            .unwrap_or("No question is active.")
            .to_owned();
        ui.label(RichText::new(question).heading());
        ui.add_space(10.0);

        let entered = labelled_input(ui, "Your Answer:", &mut app.user_answer_input, width);
        let clicked = ui
            .add_sized([width, 32.0], Button::new("Submit Answer"))
            .clicked();
        if entered || clicked {
            app.submit_answer();
        }

        ui.add_space(6.0);
        notice_label(ui, app.notice.as_ref());
        ui.add_space(6.0);

        // Read-only result area
        let mut result = app.last_result.as_str();
        ui.add(
            TextEdit::multiline(&mut result)
                .desired_width(width)
                .desired_rows(3),
        );
    });
}

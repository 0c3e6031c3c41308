use super::*;
use crate::view_models::{CardRow, ScoreBoard};

impl FlashcardApp {
    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.engine.score(),
            streak: self.engine.streak(),
        }
    }

    pub fn card_rows(&self) -> Vec<CardRow> {
        CardRow::from_cards(self.engine.cards())
    }

    pub fn current_question(&self) -> Option<&str> {
        self.engine.current_question()
    }

    pub fn has_active_quiz(&self) -> bool {
        self.engine.is_active()
    }
}

// src/view_models.rs

use crate::model::{AnswerOutcome, Flashcard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// One-line feedback shown under the active view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn for_outcome(outcome: &AnswerOutcome) -> Self {
        if outcome.correct {
            Self::info(format!("Correct! Streak: {}", outcome.streak))
        } else {
            Self::warning(format!(
                "Incorrect. The answer was: {}",
                outcome.expected_answer
            ))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub streak: u32,
}

impl ScoreBoard {
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn streak_label(&self) -> String {
        if self.streak == 0 {
            "No streak".to_string()
        } else {
            format!("🔥 Streak: {}", self.streak)
        }
    }
}

#[derive(Clone, Debug)]
pub struct CardRow {
    pub number: usize, // 1-based
    pub question: String,
    pub answer: String,
}

impl CardRow {
    pub fn from_cards(cards: &[Flashcard]) -> Vec<CardRow> {
        cards
            .iter()
            .enumerate()
            .map(|(i, card)| CardRow {
                number: i + 1,
                question: card.question().to_owned(),
                answer: card.answer().to_owned(),
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("{}. {} → {}", self.number, self.question, self.answer)
    }
}

/// What the result area shows after a submission.
pub fn result_lines(outcome: &AnswerOutcome) -> String {
    format!(
        "Question: {}\nYour Answer: {}\n",
        outcome.question, outcome.user_answer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(correct: bool) -> AnswerOutcome {
        AnswerOutcome {
            question: "Capital of France?".into(),
            user_answer: "Lyon".into(),
            expected_answer: "Paris".into(),
            correct,
            score: 3,
            streak: if correct { 2 } else { 0 },
        }
    }

    #[test]
    fn outcome_notice_reflects_correctness() {
        let hit = Notice::for_outcome(&outcome(true));
        assert_eq!(hit.kind, NoticeKind::Info);
        assert_eq!(hit.text, "Correct! Streak: 2");

        let miss = Notice::for_outcome(&outcome(false));
        assert_eq!(miss.kind, NoticeKind::Warning);
        assert!(miss.text.contains("Paris"));
    }

    #[test]
    fn result_area_lists_question_and_answer() {
        assert_eq!(
            result_lines(&outcome(true)),
            "Question: Capital of France?\nYour Answer: Lyon\n"
        );
    }

    #[test]
    fn score_board_labels() {
        let board = ScoreBoard { score: 6, streak: 0 };
        assert_eq!(board.score_label(), "Score: 6");
        assert_eq!(board.streak_label(), "No streak");
    }
}

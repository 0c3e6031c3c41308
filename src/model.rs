use serde::{Deserialize, Serialize};

/// Question/answer pair. Both fields are trimmed and non-empty once inside the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    pub(crate) fn new(question: String, answer: String) -> Self {
        Self { question, answer }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Result of a single submission, after the engine has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: String,
    pub user_answer: String,
    pub expected_answer: String,
    pub correct: bool,
    pub score: u32,
    pub streak: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Deck,
    Quiz,
}

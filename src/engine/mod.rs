// src/engine/mod.rs

//! Flashcard collection plus the single quiz session that runs over it.
//!
//! The session has two states: idle (no current question) and awaiting an
//! answer. `start_quiz` enters or restarts the session, `submit_answer` scores
//! and immediately draws the next question. There is no finished state.

mod scoring;
mod selection;

use crate::config::QuizConfig;
use crate::error::{QuizError, ValidationError};
use crate::model::{AnswerOutcome, Flashcard};
use rand::SeedableRng;
use rand::rngs::StdRng;
use selection::Selector;

pub struct QuizEngine {
    cards: Vec<Flashcard>,
    current: Option<usize>,
    score: u32,
    streak: u32,
    config: QuizConfig,
    selector: Selector,
    rng: StdRng,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic question order, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let config = QuizConfig::default();
        Self {
            cards: Vec::new(),
            current: None,
            score: 0,
            streak: 0,
            selector: Selector::new(config.selection),
            config,
            rng,
        }
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// Takes effect on the next submission/draw. The running score is kept.
    pub fn set_config(&mut self, config: QuizConfig) {
        if config != self.config {
            log::info!(
                "Quiz config changed: scoring {:?}, selection {:?}",
                config.scoring,
                config.selection
            );
        }
        self.config = config;
        self.selector.set_mode(config.selection);
    }

    pub fn add_flashcard(&mut self, question: &str, answer: &str) -> Result<(), ValidationError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(ValidationError::EmptyField);
        }
        log::debug!("Adding flashcard - question: '{question}', answer: '{answer}'");
        self.cards
            .push(Flashcard::new(question.to_owned(), answer.to_owned()));
        Ok(())
    }

    /// Resets score and streak and draws the first question.
    pub fn start_quiz(&mut self) -> Result<&str, QuizError> {
        if self.cards.is_empty() {
            return Err(QuizError::NoCards);
        }
        self.score = 0;
        self.streak = 0;
        self.selector.reset();
        log::info!(
            "Starting quiz over {} card(s), scoring {:?}",
            self.cards.len(),
            self.config.scoring
        );
        let idx = self.draw_next();
        Ok(self.cards[idx].question())
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current_card().map(Flashcard::question)
    }

    pub fn submit_answer(&mut self, user_answer: &str) -> Result<AnswerOutcome, QuizError> {
        let card = self
            .current_card()
            .ok_or(QuizError::NoActiveQuestion)?
            .clone();

        let user_answer = user_answer.trim();
        log::debug!(
            "Correct answer: '{}' (length: {})",
            card.answer(),
            card.answer().chars().count()
        );

        let correct = scoring::is_correct(self.config.scoring, user_answer, card.answer());
        (self.score, self.streak) = scoring::apply(self.score, self.streak, correct);

        self.draw_next();

        Ok(AnswerOutcome {
            question: card.question().to_owned(),
            user_answer: user_answer.to_owned(),
            expected_answer: card.answer().to_owned(),
            correct,
            score: self.score,
            streak: self.streak,
        })
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.current.and_then(|idx| self.cards.get(idx))
    }

    pub fn is_active(&self) -> bool {
        self.current_card().is_some()
    }

    // Callers guarantee a non-empty deck.
    fn draw_next(&mut self) -> usize {
        let idx = self.selector.next(self.cards.len(), &mut self.rng);
        log::debug!("Next question index: {idx}");
        self.current = Some(idx);
        idx
    }
}

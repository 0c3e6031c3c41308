// src/error.rs

use thiserror::Error;

/// Rejected input when adding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both question and answer.")]
    EmptyField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No flashcards available. Please add some flashcards first.")]
    NoCards,
    #[error("No question is active. Start a quiz first.")]
    NoActiveQuestion,
}

/// Failure reading one of the embedded YAML documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid card in deck: {0}")]
    Validation(#[from] ValidationError),
}

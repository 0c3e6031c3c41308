// src/data.rs

use crate::engine::QuizEngine;
use crate::error::{ConfigError, ValidationError};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct CardEntry {
    question: String,
    answer: String,
}

/// Adds every card of a YAML list (`- question: … answer: …`) to the engine.
/// Cards are validated first; on error nothing is added.
pub fn load_deck_yaml(engine: &mut QuizEngine, yaml: &str) -> Result<usize, ConfigError> {
    let entries: Vec<CardEntry> = serde_yaml::from_str(yaml)?;
    if entries
        .iter()
        .any(|e| e.question.trim().is_empty() || e.answer.trim().is_empty())
    {
        return Err(ValidationError::EmptyField.into());
    }
    for entry in &entries {
        engine.add_flashcard(&entry.question, &entry.answer)?;
    }
    Ok(entries.len())
}

/// Loads the deck embedded in the binary.
pub fn load_sample_deck(engine: &mut QuizEngine) -> Result<usize, ConfigError> {
    load_deck_yaml(engine, include_str!("data/sample_deck.yaml"))
}

// src/config.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How a submitted answer is judged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Every submission counts as correct, whatever was typed.
    #[default]
    AlwaysCorrect,
    /// Trimmed, case-sensitive comparison with the stored answer.
    ExactMatch,
    /// Trimmed comparison ignoring letter case.
    IgnoreCase,
}

/// How the next question is picked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Uniform draw over all cards; the same card may come up twice in a row.
    #[default]
    WithReplacement,
    /// Every card once per round, in shuffled order.
    ShuffledQueue,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct QuizConfig {
    pub scoring: ScoringMode,
    pub selection: SelectionMode,
}

impl ScoringMode {
    pub const ALL: [ScoringMode; 3] = [
        ScoringMode::AlwaysCorrect,
        ScoringMode::ExactMatch,
        ScoringMode::IgnoreCase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoringMode::AlwaysCorrect => "Every answer scores",
            ScoringMode::ExactMatch => "Exact match",
            ScoringMode::IgnoreCase => "Match, ignoring case",
        }
    }
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 2] = [SelectionMode::WithReplacement, SelectionMode::ShuffledQueue];

    pub fn label(self) -> &'static str {
        match self {
            SelectionMode::WithReplacement => "Random (repeats allowed)",
            SelectionMode::ShuffledQueue => "Shuffled rounds",
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults shipped with the binary. Falls back to `Default` if they fail to parse.
    pub fn embedded() -> Self {
        match Self::from_yaml_str(include_str!("data/default_config.yaml")) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Embedded config rejected, using built-in defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_classic_behaviour() {
        let config = QuizConfig::embedded();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.scoring, ScoringMode::AlwaysCorrect);
        assert_eq!(config.selection, SelectionMode::WithReplacement);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_keys() {
        let config = QuizConfig::from_yaml_str("scoring: ignore_case\n").expect("yaml ok");
        assert_eq!(config.scoring, ScoringMode::IgnoreCase);
        assert_eq!(config.selection, SelectionMode::WithReplacement);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = QuizConfig::from_yaml_str("selection: weighted\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

use crate::config::QuizConfig;
use crate::engine::QuizEngine;
use crate::model::AppState;
use crate::view_models::Notice;
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod queries;

/// Window-level state. Only preferences survive a restart; the deck and the
/// session live in `engine` and are rebuilt empty on every launch.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardApp {
    pub config: QuizConfig,
    pub dark_mode: bool,
    #[serde(skip)]
    pub engine: QuizEngine,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub question_input: String,
    #[serde(skip)]
    pub answer_input: String,
    #[serde(skip)]
    pub user_answer_input: String,
    #[serde(skip)]
    pub last_result: String,
    #[serde(skip)]
    pub notice: Option<Notice>,
    #[serde(skip)]
    pub show_settings: bool,
}

impl Default for FlashcardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardApp {
    pub fn new() -> Self {
        Self::with_engine(QuizEngine::new(), QuizConfig::embedded())
    }

    pub fn with_engine(engine: QuizEngine, config: QuizConfig) -> Self {
        Self {
            config,
            dark_mode: false,
            engine: engine.with_config(config),
            state: AppState::Deck,
            question_input: String::new(),
            answer_input: String::new(),
            user_answer_input: String::new(),
            last_result: String::new(),
            notice: None,
            show_settings: false,
        }
    }

    /// Restores saved preferences, if any.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut app: FlashcardApp = storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        let config = app.config;
        app.engine.set_config(config);
        app
    }
}

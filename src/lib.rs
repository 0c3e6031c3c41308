pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::FlashcardApp;
pub use engine::QuizEngine;

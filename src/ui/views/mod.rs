pub mod deck;
pub mod quiz;
pub mod settings;

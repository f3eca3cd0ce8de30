pub mod answer_key;
pub mod config;
pub mod engine;
pub mod errors;
pub mod input;
pub mod pivot;
pub mod session;
pub mod ui;

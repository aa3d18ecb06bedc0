pub mod app;
pub mod badges;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod game;
pub mod model;
pub mod museum;
pub mod progress;
pub mod story;
pub mod ui;
pub mod view_models;

pub use app::EmotionApp;

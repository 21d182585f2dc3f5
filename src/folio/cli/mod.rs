pub mod commands;
pub mod render;
pub mod setup;
pub mod styles;
pub mod templates;
pub mod terminal;

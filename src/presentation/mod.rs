pub mod screens;
pub mod terminal;

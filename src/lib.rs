pub mod cli;
pub mod error;
pub mod model;
pub mod nav;
pub mod parser;
pub mod state;
pub mod tui;
pub mod ui;

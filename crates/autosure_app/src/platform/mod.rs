//! Command-line presentation shell: turns arguments into pick and submit
//! messages, runs effects through the engine and prints the view.
mod app;
mod cli;
mod effects;
mod ui;

pub use app::run_app;

//! Terminal front end: everything that touches the process environment.
mod app;
pub mod cli;
mod config;
mod effects;
mod input;
mod logging;
pub mod terminal;
mod ui;

pub use app::run_app;

//! Terminal front end for distscope
//!
//! Renders the figures composed by `distscope_core` as ratatui charts: one
//! tab per distribution family, each tab a row of histogram panels with the
//! theoretical density drawn over them.

pub mod app;
pub mod components;
pub mod logging;
pub mod state;

#[cfg(test)]
mod tests;

pub use app::{App, AppConfig};
pub use logging::init_logging;

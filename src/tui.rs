//! Terminal UI: event loop, shell composition, and the mock screens.

mod app;
mod screens;
mod shell;

pub use app::run;

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod view;

pub use app::{Screen, build_controller, run};

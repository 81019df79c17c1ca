mod app;
mod effects;
mod keymap;
mod paths;
mod persistence;
mod ui;

pub use app::run_app;

pub mod config;
pub mod formatters;
pub mod interactive_ratatui;
pub mod logging;

pub use config::PaletteConfig;
pub use interactive_ratatui::InteractivePalette;
pub use interactive_ratatui::application::backend::{BackendError, PaletteBackend};
pub use interactive_ratatui::application::runner::run_operation;
pub use interactive_ratatui::domain::catalogue::Catalogue;
pub use interactive_ratatui::domain::classifier::classify;
pub use interactive_ratatui::domain::filter::{CommandFilter, GroupedResults};
pub use interactive_ratatui::domain::models::{
    InputMode, ResultKind, RunEvent, RunRequest, RunUpdate, StreamingResult, View,
};

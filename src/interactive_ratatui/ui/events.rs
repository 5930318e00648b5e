use crate::interactive_ratatui::domain::models::{Resource, RunEvent};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Visibility
    Open,
    Close,
    Toggle,

    // Input events
    InputChanged(String),
    Submit,
    Escape,

    // Selection
    MoveUp,
    MoveDown,
    ActivateItem(usize),
    ViewAllIssues,

    // Async events
    Run(RunEvent),
    ResourcesLoaded(Vec<Resource>),
    ResourcesFailed(String),

    // Help
    ShowHelp,
    CloseHelp,

    // UI events
    ClearStatus,

    // Terminal events
    Quit,
}

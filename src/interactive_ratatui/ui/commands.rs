use crate::interactive_ratatui::domain::models::{Route, RunRequest};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    StartRun(RunRequest),
    Navigate(Route),
    RefreshResources,
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}

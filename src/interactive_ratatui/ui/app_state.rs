use crate::interactive_ratatui::application::registry::ResourceRegistry;
use crate::interactive_ratatui::application::router::{Activation, Effect, ResultRouter};
use crate::interactive_ratatui::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive_ratatui::domain::catalogue::{Catalogue, PaletteCommand};
use crate::interactive_ratatui::domain::classifier::classify;
use crate::interactive_ratatui::domain::filter::{CommandFilter, GroupedResults};
use crate::interactive_ratatui::domain::models::{
    InputMode, Resource, ResultKind, Route, RunEvent, RunRequest, RunUpdate, StreamingResult,
};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;

// Re-export View
pub use crate::interactive_ratatui::domain::models::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSpace {
    Commands,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub active_index: usize,
    pub space: SelectionSpace,
}

/// The current (or last) run. `generation` identifies which worker events still count.
#[derive(Debug, Default)]
pub struct OperationRun {
    pub is_running: bool,
    pub generation: u64,
    pub mode: Option<InputMode>,
    pub log: Vec<StreamingResult>,
}

impl OperationRun {
    pub fn has_error(&self) -> bool {
        self.log.iter().any(|r| r.kind == ResultKind::Error)
    }

    pub fn has_issues(&self) -> bool {
        self.log.iter().any(|r| r.kind == ResultKind::Issue)
    }
}

pub struct UiState {
    pub message: Option<String>,
    pub route: Route,
    pub show_help: bool,
}

pub struct AppState {
    pub visible: bool,
    pub view: View,
    pub input: String,
    pub input_mode: InputMode,
    pub selection: SelectionState,
    pub run: OperationRun,
    pub catalogue: Catalogue,
    pub resources: ResourceRegistry,
    pub results: GroupedResults,
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_catalogue(Catalogue::new())
    }

    pub fn with_catalogue(catalogue: Catalogue) -> Self {
        let results = CommandFilter::filter(&catalogue, "", View::List);
        Self {
            visible: false,
            view: View::List,
            input: String::new(),
            input_mode: InputMode::Search,
            selection: SelectionState {
                active_index: 0,
                space: SelectionSpace::Commands,
            },
            run: OperationRun::default(),
            catalogue,
            resources: ResourceRegistry::new(),
            results,
            ui: UiState {
                message: None,
                route: Route::Dashboard,
                show_help: false,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Open => {
                self.visible = true;
                self.reset_session();
                tracing::debug!(generation = self.run.generation, "Palette opened");
                Command::None
            }
            Message::Close => {
                self.close();
                Command::None
            }
            Message::Toggle => {
                if self.visible {
                    self.update(Message::Close)
                } else {
                    self.update(Message::Open)
                }
            }
            Message::InputChanged(text) => {
                if !self.visible {
                    return Command::None;
                }
                self.set_input(text);
                Command::None
            }
            Message::Submit => {
                if !self.visible {
                    return Command::None;
                }
                if self.view == View::Streaming {
                    return self.update(Message::ActivateItem(self.selection.active_index));
                }
                if self.input_mode.is_runnable() {
                    self.start_run()
                } else {
                    self.update(Message::ActivateItem(self.selection.active_index))
                }
            }
            Message::Escape => {
                if self.ui.show_help {
                    self.ui.show_help = false;
                } else if self.view == View::Streaming {
                    self.back_to_list();
                } else {
                    self.close();
                }
                Command::None
            }
            Message::MoveUp => {
                self.selection.active_index = self.selection.active_index.saturating_sub(1);
                Command::None
            }
            Message::MoveDown => {
                let last = self.current_len().saturating_sub(1);
                self.selection.active_index = (self.selection.active_index + 1).min(last);
                Command::None
            }
            Message::ActivateItem(index) => {
                if !self.visible {
                    return Command::None;
                }
                let activation = match self.selection.space {
                    SelectionSpace::Commands => self
                        .results
                        .get(index)
                        .map(ResultRouter::activate_command),
                    SelectionSpace::Results => {
                        self.run.log.get(index).and_then(ResultRouter::activate_result)
                    }
                };
                match activation {
                    Some(activation) => self.apply_activation(activation),
                    None => Command::None,
                }
            }
            Message::ViewAllIssues => match self.issues_follow_up() {
                Some(activation) => self.apply_activation(activation),
                None => Command::None,
            },
            Message::Run(event) => self.apply_run_event(event),
            Message::ResourcesLoaded(resources) => {
                self.resources.replace(resources);
                self.sync_catalogue();
                Command::None
            }
            Message::ResourcesFailed(error) => {
                self.ui.message = Some(format!("Failed to load sites: {error}"));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ShowHelp => {
                self.ui.show_help = true;
                Command::None
            }
            Message::CloseHelp => {
                self.ui.show_help = false;
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// Number of selectable items in the active space.
    pub fn current_len(&self) -> usize {
        match self.selection.space {
            SelectionSpace::Commands => self.results.len(),
            SelectionSpace::Results => self.run.log.len(),
        }
    }

    pub fn highlighted_command(&self) -> Option<&PaletteCommand> {
        match self.selection.space {
            SelectionSpace::Commands => self.results.get(self.selection.active_index),
            SelectionSpace::Results => None,
        }
    }

    pub fn highlighted_result(&self) -> Option<&StreamingResult> {
        match self.selection.space {
            SelectionSpace::Commands => None,
            SelectionSpace::Results => self.run.log.get(self.selection.active_index),
        }
    }

    /// The "view all issues" follow-up, available once a run that found issues is done.
    pub fn issues_follow_up(&self) -> Option<Activation> {
        if self.view != View::Streaming || self.run.is_running {
            return None;
        }
        ResultRouter::issues_follow_up(&self.run.log)
    }

    fn start_run(&mut self) -> Command {
        self.run.generation += 1;
        self.run.is_running = true;
        self.run.mode = Some(self.input_mode);
        self.run.log.clear();
        self.view = View::Streaming;
        self.selection = SelectionState {
            active_index: 0,
            space: SelectionSpace::Results,
        };
        self.refresh_results();

        tracing::info!(
            generation = self.run.generation,
            mode = self.input_mode.label(),
            "Submitting run"
        );

        Command::StartRun(RunRequest {
            generation: self.run.generation,
            mode: self.input_mode,
            text: self.input.clone(),
        })
    }

    fn apply_run_event(&mut self, event: RunEvent) -> Command {
        if event.generation != self.run.generation {
            tracing::warn!(
                stale = event.generation,
                current = self.run.generation,
                "Discarding event from superseded run"
            );
            // A newer site list is still worth keeping; only the selection is run-specific.
            if let RunUpdate::ResourcesRefreshed { resources, .. } = event.update {
                self.resources.replace(resources);
                self.sync_catalogue();
            }
            return Command::None;
        }

        match event.update {
            RunUpdate::Result(result) => {
                self.run.log.push(result);
            }
            RunUpdate::ResourcesRefreshed { resources, select } => {
                self.resources.replace(resources);
                if let Some(id) = select {
                    self.resources.select(&id);
                }
                self.sync_catalogue();
            }
            RunUpdate::Finished => {
                self.run.is_running = false;
                tracing::debug!(
                    generation = event.generation,
                    results = self.run.log.len(),
                    "Run finished"
                );
            }
        }
        Command::None
    }

    fn apply_activation(&mut self, activation: Activation) -> Command {
        let command = match activation.effect {
            Effect::Navigate(route) => Command::Navigate(route),
            Effect::PrefillInput(text) => {
                self.set_input(text);
                Command::None
            }
            Effect::RefreshResources => Command::RefreshResources,
            Effect::SelectResource(id) => {
                if self.resources.select(&id) {
                    self.sync_catalogue();
                }
                if let Some(resource) = self.resources.selected() {
                    self.ui.message = Some(format!("Switched to {}", resource.display_name));
                }
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
        };

        if activation.close {
            self.close();
        }
        command
    }

    fn set_input(&mut self, text: String) {
        if self.view == View::Streaming {
            // Editing the text starts a new search
            self.run.generation += 1;
            self.run.is_running = false;
            self.run.log.clear();
            self.view = View::List;
        }
        self.input_mode = classify(&text);
        self.input = text;
        self.selection = SelectionState {
            active_index: 0,
            space: SelectionSpace::Commands,
        };
        self.refresh_results();
    }

    fn back_to_list(&mut self) {
        self.run.generation += 1;
        self.run.is_running = false;
        self.run.log.clear();
        self.view = View::List;
        self.input.clear();
        self.input_mode = InputMode::Search;
        self.selection = SelectionState {
            active_index: 0,
            space: SelectionSpace::Commands,
        };
        self.refresh_results();
    }

    fn reset_session(&mut self) {
        self.back_to_list();
        self.run.mode = None;
        self.ui.show_help = false;
    }

    fn close(&mut self) {
        if self.visible {
            tracing::debug!("Palette closed");
        }
        self.visible = false;
        self.ui.show_help = false;
        // Late events from an in-flight run must not land in the next session.
        self.run.generation += 1;
        self.run.is_running = false;
    }

    fn sync_catalogue(&mut self) {
        let changed = self
            .catalogue
            .sync_resources(self.resources.resources(), self.resources.selected_id());
        if changed && self.view == View::List {
            self.refresh_results();
            self.selection.active_index = 0;
        }
    }

    fn refresh_results(&mut self) {
        self.results = CommandFilter::filter(&self.catalogue, &self.input, self.view);
        let last = self.current_len().saturating_sub(1);
        self.selection.active_index = self.selection.active_index.min(last);
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.resources.selected()
    }
}

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use self::application::backend::PaletteBackend;
use self::application::runner::OperationRunner;
use self::constants::{EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use self::domain::models::{RunEvent, View};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, EXIT_PROMPT},
    events::Message,
    renderer::Renderer,
};

pub struct InteractivePalette {
    state: AppState,
    renderer: Renderer,
    backend: Arc<dyn PaletteBackend>,
    runner: OperationRunner,
    run_receiver: Receiver<RunEvent>,
    resource_sender: Sender<Message>,
    resource_receiver: Receiver<Message>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    should_quit: bool,
}

impl InteractivePalette {
    pub fn new(backend: Arc<dyn PaletteBackend>, idea_count: usize) -> Self {
        let (runner, run_receiver) = OperationRunner::start(backend.clone(), idea_count);
        let (resource_sender, resource_receiver) = mpsc::channel();

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            backend,
            runner,
            run_receiver,
            resource_sender,
            resource_receiver,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.execute_command(Command::RefreshResources);
        self.handle_message(Message::Open);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            self.drain_events();

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub(crate) fn draw(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state);
    }

    /// Feed everything the workers produced since the last tick into the state machine.
    pub(crate) fn drain_events(&mut self) {
        while let Ok(event) = self.run_receiver.try_recv() {
            self.handle_message(Message::Run(event));
        }
        while let Ok(message) = self.resource_receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                // Check if second press is within 1 second
                if last_press.elapsed() < Duration::from_secs(1) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.message_timer = Some(Instant::now());
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_message(Message::Toggle);
                return;
            }
            KeyCode::F(1) if !self.state.ui.show_help => {
                self.handle_message(Message::ShowHelp);
                return;
            }
            _ => {}
        }

        let message = if self.state.ui.show_help {
            self.renderer.get_help_dialog_mut().handle_key(key)
        } else if self.state.visible {
            self.handle_palette_input(key)
        } else {
            match key.code {
                KeyCode::Char('q') => Some(Message::Quit),
                KeyCode::Char('?') => Some(Message::ShowHelp),
                _ => None,
            }
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_palette_input(&mut self, key: KeyEvent) -> Option<Message> {
        let is_list_key = matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Tab
        ) || (key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('p') | KeyCode::Char('n')));

        match key.code {
            KeyCode::Esc => Some(Message::Escape),
            _ if is_list_key => match self.state.view {
                View::List => self.renderer.get_command_list_mut().handle_key(key),
                View::Streaming => self.renderer.get_stream_log_mut().handle_key(key),
            },
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::StartRun(request) => {
                self.runner.submit(request);
            }
            Command::Navigate(route) => {
                let path = route.path();
                tracing::info!(path = %path, "Navigating");
                self.state.ui.route = route;
                self.state.ui.message = Some(format!("Opened {path}"));
                self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
            }
            Command::RefreshResources => {
                self.refresh_resources();
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn refresh_resources(&self) {
        let backend = self.backend.clone();
        let sender = self.resource_sender.clone();

        thread::spawn(move || {
            let message = match backend.list_resources() {
                Ok(resources) => {
                    tracing::debug!(count = resources.len(), "Loaded sites");
                    Message::ResourcesLoaded(resources)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load sites");
                    Message::ResourcesFailed(e.to_string())
                }
            };
            // Receiver dropped on shutdown.
            let _ = sender.send(message);
        });
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }
}

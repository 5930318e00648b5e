use std::time::Instant;

use crate::interactive_ratatui::constants::{
    PALETTE_MAX_HEIGHT, PALETTE_MAX_WIDTH, SEARCH_BAR_HEIGHT, SPINNER_INTERVAL_MS,
    STATUS_BAR_HEIGHT,
};
use crate::interactive_ratatui::ui::app_state::{AppState, View};
use crate::interactive_ratatui::ui::components::{
    Component, command_list::CommandList, help_dialog::HelpDialog, search_bar::SearchBar,
    stream_log::StreamLog,
    view_layout::{Styles, ViewLayout},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LIST_FOOTER: &str = "↑/↓: Navigate | Enter: Select | Esc: Close | F1: Help";
const STREAMING_FOOTER: &str = "↑/↓: Navigate | Enter: Open | Esc: Back | Type: New search";

pub struct Renderer {
    search_bar: SearchBar,
    command_list: CommandList,
    stream_log: StreamLog,
    help_dialog: HelpDialog,
    started: Instant,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            command_list: CommandList::new(),
            stream_log: StreamLog::new(),
            help_dialog: HelpDialog::new(),
            started: Instant::now(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_shell(f, state);

        if state.visible {
            self.render_palette(f, state);
        }

        if state.ui.show_help {
            self.help_dialog.render(f, f.area());
        }
    }

    /// The page the palette navigates: current route, selected site, status line.
    fn render_shell(&self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        let site = state
            .selected_resource()
            .map(|r| r.display_name.as_str())
            .unwrap_or("no site selected");
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Omnipalette ", Styles::title()),
            Span::styled(state.ui.route.path(), Styles::label()),
            Span::styled(format!("  ({site})"), Styles::dimmed()),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, chunks[0]);

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press Ctrl+K to open the command palette",
                Styles::dimmed(),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(body, chunks[1]);

        // The palette's own title shows messages while it is open
        if !state.visible {
            let status = state.ui.message.as_deref().unwrap_or("F1: Help | Ctrl+C: Quit");
            let status_bar = Paragraph::new(status)
                .style(Styles::dimmed())
                .alignment(Alignment::Center);
            f.render_widget(status_bar, chunks[2]);
        }
    }

    fn render_palette(&mut self, f: &mut Frame, state: &AppState) {
        let footer = match state.view {
            View::List => LIST_FOOTER,
            View::Streaming => STREAMING_FOOTER,
        };
        let mut layout = ViewLayout::new("Command palette".to_string())
            .with_footer(footer.to_string())
            .with_max_size(PALETTE_MAX_WIDTH, PALETTE_MAX_HEIGHT);
        if let Some(resource) = state.selected_resource() {
            layout = layout.with_subtitle(resource.display_name.clone());
        }

        self.search_bar.set_query(&state.input);
        self.search_bar.set_mode(state.input_mode);
        self.search_bar.set_running(state.run.is_running);
        self.search_bar.set_spinner_frame(self.spinner_frame());
        self.search_bar.set_message(state.ui.message.clone());

        match state.view {
            View::List => {
                self.command_list.set_results(&state.results);
                self.command_list
                    .set_selected_index(state.selection.active_index);
            }
            View::Streaming => {
                self.stream_log.set_results(&state.run.log);
                self.stream_log
                    .set_selected_index(state.selection.active_index);
                self.stream_log.set_follow_up(
                    state
                        .issues_follow_up()
                        .map(|_| "View all issues".to_string()),
                );
            }
        }

        let view = state.view;
        let search_bar = &mut self.search_bar;
        let command_list = &mut self.command_list;
        let stream_log = &mut self.stream_log;
        layout.render(f, f.area(), |f, area| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(SEARCH_BAR_HEIGHT), Constraint::Min(0)])
                .split(area);

            search_bar.render(f, chunks[0]);
            match view {
                View::List => command_list.render(f, chunks[1]),
                View::Streaming => stream_log.render(f, chunks[1]),
            }
        });
    }

    fn spinner_frame(&self) -> usize {
        (self.started.elapsed().as_millis() / u128::from(SPINNER_INTERVAL_MS)) as usize
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_command_list_mut(&mut self) -> &mut CommandList {
        &mut self.command_list
    }

    pub fn get_stream_log_mut(&mut self) -> &mut StreamLog {
        &mut self.stream_log
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}


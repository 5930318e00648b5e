use crate::interactive_ratatui::constants::SPINNER_FRAMES;
use crate::interactive_ratatui::domain::models::InputMode;
use crate::interactive_ratatui::ui::components::{
    Component, text_input::TextInput, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Search commands, paste a URL, or describe a topic...";

#[derive(Default)]
pub struct SearchBar {
    text_input: TextInput,
    mode: InputMode,
    is_running: bool,
    spinner_frame: usize,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the text from state. The cursor only moves when the text actually differs, so
    /// re-rendering the same text keeps the user's cursor position.
    pub fn set_query(&mut self, query: &str) {
        if self.text_input.text() != query {
            self.text_input.set_text(query.to_string());
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn set_running(&mut self, is_running: bool) {
        self.is_running = is_running;
    }

    pub fn set_spinner_frame(&mut self, frame: usize) {
        self.spinner_frame = frame;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        self.text_input.text()
    }

    pub fn cursor_position(&self) -> usize {
        self.text_input.cursor_position()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(format!(" {} ", self.mode.label()), Styles::title())];
        if self.is_running {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(format!("{frame} "), Styles::label()));
        }
        if let Some(hint) = self.mode.hint() {
            spans.push(Span::styled(format!("{hint} "), Styles::dimmed()));
        }
        if let Some(message) = &self.message {
            spans.push(Span::styled(format!("- {message} "), Styles::warning()));
        }
        Line::from(spans)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let content = if self.text_input.text().is_empty() {
            let mut spans = self.text_input.render_cursor_spans();
            spans.push(Span::styled(PLACEHOLDER, Styles::dimmed()));
            Line::from(spans)
        } else {
            Line::from(self.text_input.render_cursor_spans())
        };

        let input = Paragraph::new(content)
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.text_input.handle_key(key) {
            Some(Message::InputChanged(self.text_input.text().to_string()))
        } else {
            None
        }
    }
}

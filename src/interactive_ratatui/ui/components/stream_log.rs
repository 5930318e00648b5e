use crate::interactive_ratatui::domain::models::StreamingResult;
use crate::interactive_ratatui::ui::components::{
    Component,
    list_viewer::{ListViewer, Row},
    view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Results of the current run, in arrival order.
pub struct StreamLog {
    list_viewer: ListViewer,
    follow_up: Option<String>,
}

impl Default for StreamLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamLog {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Waiting for results...".to_string()),
            follow_up: None,
        }
    }

    pub fn set_results(&mut self, results: &[StreamingResult]) {
        let rows = results
            .iter()
            .enumerate()
            .map(|(i, result)| Row::item(i, result_line(result)))
            .collect();
        self.list_viewer.set_rows(rows);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    /// Label for the aggregate follow-up action, shown under the log when available.
    pub fn set_follow_up(&mut self, label: Option<String>) {
        self.follow_up = label;
    }

    pub fn item_count(&self) -> usize {
        self.list_viewer.item_count()
    }
}

fn result_line(result: &StreamingResult) -> Line<'static> {
    let style = Styles::result_kind(result.kind);
    let mut spans = vec![
        Span::styled(format!(" {} ", result.kind.icon()), style),
        Span::styled(result.message.clone(), style),
    ];
    if let Some(subtitle) = result.subtitle() {
        spans.push(Span::styled(format!("  {subtitle}"), Styles::dimmed()));
    }
    Line::from(spans)
}

impl Component for StreamLog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(follow_up) = &self.follow_up else {
            self.list_viewer.render(f, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.list_viewer.render(f, chunks[0]);
        let follow_up = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Styles::label()),
            Span::styled(follow_up.clone(), Styles::normal()),
        ]));
        f.render_widget(follow_up, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::MoveUp),
            KeyCode::Down => Some(Message::MoveDown),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => Some(Message::MoveUp),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::MoveDown)
            }
            KeyCode::Enter => Some(Message::Submit),
            KeyCode::Tab if self.follow_up.is_some() => Some(Message::ViewAllIssues),
            _ => None,
        }
    }
}

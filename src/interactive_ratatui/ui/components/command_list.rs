use crate::interactive_ratatui::domain::catalogue::PaletteCommand;
use crate::interactive_ratatui::domain::filter::GroupedResults;
use crate::interactive_ratatui::ui::components::{
    Component,
    list_viewer::{ListViewer, Row},
    view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

/// Filtered commands under their category headers.
pub struct CommandList {
    list_viewer: ListViewer,
}

impl Default for CommandList {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("No matching commands".to_string()),
        }
    }

    pub fn set_results(&mut self, results: &GroupedResults) {
        let mut rows = Vec::with_capacity(results.len() + results.groups().len());
        let mut index = 0;
        for (category, commands) in results.groups() {
            rows.push(Row::header(Line::from(Span::styled(
                category.label().to_uppercase(),
                Styles::group_header(),
            ))));
            for command in commands {
                rows.push(Row::item(index, command_line(command)));
                index += 1;
            }
        }
        self.list_viewer.set_rows(rows);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    pub fn selected_index(&self) -> usize {
        self.list_viewer.selected_index
    }

    pub fn item_count(&self) -> usize {
        self.list_viewer.item_count()
    }
}

fn command_line(command: &PaletteCommand) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("  {}", command.title), Styles::normal())];
    if let Some(description) = &command.description {
        spans.push(Span::styled(format!("  {description}"), Styles::dimmed()));
    }
    if let Some(shortcut) = &command.shortcut {
        spans.push(Span::styled(format!("  [{shortcut}]"), Styles::label()));
    }
    Line::from(spans)
}

impl Component for CommandList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.list_viewer.render(f, area);
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
            _ => None,
        }
    }
}

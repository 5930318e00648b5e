use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Omnipalette - Command Palette",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  Ctrl+K      - Open or close the palette"),
            Line::from("  F1          - Show this help"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Self::section("Command list:"),
            Line::from("  Type        - Filter commands"),
            Line::from("  ↑/↓         - Navigate (Ctrl+P/N also work)"),
            Line::from("  Enter       - Run the highlighted command"),
            Line::from("  Esc         - Close the palette"),
            Line::from(""),
            Self::section("Input modes:"),
            Line::from("  example.com - URL mode, Enter analyzes the site"),
            Line::from("  long text   - AI mode, Enter generates content ideas"),
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓         - Navigate results"),
            Line::from("  Enter       - Open the highlighted idea or report"),
            Line::from("  Tab         - View all issues (when offered)"),
            Line::from("  Type        - Start a new search"),
            Line::from("  Esc         - Back to the command list"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}

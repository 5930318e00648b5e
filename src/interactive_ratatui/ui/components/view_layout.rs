use crate::interactive_ratatui::domain::models::ResultKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Bordered overlay with a title and a one-line footer, centered over whatever is below it.
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    footer: Option<String>,
    max_width: u16,
    max_height: u16,
}

impl ViewLayout {
    pub fn new(title: String) -> Self {
        Self {
            title,
            subtitle: None,
            footer: None,
            max_width: u16::MAX,
            max_height: u16::MAX,
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_footer(mut self, footer: String) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_max_size(mut self, width: u16, height: u16) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// The overlay rectangle inside `area`.
    pub fn overlay_area(&self, area: Rect) -> Rect {
        centered_rect(area, self.max_width, self.max_height)
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let overlay = self.overlay_area(area);
        f.render_widget(Clear, overlay);

        let mut title = vec![Span::styled(format!(" {} ", self.title), Styles::title())];
        if let Some(subtitle) = &self.subtitle {
            title.push(Span::styled(format!("{subtitle} "), Styles::subtitle()));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ColorScheme::PRIMARY));
        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let constraints = if self.footer.is_some() {
            vec![Constraint::Min(0), Constraint::Length(1)]
        } else {
            vec![Constraint::Min(0)]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        render_content(f, chunks[0]);

        if let Some(footer) = &self.footer {
            let footer = Paragraph::new(footer.as_str())
                .style(Styles::dimmed())
                .alignment(Alignment::Center);
            f.render_widget(footer, chunks[1]);
        }
    }
}

/// A rectangle of at most `max_width` x `max_height`, centered in `area` with a one-cell margin
/// where space allows.
pub fn centered_rect(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = max_width.min(area.width.saturating_sub(2)).max(area.width.min(1));
    let height = max_height
        .min(area.height.saturating_sub(2))
        .max(area.height.min(1));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn group_header() -> Style {
        Style::default()
            .fg(ColorScheme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn result_kind(kind: ResultKind) -> Style {
        match kind {
            ResultKind::Progress => Self::dimmed(),
            ResultKind::Score => Self::label(),
            ResultKind::Issue => Self::warning(),
            ResultKind::Content => Self::normal(),
            ResultKind::Success => Self::success(),
            ResultKind::Error => Self::error(),
        }
    }
}

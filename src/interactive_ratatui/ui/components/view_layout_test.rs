#[cfg(test)]
mod tests {
    use super::super::view_layout::{ColorScheme, Styles, ViewLayout, centered_rect};
    use crate::interactive_ratatui::domain::models::ResultKind;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        layout::Rect,
        style::{Color, Modifier},
    };

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_view_layout_renders_title_and_footer() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout = ViewLayout::new("Palette".to_string())
                    .with_subtitle("Shop".to_string())
                    .with_footer("Esc: Close".to_string());
                layout.render(f, f.area(), |_f, area| {
                    assert!(area.height > 0);
                    assert!(area.width > 0);
                });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Palette"));
        assert!(buffer_contains_text(buffer, "Shop"));
        assert!(buffer_contains_text(buffer, "Esc: Close"));
    }

    #[test]
    fn test_content_area_is_inside_max_size() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout =
                    ViewLayout::new("Palette".to_string()).with_max_size(60, 20);
                layout.render(f, f.area(), |_f, area| {
                    // Borders take one cell on each side
                    assert_eq!(area.width, 58);
                    assert_eq!(area.height, 18);
                });
            })
            .unwrap();
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(20, 15, 60, 20));

        // Smaller than the max size leaves a one-cell margin
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(1, 1, 38, 8));

        // Degenerate areas never underflow
        let area = Rect::new(0, 0, 1, 1);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(0, 0, 1, 1));
        let area = Rect::new(0, 0, 0, 0);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn test_styles() {
        let title = Styles::title();
        assert_eq!(title.fg, Some(ColorScheme::PRIMARY));
        assert!(title.add_modifier.contains(Modifier::BOLD));

        assert_eq!(Styles::selected().bg, Some(ColorScheme::SELECTION));
        assert_eq!(Styles::dimmed().fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_result_kind_styles() {
        assert_eq!(
            Styles::result_kind(ResultKind::Error).fg,
            Some(ColorScheme::ERROR)
        );
        assert_eq!(
            Styles::result_kind(ResultKind::Success).fg,
            Some(ColorScheme::SUCCESS)
        );
        assert_eq!(
            Styles::result_kind(ResultKind::Progress).fg,
            Some(ColorScheme::TEXT_DIM)
        );
    }
}

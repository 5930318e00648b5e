#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::interactive_ratatui::application::demo_backend::DemoBackend;
    use crate::interactive_ratatui::domain::models::{ResultKind, Route};
    use ratatui::backend::TestBackend;
    use ratatui::{Terminal, buffer::Buffer};

    fn create_palette() -> InteractivePalette {
        let backend = Arc::new(DemoBackend::new(Duration::ZERO));
        InteractivePalette::new(backend, 3)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(palette: &mut InteractivePalette, text: &str) {
        for c in text.chars() {
            palette.handle_input(key(KeyCode::Char(c)));
        }
    }

    /// Drain worker output until `done` holds or the deadline passes.
    fn wait_until(palette: &mut InteractivePalette, done: impl Fn(&AppState) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            palette.drain_events();
            if done(palette.state()) {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        false
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_ctrl_k_toggles_palette() {
        let mut palette = create_palette();
        assert!(!palette.state().visible);

        palette.handle_input(ctrl('k'));
        assert!(palette.state().visible);

        palette.handle_input(ctrl('k'));
        assert!(!palette.state().visible);
    }

    #[test]
    fn test_typing_filters_commands() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));

        type_text(&mut palette, "settings");

        let state = palette.state();
        assert_eq!(state.input, "settings");
        assert_eq!(
            state.highlighted_command().map(|c| c.id.as_str()),
            Some("nav-settings")
        );
    }

    #[test]
    fn test_enter_on_navigation_command_changes_route() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        type_text(&mut palette, "keywords");

        palette.handle_input(key(KeyCode::Enter));

        let state = palette.state();
        assert!(!state.visible);
        assert_eq!(state.ui.route, Route::Keywords);
        assert_eq!(state.ui.message, Some("Opened /keywords".to_string()));
    }

    #[test]
    fn test_url_analysis_streams_and_selects_site() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        type_text(&mut palette, "https://acme.example");
        palette.handle_input(key(KeyCode::Enter));
        assert!(palette.state().run.is_running);

        assert!(wait_until(&mut palette, |s| !s.run.is_running
            && s.resources.selected_id() == Some("acme-example")));

        let state = palette.state();
        assert_eq!(state.run.log[0].kind, ResultKind::Progress);
        assert_eq!(
            state.run.log.last().map(|r| r.kind),
            Some(ResultKind::Success)
        );
        assert!(state.catalogue.get("site:acme-example").is_some());
    }

    #[test]
    fn test_activating_success_opens_site_report() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        type_text(&mut palette, "acme.example");
        palette.handle_input(key(KeyCode::Enter));
        assert!(wait_until(&mut palette, |s| !s.run.is_running));

        let last = palette.state().run.log.len() - 1;
        for _ in 0..last {
            palette.handle_input(key(KeyCode::Down));
        }
        palette.handle_input(key(KeyCode::Enter));

        assert!(!palette.state().visible);
        assert_eq!(
            palette.state().ui.route,
            Route::Site("acme-example".to_string())
        );
    }

    #[test]
    fn test_typing_during_results_starts_new_search() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        type_text(&mut palette, "acme.example");
        palette.handle_input(key(KeyCode::Enter));
        assert!(wait_until(&mut palette, |s| !s.run.is_running));

        palette.handle_input(key(KeyCode::Backspace));

        let state = palette.state();
        assert_eq!(state.view, View::List);
        assert_eq!(state.input, "acme.exampl");
        assert!(state.run.log.is_empty());
    }

    #[test]
    fn test_refresh_sites_loads_resources() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        type_text(&mut palette, "refresh sites");
        palette.handle_input(key(KeyCode::Enter));

        assert!(wait_until(&mut palette, |s| s.resources.resources().len() == 2));
        assert_eq!(palette.state().catalogue.sites().len(), 2);
    }

    #[test]
    fn test_help_opens_with_f1_and_closes_on_any_key() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));

        palette.handle_input(key(KeyCode::F(1)));
        assert!(palette.state().ui.show_help);

        palette.handle_input(key(KeyCode::Char('x')));
        assert!(!palette.state().ui.show_help);
        // The key closed help and was not typed
        assert_eq!(palette.state().input, "");
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut palette = create_palette();

        palette.handle_input(ctrl('c'));
        assert!(!palette.should_quit());
        assert_eq!(
            palette.state().ui.message,
            Some("Press Ctrl+C again to exit".to_string())
        );

        palette.handle_input(ctrl('c'));
        assert!(palette.should_quit());
    }

    #[test]
    fn test_q_quits_only_when_closed() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        palette.handle_input(key(KeyCode::Char('q')));
        assert!(!palette.should_quit());
        assert_eq!(palette.state().input, "q");

        palette.handle_input(key(KeyCode::Esc));
        palette.handle_input(key(KeyCode::Char('q')));
        assert!(palette.should_quit());
    }

    #[test]
    fn test_draw_open_palette() {
        let mut palette = create_palette();
        palette.handle_input(ctrl('k'));
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| palette.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Command palette"));
        assert!(buffer_contains_text(buffer, "Analyze a URL"));
    }
}

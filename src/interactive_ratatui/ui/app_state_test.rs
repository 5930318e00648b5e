#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::interactive_ratatui::domain::catalogue::{Catalogue, CommandAction, PaletteCommand};
    use crate::interactive_ratatui::domain::models::{
        Category, InputMode, Resource, ResultKind, Route, RunEvent, RunRequest, RunUpdate,
        StreamingResult, payload_keys,
    };

    fn command(id: &str, title: &str, action: CommandAction) -> PaletteCommand {
        PaletteCommand {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            category: Category::Actions,
            keywords: Vec::new(),
            shortcut: None,
            action,
        }
    }

    fn create_test_state() -> AppState {
        let catalogue = Catalogue::with_builtin(vec![
            command("one", "Open dashboard", CommandAction::Navigate(Route::Dashboard)),
            command(
                "two",
                "Analyze a URL",
                CommandAction::PrefillInput("https://".to_string()),
            ),
            command("three", "Refresh sites", CommandAction::RefreshResources),
        ]);
        let mut state = AppState::with_catalogue(catalogue);
        state.update(Message::Open);
        state
    }

    fn resource(id: &str, name: &str) -> Resource {
        Resource {
            id: id.to_string(),
            display_name: name.to_string(),
            url: None,
        }
    }

    fn event(generation: u64, update: RunUpdate) -> Message {
        Message::Run(RunEvent { generation, update })
    }

    fn start_url_run(state: &mut AppState) -> RunRequest {
        state.update(Message::InputChanged("https://example.com".to_string()));
        match state.update(Message::Submit) {
            Command::StartRun(request) => request,
            other => panic!("expected StartRun, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();

        assert!(!state.visible);
        assert_eq!(state.view, View::List);
        assert_eq!(state.input, "");
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.selection.active_index, 0);
        assert_eq!(state.selection.space, SelectionSpace::Commands);
        assert!(!state.run.is_running);
        assert!(state.run.log.is_empty());
        assert_eq!(state.ui.route, Route::Dashboard);
        // Built-ins are listed even before any site is loaded
        assert_eq!(state.results.len(), state.catalogue.len());
    }

    #[test]
    fn test_arrow_navigation_clamps_at_both_ends() {
        let mut state = create_test_state();
        assert_eq!(state.current_len(), 3);

        for _ in 0..5 {
            state.update(Message::MoveDown);
        }
        assert_eq!(state.selection.active_index, 2);

        for _ in 0..5 {
            state.update(Message::MoveUp);
        }
        assert_eq!(state.selection.active_index, 0);
    }

    #[test]
    fn test_move_on_empty_list_stays_at_zero() {
        let mut state = create_test_state();
        state.update(Message::InputChanged("zzz".to_string()));
        assert_eq!(state.current_len(), 0);

        state.update(Message::MoveDown);
        assert_eq!(state.selection.active_index, 0);
        assert!(matches!(state.update(Message::Submit), Command::None));
    }

    #[test]
    fn test_input_change_classifies_and_resets_selection() {
        let mut state = create_test_state();
        state.update(Message::MoveDown);

        state.update(Message::InputChanged("refresh".to_string()));
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.selection.active_index, 0);
        assert_eq!(state.results.len(), 1);

        state.update(Message::InputChanged("example.com".to_string()));
        assert_eq!(state.input_mode, InputMode::Url);

        state.update(Message::InputChanged(
            "write me something about coffee".to_string(),
        ));
        assert_eq!(state.input_mode, InputMode::Ai);
    }

    #[test]
    fn test_submit_in_search_mode_activates_highlighted_command() {
        let mut state = create_test_state();

        let command = state.update(Message::Submit);

        assert_eq!(command, Command::Navigate(Route::Dashboard));
        assert!(!state.visible);
    }

    #[test]
    fn test_prefill_command_keeps_palette_open() {
        let mut state = create_test_state();
        state.update(Message::MoveDown);

        let command = state.update(Message::Submit);

        assert_eq!(command, Command::None);
        assert!(state.visible);
        assert_eq!(state.input, "https://");
        assert_eq!(state.selection.active_index, 0);
    }

    #[test]
    fn test_refresh_command_is_forwarded() {
        let mut state = create_test_state();

        let command = state.update(Message::ActivateItem(2));

        assert_eq!(command, Command::RefreshResources);
        assert!(!state.visible);
        // Palette closed, so nothing further is activated
        assert_eq!(state.update(Message::ActivateItem(2)), Command::None);
    }

    #[test]
    fn test_submit_runnable_input_starts_run() {
        let mut state = create_test_state();
        let generation_before = state.run.generation;

        let request = start_url_run(&mut state);

        assert_eq!(request.mode, InputMode::Url);
        assert_eq!(request.text, "https://example.com");
        assert_eq!(request.generation, generation_before + 1);
        assert_eq!(state.run.generation, request.generation);
        assert!(state.run.is_running);
        assert_eq!(state.view, View::Streaming);
        assert_eq!(state.selection.space, SelectionSpace::Results);
        assert_eq!(state.run.mode, Some(InputMode::Url));
    }

    #[test]
    fn test_run_events_append_in_order_and_finish() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);

        state.update(event(
            request.generation,
            RunUpdate::Result(StreamingResult::progress("Connecting...")),
        ));
        state.update(event(
            request.generation,
            RunUpdate::Result(StreamingResult::new(ResultKind::Score, "Performance: 80/100")),
        ));
        assert!(state.run.is_running);

        state.update(event(request.generation, RunUpdate::Finished));

        assert!(!state.run.is_running);
        let messages: Vec<&str> = state.run.log.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["Connecting...", "Performance: 80/100"]);
    }

    #[test]
    fn test_stale_events_are_discarded() {
        let mut state = create_test_state();
        let first = start_url_run(&mut state);

        // Back to the list and run again
        state.update(Message::Escape);
        let second = start_url_run(&mut state);
        assert!(second.generation > first.generation);

        state.update(event(
            first.generation,
            RunUpdate::Result(StreamingResult::progress("old")),
        ));
        state.update(event(first.generation, RunUpdate::Finished));

        assert!(state.run.log.is_empty());
        assert!(state.run.is_running);
    }

    #[test]
    fn test_stale_refresh_updates_sites_but_not_selection() {
        let mut state = create_test_state();
        let first = start_url_run(&mut state);
        state.update(Message::Escape);

        state.update(event(
            first.generation,
            RunUpdate::ResourcesRefreshed {
                resources: vec![resource("s1", "Shop")],
                select: Some("s1".to_string()),
            },
        ));

        assert_eq!(state.resources.resources().len(), 1);
        assert_eq!(state.resources.selected_id(), None);
        assert_eq!(state.catalogue.sites().len(), 1);
    }

    #[test]
    fn test_refresh_after_analysis_selects_site() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);

        state.update(event(
            request.generation,
            RunUpdate::ResourcesRefreshed {
                resources: vec![resource("a", "A"), resource("example-com", "example.com")],
                select: Some("example-com".to_string()),
            },
        ));

        assert_eq!(state.resources.selected_id(), Some("example-com"));
        let site = state.catalogue.get("site:example-com").expect("site command");
        assert_eq!(site.description.as_deref(), Some("Current site"));
    }

    #[test]
    fn test_activating_content_result_navigates_and_closes() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);
        state.update(event(
            request.generation,
            RunUpdate::Result(
                StreamingResult::new(ResultKind::Content, "Best CRM tools")
                    .with(payload_keys::KEYWORD, "best crm"),
            ),
        ));

        let command = state.update(Message::Submit);

        let Command::Navigate(route) = command else {
            panic!("expected navigation, got {command:?}");
        };
        assert_eq!(route.path(), "/articles/new?keyword=best%20crm");
        assert!(!state.visible);
    }

    #[test]
    fn test_activating_progress_result_is_noop() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);
        state.update(event(
            request.generation,
            RunUpdate::Result(StreamingResult::progress("Crawling pages...")),
        ));

        let command = state.update(Message::ActivateItem(0));

        assert_eq!(command, Command::None);
        assert!(state.visible);
        assert_eq!(state.view, View::Streaming);
        assert_eq!(state.run.log.len(), 1);
    }

    #[test]
    fn test_escape_in_streaming_returns_to_list() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);

        let command = state.update(Message::Escape);

        assert_eq!(command, Command::None);
        assert!(state.visible);
        assert_eq!(state.view, View::List);
        assert_eq!(state.input, "");
        assert!(state.run.log.is_empty());
        assert!(!state.run.is_running);
        assert!(state.run.generation > request.generation);
        assert_eq!(state.selection.space, SelectionSpace::Commands);
    }

    #[test]
    fn test_escape_in_list_closes() {
        let mut state = create_test_state();

        state.update(Message::Escape);

        assert!(!state.visible);
    }

    #[test]
    fn test_typing_during_streaming_starts_new_search() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);

        state.update(Message::InputChanged("dash".to_string()));

        assert_eq!(state.view, View::List);
        assert!(state.run.log.is_empty());
        assert!(state.run.generation > request.generation);
        assert_eq!(state.results.len(), 1);
    }

    #[test]
    fn test_reopen_resets_session() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);
        state.update(event(
            request.generation,
            RunUpdate::Result(StreamingResult::progress("Connecting...")),
        ));

        state.update(Message::Toggle);
        assert!(!state.visible);
        state.update(Message::Toggle);

        assert!(state.visible);
        assert_eq!(state.input, "");
        assert!(state.run.log.is_empty());
        assert!(!state.run.is_running);
        assert_eq!(state.view, View::List);
        assert_eq!(state.selection.active_index, 0);

        // Late events from before the close are ignored
        state.update(event(
            request.generation,
            RunUpdate::Result(StreamingResult::progress("late")),
        ));
        assert!(state.run.log.is_empty());
    }

    #[test]
    fn test_view_all_issues_after_finished_run() {
        let mut state = create_test_state();
        let request = start_url_run(&mut state);
        state.update(event(
            request.generation,
            RunUpdate::Result(
                StreamingResult::new(ResultKind::Issue, "Found 2 critical issues and 3 warnings")
                    .with(payload_keys::RESOURCE_ID, "example-com"),
            ),
        ));

        // Not offered while the run is still streaming
        assert_eq!(state.update(Message::ViewAllIssues), Command::None);
        assert!(state.visible);

        state.update(event(request.generation, RunUpdate::Finished));
        let command = state.update(Message::ViewAllIssues);

        assert_eq!(
            command,
            Command::Navigate(Route::Issues {
                site_id: Some("example-com".to_string())
            })
        );
        assert!(!state.visible);
    }

    #[test]
    fn test_resources_loaded_resets_list_selection() {
        let mut state = create_test_state();
        state.update(Message::MoveDown);
        state.update(Message::MoveDown);

        state.update(Message::ResourcesLoaded(vec![resource("s1", "Shop")]));

        assert_eq!(state.selection.active_index, 0);
        assert_eq!(state.results.len(), 4);
    }

    #[test]
    fn test_select_site_command_updates_registry() {
        let mut state = create_test_state();
        state.update(Message::ResourcesLoaded(vec![
            resource("s1", "Shop"),
            resource("s2", "Blog"),
        ]));
        state.update(Message::InputChanged("blog".to_string()));

        let command = state.update(Message::Submit);

        assert!(matches!(command, Command::ScheduleClearMessage(_)));
        assert_eq!(state.resources.selected_id(), Some("s2"));
        assert_eq!(state.ui.message, Some("Switched to Blog".to_string()));
        assert!(!state.visible);
    }

    #[test]
    fn test_resources_failed_shows_message() {
        let mut state = create_test_state();

        let command = state.update(Message::ResourcesFailed("timeout".to_string()));

        assert!(matches!(command, Command::ScheduleClearMessage(_)));
        assert_eq!(
            state.ui.message,
            Some("Failed to load sites: timeout".to_string())
        );

        state.update(Message::ClearStatus);
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_help_is_closed_by_escape_first() {
        let mut state = create_test_state();
        state.update(Message::ShowHelp);
        assert!(state.ui.show_help);

        state.update(Message::Escape);

        assert!(!state.ui.show_help);
        assert!(state.visible);
    }

    #[test]
    fn test_quit_message() {
        let mut state = create_test_state();
        assert_eq!(state.update(Message::Quit), Command::Quit);
    }
}

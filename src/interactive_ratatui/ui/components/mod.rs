pub mod command_list;
pub mod help_dialog;
pub mod list_viewer;
pub mod search_bar;
pub mod stream_log;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod view_layout_test;

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit_prompt() {
        assert!(is_exit_prompt(&Some(EXIT_PROMPT.to_string())));
        assert!(!is_exit_prompt(&Some("Switched to Blog".to_string())));
        assert!(!is_exit_prompt(&Some(String::new())));
        assert!(!is_exit_prompt(&None));
    }
}

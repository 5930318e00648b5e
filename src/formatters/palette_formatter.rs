use colored::Colorize;

use crate::interactive_ratatui::domain::filter::GroupedResults;
use crate::interactive_ratatui::domain::models::{ResultKind, StreamingResult};

/// Plain-text rendering of a grouped command list, one command per line under
/// upper-cased category headers.
pub fn format_grouped(results: &GroupedResults, use_color: bool) -> String {
    if results.is_empty() {
        return "No matching commands.".to_string();
    }

    let mut output = String::new();
    for (category, commands) in results.groups() {
        let header = category.label().to_uppercase();
        if use_color {
            output.push_str(&header.bright_magenta().bold().to_string());
        } else {
            output.push_str(&header);
        }
        output.push('\n');

        for command in commands {
            output.push_str("  ");
            if use_color {
                output.push_str(&command.title.bold().to_string());
            } else {
                output.push_str(&command.title);
            }
            if let Some(description) = &command.description {
                let description = format!("  {description}");
                if use_color {
                    output.push_str(&description.dimmed().to_string());
                } else {
                    output.push_str(&description);
                }
            }
            if let Some(shortcut) = &command.shortcut {
                let shortcut = format!("  [{shortcut}]");
                if use_color {
                    output.push_str(&shortcut.yellow().to_string());
                } else {
                    output.push_str(&shortcut);
                }
            }
            output.push('\n');
        }
    }
    output
}

/// One streamed result as a single line: icon, message and the optional subtitle.
pub fn format_result(result: &StreamingResult, use_color: bool) -> String {
    let head = format!("{} {}", result.kind.icon(), result.message);
    let head = if use_color {
        match result.kind {
            ResultKind::Progress => head.dimmed().to_string(),
            ResultKind::Score => head.yellow().to_string(),
            ResultKind::Issue => head.bright_yellow().bold().to_string(),
            ResultKind::Content => head,
            ResultKind::Success => head.green().bold().to_string(),
            ResultKind::Error => head.red().bold().to_string(),
        }
    } else {
        head
    };

    match result.subtitle() {
        Some(subtitle) if use_color => format!("{head}  {}", subtitle.dimmed()),
        Some(subtitle) => format!("{head}  {subtitle}"),
        None => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive_ratatui::domain::catalogue::Catalogue;
    use crate::interactive_ratatui::domain::filter::CommandFilter;
    use crate::interactive_ratatui::domain::models::{View, payload_keys};

    #[test]
    fn test_format_grouped_plain() {
        let catalogue = Catalogue::new();
        let results = CommandFilter::filter(&catalogue, "dashboard", View::List);

        let output = format_grouped(&results, false);

        assert!(output.starts_with("NAVIGATION\n"));
        assert!(output.contains("  Go to Dashboard"));
        assert!(output.contains("[G D]"));
    }

    #[test]
    fn test_format_grouped_empty() {
        let catalogue = Catalogue::new();
        let results = CommandFilter::filter(&catalogue, "zzzzqq", View::List);
        assert_eq!(format_grouped(&results, false), "No matching commands.");
    }

    #[test]
    fn test_format_result_plain() {
        let result = StreamingResult::new(ResultKind::Content, "Best CRM tools")
            .with(payload_keys::SUBTITLE, "Keyword: best crm");
        assert_eq!(
            format_result(&result, false),
            "✎ Best CRM tools  Keyword: best crm"
        );

        let result = StreamingResult::error("Network error: timed out");
        assert_eq!(format_result(&result, false), "✗ Network error: timed out");
    }
}

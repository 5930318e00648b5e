use crate::interactive_ratatui::domain::catalogue::{CommandAction, PaletteCommand};
use crate::interactive_ratatui::domain::models::{
    ResultKind, Route, StreamingResult, payload_keys,
};

/// Follow-up produced by activating an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Navigate(Route),
    /// Replace the input text and keep editing.
    PrefillInput(String),
    RefreshResources,
    SelectResource(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub effect: Effect,
    /// Whether the palette closes once the effect is applied.
    pub close: bool,
}

pub struct ResultRouter;

impl ResultRouter {
    /// Commands close the palette unless they only prime the input.
    pub fn activate_command(command: &PaletteCommand) -> Activation {
        let effect = match &command.action {
            CommandAction::Navigate(route) => Effect::Navigate(route.clone()),
            CommandAction::PrefillInput(text) => Effect::PrefillInput(text.clone()),
            CommandAction::RefreshResources => Effect::RefreshResources,
            CommandAction::SelectResource(id) => Effect::SelectResource(id.clone()),
        };
        let close = !matches!(effect, Effect::PrefillInput(_));

        Activation { effect, close }
    }

    /// Streamed results route by kind. Display-only kinds and results missing the
    /// payload field their kind needs yield `None`.
    pub fn activate_result(result: &StreamingResult) -> Option<Activation> {
        let route = match result.kind {
            ResultKind::Content => Route::NewArticle {
                keyword: Some(result.payload_str(payload_keys::KEYWORD)?.to_string()),
            },
            ResultKind::Success => {
                Route::Site(result.payload_str(payload_keys::RESOURCE_ID)?.to_string())
            }
            ResultKind::Progress | ResultKind::Score | ResultKind::Issue | ResultKind::Error => {
                return None;
            }
        };

        Some(Activation {
            effect: Effect::Navigate(route),
            close: true,
        })
    }

    /// The aggregate "view all issues" follow-up for a finished run's log, if the run
    /// reported any issues.
    pub fn issues_follow_up(log: &[StreamingResult]) -> Option<Activation> {
        let issue = log.iter().find(|r| r.kind == ResultKind::Issue)?;
        let site_id = issue
            .payload_str(payload_keys::RESOURCE_ID)
            .map(str::to_string);

        Some(Activation {
            effect: Effect::Navigate(Route::Issues { site_id }),
            close: true,
        })
    }
}

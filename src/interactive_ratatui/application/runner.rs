use crate::interactive_ratatui::application::backend::{BackendError, PaletteBackend};
use crate::interactive_ratatui::constants::{MAX_IDEA_RESULTS, MAX_QUICK_WIN_RESULTS};
use crate::interactive_ratatui::domain::models::{
    InputMode, ResultKind, RunEvent, RunRequest, RunUpdate, StreamingResult, payload_keys,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Sends `Finished` for its generation when dropped, so every run reports completion
/// exactly once whichever way it exits.
struct FinishGuard<'a> {
    generation: u64,
    emit: &'a mut dyn FnMut(RunEvent),
    terminal_sent: bool,
}

impl FinishGuard<'_> {
    fn send(&mut self, update: RunUpdate) {
        (self.emit)(RunEvent {
            generation: self.generation,
            update,
        });
    }

    fn result(&mut self, result: StreamingResult) {
        self.terminal_sent |= result.kind.is_terminal();
        self.send(RunUpdate::Result(result));
    }
}

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.send(RunUpdate::Finished);
    }
}

/// Execute one run synchronously, reporting every step through `emit`.
///
/// Backend failures, panics included, end the run with a single `Error` result; nothing
/// is returned to the caller. A `Finished` event always comes last.
pub fn run_operation(
    request: &RunRequest,
    backend: &dyn PaletteBackend,
    idea_count: usize,
    emit: &mut dyn FnMut(RunEvent),
) {
    let mut out = FinishGuard {
        generation: request.generation,
        emit,
        terminal_sent: false,
    };
    let text = request.text.trim();

    tracing::info!(
        generation = request.generation,
        mode = request.mode.label(),
        "Starting run"
    );

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match request.mode {
        InputMode::Url => analyze_url(text, backend, &mut out),
        InputMode::Ai => generate_ideas(text, backend, idea_count, &mut out),
        InputMode::Search => Err(BackendError::Rejected(
            "Nothing to run for a command search".to_string(),
        )),
    }));

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::error!(generation = request.generation, "Run failed: {e}");
            out.result(StreamingResult::error(e.to_string()));
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::error!(generation = request.generation, "Run panicked: {reason}");
            // A panic after the terminal result must not add a second one.
            if !out.terminal_sent {
                out.result(StreamingResult::error(format!(
                    "Operation failed unexpectedly: {reason}"
                )));
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

fn analyze_url(
    url: &str,
    backend: &dyn PaletteBackend,
    out: &mut FinishGuard<'_>,
) -> Result<(), BackendError> {
    out.result(StreamingResult::progress(format!("Connecting to {url}...")));
    out.result(StreamingResult::progress("Crawling pages..."));
    out.result(StreamingResult::progress("Analyzing SEO signals..."));

    let analysis = backend.analyze_resource(url)?;

    for (dimension, score) in &analysis.scores {
        out.result(
            StreamingResult::new(
                ResultKind::Score,
                format!("{}: {}/100", capitalize(dimension), score.round()),
            )
            .with(payload_keys::DIMENSION, dimension.as_str())
            .with(payload_keys::SCORE, *score),
        );
    }

    let issues = analysis.issues;
    if issues.total() > 0 {
        out.result(
            StreamingResult::new(
                ResultKind::Issue,
                format!(
                    "Found {} critical issues and {} warnings",
                    issues.critical, issues.warnings
                ),
            )
            .with(payload_keys::CRITICAL, issues.critical)
            .with(payload_keys::WARNINGS, issues.warnings)
            .with(payload_keys::RESOURCE_ID, analysis.resource_id.as_str()),
        );
    }

    for win in analysis.quick_wins.iter().take(MAX_QUICK_WIN_RESULTS) {
        let mut result = StreamingResult::new(ResultKind::Content, win.title.as_str());
        if let Some(impact) = &win.impact {
            result = result.with(payload_keys::SUBTITLE, format!("Impact: {impact}"));
        }
        out.result(result);
    }

    out.result(
        StreamingResult::new(ResultKind::Success, format!("Analysis complete for {url}"))
            .with(payload_keys::SUBTITLE, "Open the site report")
            .with(payload_keys::RESOURCE_ID, analysis.resource_id.as_str()),
    );

    match backend.list_resources() {
        Ok(resources) => out.send(RunUpdate::ResourcesRefreshed {
            resources,
            select: Some(analysis.resource_id),
        }),
        Err(e) => tracing::warn!("Resource refresh after analysis failed: {e}"),
    }

    Ok(())
}

fn generate_ideas(
    topic: &str,
    backend: &dyn PaletteBackend,
    count: usize,
    out: &mut FinishGuard<'_>,
) -> Result<(), BackendError> {
    out.result(StreamingResult::progress(format!(
        "Generating content ideas for \"{topic}\"..."
    )));

    let ideas = backend.generate_ideas(topic, count)?;
    let shown = ideas.len().min(MAX_IDEA_RESULTS);

    for idea in ideas.into_iter().take(MAX_IDEA_RESULTS) {
        let keyword = idea
            .keyword
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| topic.to_string());
        out.result(
            StreamingResult::new(ResultKind::Content, idea.title)
                .with(payload_keys::SUBTITLE, format!("Keyword: {keyword}"))
                .with(payload_keys::KEYWORD, keyword)
                .with(payload_keys::TOPIC, topic),
        );
    }

    out.result(StreamingResult::new(
        ResultKind::Success,
        format!("Generated {shown} content ideas"),
    ));
    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Runs each submitted operation on its own worker thread.
///
/// A newer run never waits for an older one; events from every run arrive on the
/// receiver handed out by [`OperationRunner::start`], and the consumer drops the ones
/// whose generation is no longer current.
pub struct OperationRunner {
    backend: Arc<dyn PaletteBackend>,
    idea_count: usize,
    event_tx: Sender<RunEvent>,
}

impl OperationRunner {
    pub fn start(backend: Arc<dyn PaletteBackend>, idea_count: usize) -> (Self, Receiver<RunEvent>) {
        let (event_tx, event_rx) = mpsc::channel::<RunEvent>();
        (
            Self {
                backend,
                idea_count,
                event_tx,
            },
            event_rx,
        )
    }

    pub fn submit(&self, request: RunRequest) {
        let backend = Arc::clone(&self.backend);
        let event_tx = self.event_tx.clone();
        let idea_count = self.idea_count;

        thread::spawn(move || {
            let mut emit = |event: RunEvent| {
                // Receiver dropped on shutdown.
                let _ = event_tx.send(event);
            };
            run_operation(&request, backend.as_ref(), idea_count, &mut emit);
        });
    }
}

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};
use omnipalette::{
    Catalogue, CommandFilter, InputMode, InteractivePalette, PaletteConfig, ResultKind, RunRequest,
    RunUpdate, View, classify,
    formatters::{format_grouped, format_result},
    interactive_ratatui::constants::{
        DEFAULT_IDEA_COUNT, DEFAULT_REQUEST_TIMEOUT_SECS, SPINNER_INTERVAL_MS,
    },
    logging::{self, LogTarget},
    run_operation,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "omnipalette",
    version,
    about = "Keyboard-driven command palette for site audits and content ideas",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the analysis API
    #[arg(long, env = "OMNIPALETTE_API_URL", global = true)]
    api_url: Option<String>,

    /// Use the offline demo backend instead of the API
    #[arg(long, env = "OMNIPALETTE_DEMO", global = true)]
    demo: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,

    /// Number of content ideas to request
    #[arg(long, default_value_t = DEFAULT_IDEA_COUNT, global = true)]
    idea_count: usize,

    /// Log file for interactive mode
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print how the palette would interpret the input
    Classify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List palette commands, optionally filtered
    Commands { query: Option<String> },
    /// Run a URL analysis or an idea request and stream the results
    Run {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

impl Cli {
    fn config(&self) -> PaletteConfig {
        let defaults = PaletteConfig::default();
        PaletteConfig {
            api_url: self.api_url.clone(),
            demo: self.demo,
            timeout: Duration::from_secs(self.timeout_secs),
            idea_count: self.idea_count,
            log_file: self.log_file.clone().unwrap_or(defaults.log_file),
            verbose: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match &cli.command {
        None => {
            logging::init_tracing(LogTarget::File(&config.log_file), config.verbose)?;
            let backend = config.build_backend()?;
            tracing::info!(log_file = %config.log_file.display(), "Starting interactive palette");
            let mut palette = InteractivePalette::new(backend, config.idea_count);
            palette.run()
        }
        Some(Commands::Classify { text }) => {
            let text = text.join(" ");
            let mode = classify(&text);
            match mode.hint() {
                Some(hint) => println!("{} ({hint})", mode.label()),
                None => println!("{}", mode.label()),
            }
            Ok(())
        }
        Some(Commands::Commands { query }) => {
            let catalogue = Catalogue::new();
            let results =
                CommandFilter::filter(&catalogue, query.as_deref().unwrap_or(""), View::List);
            print!("{}", format_grouped(&results, !cli.no_color));
            Ok(())
        }
        Some(Commands::Run { text }) => {
            logging::init_tracing(LogTarget::Stderr, config.verbose)?;
            let ok = run_headless(&config, &text.join(" "), !cli.no_color)?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "omnipalette",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

/// Stream one operation to stdout. Returns false if the run ended in an error result.
fn run_headless(config: &PaletteConfig, text: &str, use_color: bool) -> Result<bool> {
    let mode = classify(text);
    if mode == InputMode::Search {
        anyhow::bail!(
            "\"{text}\" is a search query; pass a URL to analyze or a longer topic description"
        );
    }

    let backend = config.build_backend()?;
    let request = RunRequest {
        generation: 1,
        mode,
        text: text.to_string(),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_INTERVAL_MS));

    let mut ok = true;
    let mut emit = |event: omnipalette::RunEvent| match event.update {
        RunUpdate::Result(result) => {
            if result.kind == ResultKind::Progress {
                spinner.set_message(result.message.clone());
            } else {
                if result.kind == ResultKind::Error {
                    ok = false;
                }
                spinner.println(format_result(&result, use_color));
            }
        }
        RunUpdate::ResourcesRefreshed { resources, select } => {
            tracing::debug!(count = resources.len(), selected = ?select, "Sites refreshed");
        }
        RunUpdate::Finished => spinner.finish_and_clear(),
    };
    run_operation(&request, backend.as_ref(), config.idea_count, &mut emit);

    Ok(ok)
}

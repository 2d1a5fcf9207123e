//! CLI entrypoint for Warband Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use warband_application::{QuizOutcome, RunQuizUseCase};
use warband_infrastructure::{
    ConfigLoader, FileConfig, FileResultWriter, JsonQuestionBank, Severity,
};
use warband_presentation::{Cli, ConsoleInput, ConsolePresenter, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps log lines out of the quiz transcript
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    info!("Starting Warband Quiz");

    // === Dependency Injection ===
    let source = JsonQuestionBank::new(&config.quiz.questions_path);
    let sink = FileResultWriter::new(&config.quiz.result_path);
    let input = ConsoleInput::detect();
    info!(
        "Reading answers from {}",
        if input.is_interactive() { "terminal" } else { "piped stdin" }
    );

    // Ctrl+C only reaches us as a signal outside raw mode
    let cancellation = CancellationToken::new();
    let signal_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let mut quiz = RunQuizUseCase::from_source(&source, input, sink)
        .context("Could not start the quiz")?
        .with_behavior(config.quiz.to_behavior())
        .with_cancellation(cancellation);

    let presenter = ConsolePresenter::new(OutputConfig::new(
        config.output.color,
        config.output.typewriter,
        config.output.typewriter_delay_ms,
    ));

    match quiz.execute_with_presenter(&presenter).await? {
        QuizOutcome::Finished { attempts } => info!("Finished after {} attempt(s)", attempts),
        QuizOutcome::Cancelled => info!("Cancelled"),
    }

    Ok(())
}

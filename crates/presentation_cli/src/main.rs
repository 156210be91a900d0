//! SkyLens CLI
//!
//! Render classification results, classify weather images and chat with
//! the weather assistant from the terminal.

#![allow(clippy::print_stdout)]

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use application::{
    ChatBackendPort, ChatTranscript, ClassifierPort, ResultCard, ResultPresenter, UiEvent,
};
use clap::{Parser, Subcommand};
use domain::ClassificationResult;
use infrastructure::{AppConfig, BackendAdapter, init_tracing};
use presentation_cli::{TerminalView, render_card, render_labels};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// SkyLens CLI
#[derive(Parser)]
#[command(name = "skylens-cli")]
#[command(author, version, about = "Weather classification results and assistant chat", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./skylens.toml if present)
    #[arg(short, long, global = true, env = "SKYLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Weather service base URL, overrides the configuration
    #[arg(short, long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a classification result read from a JSON file or stdin
    Present {
        /// JSON file with the classifier output ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Print the card as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Fail on labels outside the known vocabulary instead of
        /// rendering the fallback card
        #[arg(long)]
        strict: bool,
    },

    /// Upload an image to the classifier and render the result
    Classify {
        /// Image file to classify
        image: PathBuf,

        /// Print the card as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat with the weather assistant
    Chat,

    /// Ask the weather assistant a single question
    Ask {
        /// Message to send
        message: String,
    },

    /// List the weather labels the presenter knows about
    Labels,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Load configuration from the explicit file or the default locations
///
/// A broken default config falls back to defaults; the load error is
/// returned so it can be logged once tracing is up.
fn load_config(path: Option<&Path>) -> anyhow::Result<(AppConfig, Option<String>)> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .map(|config| (config, None))
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(match AppConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e.to_string())),
        }),
    }
}

/// Read the classifier JSON from a file, or stdin for `None` / "-"
async fn read_result(file: Option<&Path>) -> anyhow::Result<ClassificationResult> {
    let raw = match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        },
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(ClassificationResult::default());
    }
    serde_json::from_str(trimmed).context("Input is not a classification result")
}

/// Shown when the classifier cannot produce a result
const CLASSIFICATION_FAILED_MESSAGE: &str = "Error in classification. Please try again.";

/// Upload an image, logging the cause when classification fails
async fn classify_image(
    classifier: &dyn ClassifierPort,
    image: Vec<u8>,
    file_name: String,
) -> Option<ClassificationResult> {
    match classifier.classify(image, file_name).await {
        Ok(result) => Some(result),
        Err(e) => {
            warn!(error = %e, "Classification failed");
            None
        },
    }
}

/// Print a card, or a notice when there was nothing to present
fn print_card(card: Option<&ResultCard>, json: bool) -> anyhow::Result<()> {
    match (card, json) {
        (Some(card), true) => println!("{}", serde_json::to_string_pretty(card)?),
        (Some(card), false) => print!("{}", render_card(card)),
        (None, true) => println!("null"),
        (None, false) => println!("No prediction to display."),
    }
    Ok(())
}

/// Read lines from stdin and feed them to the chat widget until EOF or `/quit`
async fn run_chat(chat: &mut ChatTranscript<TerminalView<io::Stdout>>) -> anyhow::Result<()> {
    println!("💬 Ask about the weather. Type /quit or press Ctrl-D to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim() == "/quit" {
            break;
        }

        chat.view_mut().set_input(line);
        chat.submit(&UiEvent::KeyPress(application::SUBMIT_KEY.to_string()))
            .await;
    }

    info!(messages = chat.transcript().len(), "Chat session ended");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, load_error) = load_config(cli.config.as_deref())?;
    let config = config.with_base_url(cli.url.clone());

    init_tracing(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {e}");
    }
    debug!(base_url = %config.backend.base_url, "Configuration loaded");

    let presenter = ResultPresenter::new();

    match cli.command {
        Commands::Present { file, json, strict } => {
            let result = read_result(file.as_deref()).await?;
            let card = if strict {
                presenter.try_present(Some(&result))?
            } else {
                presenter.present(Some(&result))
            };
            print_card(card.as_ref(), json)?;
        },

        Commands::Classify { image, json } => {
            let bytes = tokio::fs::read(&image)
                .await
                .with_context(|| format!("Failed to read {}", image.display()))?;
            let file_name = image
                .file_name()
                .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());

            println!("🔍 Classifying {file_name}...");
            let adapter = BackendAdapter::with_config(config.backend.clone())?;
            let Some(result) = classify_image(&adapter, bytes, file_name).await else {
                anyhow::bail!(CLASSIFICATION_FAILED_MESSAGE);
            };

            print_card(presenter.present(Some(&result)).as_ref(), json)?;
        },

        Commands::Chat => {
            let backend: Arc<dyn ChatBackendPort> =
                Arc::new(BackendAdapter::with_config(config.backend.clone())?);
            let mut chat = ChatTranscript::new(backend, TerminalView::new(io::stdout(), false));
            run_chat(&mut chat).await?;
        },

        Commands::Ask { message } => {
            let backend: Arc<dyn ChatBackendPort> =
                Arc::new(BackendAdapter::with_config(config.backend.clone())?);
            let mut view = TerminalView::new(io::stdout(), true);
            view.set_input(message);
            let mut chat = ChatTranscript::new(backend, view);

            if chat.submit(&UiEvent::SendActivated).await.is_none() {
                println!("Nothing to send.");
            }
        },

        Commands::Labels => {
            print!("{}", render_labels());
        },
    }

    Ok(())
}

//! `wordbook`: look up an English word, with related photos.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use wordbook_core::{play_pronunciation, Config, LookupError, SearchOutcome, Searcher};

mod player;
mod render;
mod transport;

use player::CommandPlayer;
use render::{render, JsonView};
use transport::UreqTransport;

#[derive(Parser)]
#[command(
    name = "wordbook",
    about = "Look up meanings, examples, synonyms and related images for a word",
    version
)]
struct Cli {
    /// Word to look up. Several arguments are joined with spaces.
    #[arg(required = true)]
    word: Vec<String>,

    /// Skip the photo search.
    #[arg(long)]
    no_photos: bool,

    /// Play the pronunciation, if the dictionary has one.
    #[arg(long)]
    play: bool,

    /// Program used to play pronunciation audio. Receives the URL.
    #[arg(long, default_value = "mpv")]
    player: String,

    /// Override the dictionary API base URL.
    #[arg(long)]
    dictionary_url: Option<String>,

    /// Override the photo API base URL.
    #[arg(long)]
    photos_url: Option<String>,

    /// Per-request timeout.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    // Loaded before parsing so the environment is complete; reported once
    // logging is up.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(message) = dotenv_warning(&dotenv) {
        tracing::warn!("{message}");
    }

    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(url) = cli.dictionary_url {
        config.dictionary_url = url;
    }
    if let Some(url) = cli.photos_url {
        config.photos_url = url;
    }
    tracing::debug!(
        dictionary = %config.dictionary_url,
        photos = config.photos_enabled(),
        "configuration loaded"
    );

    let transport = UreqTransport::new(Duration::from_secs(cli.timeout_secs));
    let mut searcher = Searcher::from_config(transport, &config);
    if cli.no_photos {
        searcher = searcher.without_photos();
    }

    let query = cli.word.join(" ");
    let outcome = match searcher.search(&query) {
        Ok(outcome) => outcome,
        Err(LookupError::EmptyQuery) => {
            eprintln!("Please enter a word to search for.");
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err.into()),
    };

    let (result, photos) = match outcome {
        SearchOutcome::Found { result, photos } => (result, photos),
        failed @ SearchOutcome::Failed(_) => {
            if let Some(message) = failed.user_message() {
                eprintln!("{message}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        let view = JsonView {
            result: &result,
            photos: &photos,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&result, &photos));
    }

    if cli.play {
        let player = CommandPlayer::new(&cli.player);
        match play_pronunciation(&player, &result) {
            Ok(true) => {}
            Ok(false) => eprintln!("No pronunciation audio for \"{}\".", result.word),
            Err(err) => tracing::warn!(error = %err, player = %cli.player, "audio playback failed"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// A missing `.env` file is fine; real environment variables still apply.
/// Anything else (a bad line, an unreadable file) deserves a warning.
fn dotenv_warning(result: &Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Ok(_) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(format!("ignoring .env file: {err}")),
    }
}

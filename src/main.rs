use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use weatherbot::{
    CurrentRecord, ForecastRecord, WeatherAssistant, WeatherBotConfig, WeatherBotError,
    WeatherSnapshot, answer_from_text_summary, classify, logging,
};

/// Answer weather questions from forecast data
#[derive(Parser)]
#[command(name = "weatherbot")]
#[command(author, version, about = "Answer natural-language weather questions", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer from a text weather summary
    Ask {
        /// File holding the summary
        #[arg(short, long)]
        summary: PathBuf,

        question: String,
    },

    /// Answer from current and forecast JSON records
    Records {
        /// Current weather JSON file
        #[arg(long, requires = "forecast")]
        current: Option<PathBuf>,

        /// 5-day forecast JSON file
        #[arg(long, requires = "current")]
        forecast: Option<PathBuf>,

        /// City the records belong to (defaults to the configured city)
        #[arg(long)]
        city: Option<String>,

        question: String,
    },

    /// Show which category a question falls into
    Intent { question: String },
}

fn read_summary(path: &Path) -> weatherbot::Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn read_record<T: DeserializeOwned>(path: &Path) -> weatherbot::Result<T> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn require_question(question: &str) -> weatherbot::Result<&str> {
    if question.trim().is_empty() {
        return Err(WeatherBotError::validation("Question cannot be empty"));
    }
    Ok(question)
}

fn run(cli: Cli, config: &WeatherBotConfig) -> weatherbot::Result<String> {
    match cli.command {
        Commands::Ask { summary, question } => {
            let question = require_question(&question)?;
            debug!(path = %summary.display(), "Reading summary");
            let summary = read_summary(&summary)?;
            Ok(answer_from_text_summary(question, &summary))
        }
        Commands::Records {
            current,
            forecast,
            city,
            question,
        } => {
            let question = require_question(&question)?;
            let city = city.unwrap_or_else(|| config.assistant.default_city.clone());
            let snapshot = match (current, forecast) {
                (Some(current), Some(forecast)) => Some(WeatherSnapshot::new(
                    read_record::<CurrentRecord>(&current)?,
                    read_record::<ForecastRecord>(&forecast)?,
                )),
                _ => None,
            };

            let reply = WeatherAssistant::new(&config.assistant).ask_city(
                &city,
                snapshot.as_ref(),
                question,
            );
            if reply.success {
                Ok(reply.response)
            } else {
                Err(WeatherBotError::general(reply.response))
            }
        }
        Commands::Intent { question } => Ok(classify(&question).to_string()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match WeatherBotConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(&config.logging, cli.verbose) {
        eprintln!("{err:#}");
    }

    match run(cli, &config) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use unistyle::clipboard::{RichClipboard, SystemClipboard, TextColor};
use unistyle::config::{load_config_from, AppConfig};
use unistyle::gemini::SuggestionTask;
use unistyle::styles::{catalog, grapheme_len, preview_all};

/// Unicode look-alike text styles for social media
#[derive(Parser)]
#[command(name = "unistyle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at INFO level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log at DEBUG level
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (TOML, or JSON for other extensions)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available styles in display order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert text with one style
    Convert {
        /// Style id (defaults to the configured default style)
        #[arg(short, long)]
        style: Option<String>,

        /// Text to convert; read from stdin when omitted
        text: Option<String>,
    },
    /// Show text rendered in every style
    Preview {
        /// Text to render; the configured placeholder is used when omitted
        text: Option<String>,
    },
    /// Report which alphabet characters each style covers
    Coverage,
    /// Convert text and copy it to the clipboard
    Copy {
        #[arg(short, long)]
        style: Option<String>,

        /// Text color, `#RRGGBB`; anything but white copies rich text too
        #[arg(short, long)]
        color: Option<String>,

        text: Option<String>,
    },
    /// Ask the generative-text service for a rewrite or suggestions
    Suggest {
        /// rewrite, title, desc or tags
        #[arg(short, long, default_value = "rewrite")]
        task: String,

        text: Option<String>,
    },
}

fn read_input(text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let catalog = catalog();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List { json } => {
            let styles = catalog.list();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&styles)?)?;
            } else {
                for style in styles {
                    writeln!(out, "{:<14} {:<14} {}", style.id, style.name, style.preview)?;
                }
            }
        }
        Commands::Convert { style, text } => {
            let style = style.unwrap_or(config.default_style);
            let input = read_input(text)?;
            writeln!(out, "{}", catalog.convert(&input, &style)?)?;
        }
        Commands::Preview { text } => {
            let input = read_input(text)?;
            for (summary, converted) in preview_all(catalog, &input, &config.preview_placeholder) {
                writeln!(out, "{:<14} {}", summary.id, converted)?;
            }
        }
        Commands::Coverage => {
            for row in catalog.coverage_report() {
                let missing: String = row.missing.iter().collect();
                writeln!(out, "{:<14} {:>2}/62 {}", row.id, row.covered, missing)?;
            }
        }
        Commands::Copy { style, color, text } => {
            let style = style.unwrap_or(config.default_style);
            let color = match color {
                Some(c) => TextColor::parse(&c)?,
                None => config.preview_color,
            };
            let converted = catalog.convert(&read_input(text)?, &style)?;
            let mut clipboard = RichClipboard::new(SystemClipboard::new()?);
            let outcome = clipboard.copy(&converted, color)?;
            tracing::info!("Copy outcome: {:?}", outcome);
            writeln!(out, "Copied {} characters", grapheme_len(&converted))?;
        }
        Commands::Suggest { task, text } => {
            let task: SuggestionTask = task.parse()?;
            let service = config.suggestion_service();
            let answer = service.suggest(&read_input(text)?, task).await;
            writeln!(out, "{}", answer)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("Starting unistyle version {}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => match AppConfig::config_path() {
            Some(path) => load_config_from(&path)?,
            None => AppConfig::default(),
        },
    };

    run(cli, config).await
}

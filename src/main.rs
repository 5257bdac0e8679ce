// Event Palette
// Main entry point

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use event_palette::models::color::ExtractedColor;
use event_palette::services::config::AppConfig;
use event_palette::services::logo::{fetch_logo_pixels, HttpLogoFetcher};
use event_palette::services::palette::{extract_palette, to_pastel};
use event_palette::services::pipeline::EventPipeline;
use event_palette::services::source::{AirtableStore, JsonFileStore, RecordStore};

#[derive(Parser)]
#[command(name = "event-palette", version, about = "List events with logo-derived colors")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read rows from an exported JSON file instead of the remote table
    #[arg(long, global = true)]
    rows: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Upcoming and active events
    Upcoming,
    /// Every non-upcoming event whose logo produced colors
    Colorized,
    /// Colorized events that are complete
    Recent,
    /// All three listings from one read
    All,
    /// Extract the palette of a single logo
    Logo { url: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let fetcher = HttpLogoFetcher::new(
        Duration::from_secs(config.images.timeout_secs),
        config.images.max_bytes,
    )?;

    log::info!("Starting event-palette");

    if let Command::Logo { url } = &cli.command {
        return inspect_logo(&fetcher, &config, url);
    }

    match &cli.rows {
        Some(path) => run_listing(JsonFileStore::new(path), fetcher, &config, &cli.command),
        None => {
            let api_key = config.source.api_key()?;
            let store = AirtableStore::new(&config.source, api_key)?;
            run_listing(store, fetcher, &config, &cli.command)
        }
    }
}

fn run_listing<S: RecordStore>(
    store: S,
    fetcher: HttpLogoFetcher,
    config: &AppConfig,
    command: &Command,
) -> Result<()> {
    let pipeline = EventPipeline::from_config(store, fetcher, config);

    match command {
        Command::Upcoming => print_json(&pipeline.list_upcoming_events()?),
        Command::Colorized => print_json(&pipeline.list_colorized_events()?),
        Command::Recent => print_json(&pipeline.list_recent_events()?),
        Command::All => print_json(&pipeline.run()?),
        Command::Logo { .. } => Ok(()),
    }
}

#[derive(Serialize)]
struct LogoSwatch {
    color: ExtractedColor,
    pastel: ExtractedColor,
}

fn inspect_logo(fetcher: &HttpLogoFetcher, config: &AppConfig, url: &str) -> Result<()> {
    let image = fetch_logo_pixels(fetcher, Some(url), &config.images.default_logo_url)
        .with_context(|| format!("Failed to load logo {}", url))?;
    let colors = extract_palette(
        &image.pixels,
        image.width,
        image.height,
        &config.palette.to_options(),
    )?;

    let swatches: Vec<LogoSwatch> = colors
        .into_iter()
        .map(|color| LogoSwatch {
            pastel: to_pastel(&color),
            color,
        })
        .collect();

    print_json(&swatches)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

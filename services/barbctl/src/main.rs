//! Wind barb symbol tool.
//!
//! Resolves `windbarbs://` locators to glyphs, lists a symbol set's cached
//! glyphs and rasterizes single glyphs to PNG for preview.

mod commands;
mod config;
mod output;
mod raster;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use config::RasterConfig;
use output::OutputFormat;
use windbarbs::{Feature, WindBarbFactory, DEFAULT_SYMBOL_SET};

#[derive(Parser, Debug)]
#[command(name = "barbctl")]
#[command(about = "Resolve, list and preview wind barb symbols")]
struct Args {
    /// Log level
    #[arg(long, env = "BARBCTL_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve locators and print their shapes
    Resolve {
        /// Locators, optionally with ${attribute} placeholders
        #[arg(required = true)]
        locators: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Wkt)]
        format: OutputFormat,

        /// Feature attribute used to fill placeholders (key=value)
        #[arg(long = "attr", value_parser = commands::parse_attr)]
        attrs: Vec<(String, String)>,
    },

    /// List every cached glyph of a symbol set
    Table {
        /// Symbol set name
        #[arg(long, default_value = DEFAULT_SYMBOL_SET)]
        symbol_set: String,
    },

    /// Rasterize a glyph to PNG
    Render {
        /// Locator to draw
        locator: String,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Direction the wind blows from, degrees clockwise from north
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        direction: f32,

        /// Raster settings file (YAML)
        #[arg(short, long, env = "BARBCTL_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    debug!(command = ?args.command, "Starting barbctl");

    let factory = WindBarbFactory::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Resolve {
            locators,
            format,
            attrs,
        } => {
            let feature: Feature = attrs.into_iter().collect();
            commands::resolve(&factory, &locators, &feature, format, &mut out)?;
        }
        Command::Table { symbol_set } => {
            commands::table(&factory, &symbol_set, &mut out)?;
        }
        Command::Render {
            locator,
            output,
            direction,
            config,
        } => {
            let config = match config {
                Some(path) => RasterConfig::load(&path)?,
                None => RasterConfig::default(),
            };
            commands::render(&factory, &locator, direction, &config, &output)?;
        }
    }

    Ok(())
}

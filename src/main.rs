use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use r3bl_simple_logger::{Config, SimpleLogger};

use qrstyle::helper::save_png;
use qrstyle::render::MAX_SCALE;
use qrstyle::{render_with, server, RenderConfig, Style};

/// Generate QR codes from URLs
#[derive(Parser, Debug)]
#[command(name = "qrstyle", version, about)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a QR code PNG from a URL
    Generate {
        /// URL to generate QR code for
        #[arg(long)]
        url: String,

        /// Output file path
        #[arg(short, long, default_value = "qrcode.png")]
        output: PathBuf,

        /// Hex color for QR code modules (e.g. #ffffff)
        #[arg(short, long, default_value = "#ffffff")]
        color: String,

        /// Module style: square, rounded or triangle
        #[arg(short, long, default_value = "square")]
        style: String,

        /// Pixel multiplier per module unit (1 to 16)
        #[arg(long, default_value_t = qrstyle::render::DEFAULT_SCALE,
              value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: u32,
    },
    /// Start a web server to generate QR codes via a simple HTML form
    Server {
        /// Address to listen on
        #[arg(long, default_value = server::DEFAULT_ADDR)]
        addr: String,
    },
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn style_or_default(name: &str) -> Style {
    name.parse().unwrap_or_else(|e| {
        warn!("{}, falling back to {}", e, Style::default());
        Style::default()
    })
}

fn generate(url: &str, output: &Path, color: &str, style: &str, scale: u32) -> anyhow::Result<()> {
    let config = RenderConfig::default()
        .with_scale(scale)
        .with_style(style_or_default(style));
    let img = render_with(url, color, &config)?;
    save_png(&img, output).with_context(|| format!("failed to write {}", output.display()))?;
    info!("QR code generated successfully: {}", output.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate { url, output, color, style, scale } => {
            generate(&url, &output, &color, &style, scale)
        }
        Command::Server { addr } => Ok(server::serve(&addr)?),
    }
}

/// Installs the global logger, reporting on stderr if one is already set.
fn init_logging(verbose: u8) -> bool {
    match SimpleLogger::init(level(verbose), Config::default()) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            false
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

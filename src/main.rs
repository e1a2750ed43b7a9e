//! Phasetex command line: render the recurrence texture of a time series.
//!
//! ```bash
//! phasetex --cosine 200 --period 25 -m 3 -t 2 -o out/cosine.png
//! phasetex --input samples.txt --scale 2
//! phasetex --input firmware.bin --bytes -m 4
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use phasetex::series::{cosine_wave, load_series, SeriesFormat};
use phasetex::viz::save_texture;
use phasetex::{Config, RecurrenceTexture, Result, TextureError, TextureSummary};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "phasetex", version)]
#[command(about = "Render the recurrence texture of a time series as an image")]
struct Args {
    /// Series file (numbers separated by whitespace or commas).
    #[arg(short, long, conflicts_with = "cosine", required_unless_present = "cosine")]
    input: Option<PathBuf>,

    /// Treat the input file as raw bytes, one sample per byte.
    #[arg(long, requires = "input")]
    bytes: bool,

    /// Generate a cosine wave of this many samples instead of reading a file.
    #[arg(long, value_name = "LEN")]
    cosine: Option<usize>,

    /// Period of the generated cosine wave, in samples.
    #[arg(long, default_value_t = 20.0)]
    period: f64,

    /// Embedding dimension (overrides the config file).
    #[arg(short = 'm', long)]
    dimension: Option<usize>,

    /// Embedding delay (overrides the config file).
    #[arg(short = 't', long)]
    delay: Option<usize>,

    /// Pixel block size per texture cell (overrides the config file).
    #[arg(long)]
    scale: Option<u32>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image path; format follows the extension.
    #[arg(short, long, default_value = "texture.png")]
    output: PathBuf,

    /// Enable debug logging (ignored when RUST_LOG is set).
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if let Some(ref path) = args.config {
        info!("Loading configuration from {}", path.display());
        Config::from_file(path)?
    } else {
        Config::default()
    };

    if let Some(dimension) = args.dimension {
        config.embedding.dimension = dimension;
    }
    if let Some(delay) = args.delay {
        config.embedding.delay = delay;
    }
    if let Some(scale) = args.scale {
        config.render.scale = scale;
    }

    // Overrides can reintroduce zeros
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let series = match (&args.input, args.cosine) {
        (Some(path), _) => {
            let format = if args.bytes {
                SeriesFormat::Bytes
            } else {
                SeriesFormat::Text
            };
            load_series(path, format)?
        }
        (None, Some(len)) => {
            if !(args.period.is_finite() && args.period > 0.0) {
                return Err(TextureError::Config(format!(
                    "period must be a positive number, got {}",
                    args.period
                )));
            }
            cosine_wave(len, args.period)
        }
        (None, None) => return Err(TextureError::EmptySeries),
    };

    info!(
        samples = series.len(),
        dimension = config.embedding.dimension,
        delay = config.embedding.delay,
        "Computing recurrence texture"
    );

    let run = RecurrenceTexture::compute(&series, config.embedding)?;
    let summary = TextureSummary::from_texture(&run.texture);

    info!(
        embedding_rows = run.embedding.rows(),
        texture_size = run.texture.rows(),
        entropy = summary.entropy,
        dominant_code = ?summary.dominant_code,
        "Texture ready"
    );

    save_texture(&run.texture, &args.output, config.render.scale)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

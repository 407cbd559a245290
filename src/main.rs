use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neuquant::{Background, Quantizer};
use screencast_gif::models::{ConfigOverrides, EncodeConfig, CONFIG_ENV};
use screencast_gif::services::{quantize_png, GifPipeline};
use screencast_gif::EncodeError;

#[derive(Parser)]
#[command(name = "screencast-gif")]
#[command(about = "Turn PNG frame sequences into animated GIFs with NeuQuant palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode PNG frames (files or directories) into an animated GIF
    Encode {
        /// Frame files or directories of PNGs, in playback order
        frames: Vec<PathBuf>,

        /// Output GIF file path
        #[arg(short, long)]
        output: PathBuf,

        /// YAML config file (defaults to $SCREENCAST_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sampling factor: 1 is slowest and best, 30 fastest
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=30))]
        quality: Option<u8>,

        /// Frame delay in milliseconds
        #[arg(short, long)]
        delay: Option<u32>,

        /// Delay of the final frame in milliseconds
        #[arg(long)]
        last_delay: Option<u32>,

        /// Background for transparent pixels as hex RGB (e.g. "#FFFFFF")
        #[arg(short, long)]
        background: Option<String>,

        /// Number of repetitions, 0 loops forever
        #[arg(long)]
        loop_count: Option<u16>,
    },
    /// Reduce a single PNG to an indexed 256-color PNG
    Quantize {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Sampling factor: 1 is slowest and best, 30 fastest
        #[arg(short, long, default_value_t = neuquant::DEFAULT_QUALITY,
              value_parser = clap::value_parser!(u8).range(1..=30))]
        quality: u8,

        /// Background for transparent pixels as hex RGB
        #[arg(short, long, default_value = "#FFFFFF")]
        background: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Encode {
            frames,
            output,
            config,
            quality,
            delay,
            last_delay,
            background,
            loop_count,
        }) => {
            init_logging();
            let overrides = ConfigOverrides {
                quality,
                background,
                delay_ms: delay,
                last_delay_ms: last_delay,
                loop_count,
                frames,
            };
            run_encode_command(config, overrides, &output)
        }
        Some(Commands::Quantize {
            input,
            output,
            quality,
            background,
        }) => {
            init_logging();
            run_quantize_command(&input, &output, quality, &background)
        }
        None => {
            run_usage_command();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screencast_gif=info,neuquant=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_encode_command(
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    output: &Path,
) -> anyhow::Result<()> {
    let mut config = EncodeConfig::load(config_path.as_deref())?;
    config.apply(overrides);

    let frames = config.resolve_frames();
    if frames.is_empty() {
        return Err(EncodeError::NoFrames.into());
    }

    let pipeline = GifPipeline::from_config(&config)?;
    let summary = pipeline
        .encode_to_file(&frames, output)
        .with_context(|| format!("Failed to encode {}", output.display()))?;

    println!(
        "Wrote {} ({} frames, {}x{}, {} bytes)",
        output.display(),
        summary.frames,
        summary.width,
        summary.height,
        summary.bytes
    );
    Ok(())
}

fn run_quantize_command(
    input: &Path,
    output: &Path,
    quality: u8,
    background: &str,
) -> anyhow::Result<()> {
    let background: Background = background
        .parse()
        .with_context(|| format!("Invalid background color: {background}"))?;
    let quantizer = Quantizer::new().quality(quality).background(background);

    quantize_png(&quantizer, input, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn run_usage_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("screencast-gif v{VERSION}");
    println!("Animated GIFs from PNG frames, quantized with NeuQuant\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV)
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG          = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("screencast_gif=info (default)")
    );

    println!("\nCommands:");
    println!("  encode    FRAMES... -o OUT.gif   Encode PNG frames into an animated GIF");
    println!("  quantize  INPUT -o OUT.png       Reduce a PNG to 256 colors");
    println!("\nRun 'screencast-gif <command> --help' for options.");
}

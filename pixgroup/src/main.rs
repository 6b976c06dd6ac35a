//! pixgroup - Run a drawing script and write the grouped canvas as an image

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use pixgroup::engine;
use pixgroup::io::{ImageFormat, write_image};
use pixgroup::logging::{LoggingConfig, init_logging};
use pixgroup::script::{parse_script, run_commands};
use pixgroup::{CanvasConfig, GroupingStore};

/// Render a pixel-grouping drawing script to PNG or PPM
#[derive(Parser)]
#[command(name = "pixgroup")]
#[command(about = "Render a pixel-grouping drawing script to PNG or PPM")]
#[command(version)]
struct Cli {
    /// Script file with one drawing command per line
    script: PathBuf,

    /// Output image; the extension (.png, .ppm) selects the format
    #[arg(short, long)]
    output: PathBuf,

    /// TOML file with canvas settings (width, height, palette, brightness, normalize)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long)]
    height: Option<u32>,

    /// Target color intensity for normalization
    #[arg(long)]
    brightness: Option<u8>,

    /// Normalize group colors to the configured brightness
    #[arg(long)]
    normalize: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        default_level: if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        ..LoggingConfig::default()
    });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let format = ImageFormat::from_path(&cli.output).ok_or_else(|| {
        anyhow!(
            "cannot infer image format from {} (use .png or .ppm)",
            cli.output.display()
        )
    })?;

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    let commands =
        parse_script(&source).with_context(|| format!("parsing {}", cli.script.display()))?;

    let mut store = GroupingStore::new(config).context("creating canvas")?;
    let summary = run_commands(&mut store, &commands);
    if summary.failed > 0 {
        log::warn!("{} command(s) were skipped", summary.failed);
    }

    let frame = engine::render(&store);
    write_image(&frame, &cli.output, format)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    log::info!(
        "wrote {} ({} group(s), {} px)",
        cli.output.display(),
        store.group_count(),
        store.pixel_count()
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<CanvasConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => CanvasConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(brightness) = cli.brightness {
        config.brightness = brightness;
    }
    if cli.normalize {
        config.normalize = true;
    }
    config.validate().context("invalid canvas configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<CanvasConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

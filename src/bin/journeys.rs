use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "journeys", version)]
/// Composite journey images from `src/journey.json` and the `layers/` tree.
struct Cli {
    /// Working directory holding `src/journey.json`, `layers/` and `outputs/`.
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Output canvas width in pixels.
    #[arg(long, default_value_t = journeys::WIDTH)]
    width: u32,

    /// Output canvas height in pixels.
    #[arg(long, default_value_t = journeys::HEIGHT)]
    height: u32,

    /// Order in which an item's layers are stacked.
    #[arg(long, value_enum, default_value_t = OrderChoice::Manifest)]
    layer_order: OrderChoice,

    /// Worker threads for per-item layer loads.
    #[arg(long)]
    threads: Option<usize>,

    /// Keep decoded layers in memory across items.
    #[arg(long, default_value_t = false)]
    cache_layers: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    /// Attribute order as listed in the manifest.
    Manifest,
    /// Declared layer priority (SKY at the bottom, OVERLAYS on top).
    Priority,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let workdir = match cli.workdir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };

    let mut config = journeys::BatchConfig::from_workdir(&workdir);
    config.canvas = journeys::Canvas::new(cli.width, cli.height)?;
    config.layer_order = match cli.layer_order {
        OrderChoice::Manifest => journeys::LayerOrder::Manifest,
        OrderChoice::Priority => journeys::LayerOrder::Priority,
    };
    config.threads = cli.threads;
    config.cache_layers = cli.cache_layers;

    let driver = journeys::BatchDriver::new(config)?;
    let report = driver
        .run()
        .with_context(|| format!("journey batch in '{}'", workdir.display()))?;

    eprintln!(
        "processed {} item(s): {} saved, {} failed",
        report.total(),
        report.saved.len(),
        report.failed.len()
    );
    Ok(())
}

//! Bänger - Because your `banner` deserves to be a `bänger`!
//!
//! ```text
//! ▛▀▖▞▀▖▙ ▌▞▀▖▛▀▘▛▀▖
//! ▙▄▘▙▄▌▌▚▌▌▄▖▙▄ ▙▄▘
//! ▌ ▌▌ ▌▌ ▌▌ ▌▌  ▌▚
//! ▀▀ ▘ ▘▘ ▘▝▀ ▀▀▘▘ ▘
//! ```

use anyhow::Context;
use banger_config::Config;
use banger_core::{list_fonts, registry, BannerGenerator, BannerOptions, Font, MissingCharPolicy};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Bänger - render text as large ASCII-art banners
#[derive(Parser, Debug)]
#[command(name = "banger")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render; multiple words are joined with single spaces
    #[arg(required_unless_present = "list_fonts")]
    text: Vec<String>,

    /// Font to use
    #[arg(short = 'f', long)]
    font: Option<String>,

    /// Columns between characters (defaults to the font's spacing)
    #[arg(short = 's', long)]
    spacing: Option<usize>,

    /// Fail on characters the font cannot draw instead of skipping them
    #[arg(long)]
    strict: bool,

    /// List available fonts and exit
    #[arg(short = 'l', long)]
    list_fonts: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// Command line values take precedence over the configuration
    fn banner_options(&self, config: &Config) -> BannerOptions {
        let mut options = config.banner_options();
        if self.spacing.is_some() {
            options.spacing = self.spacing;
        }
        if self.strict {
            options.missing = MissingCharPolicy::Strict;
        }
        options
    }

    fn font_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.font.as_deref().unwrap_or(&config.font)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the banner on stdout stays clean
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("banger={log_level},banger_core={log_level},banger_config={log_level}")
            }),
        ))
        .init();

    tracing::debug!("Starting banger v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &config, &mut out)
}

/// A path given with `--config` must exist; the default location is optional
fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

fn run(args: &Args, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    if args.list_fonts {
        return print_fonts(out);
    }

    let font_name = args.font_name(config);
    let font = registry().create(font_name).with_context(|| {
        format!(
            "Cannot use font '{}' (available: {})",
            font_name,
            list_fonts().join(", ")
        )
    })?;

    let text = args.text.join(" ");
    tracing::debug!("Rendering {:?} with font '{}'", text, font.name());

    let rows = BannerGenerator::with_options(args.banner_options(config))
        .render(&text, font.as_ref())?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

fn print_fonts(out: &mut impl Write) -> anyhow::Result<()> {
    for name in list_fonts() {
        let font = registry().create(&name)?;
        let meta = font.metadata();
        writeln!(out, "{:<10} height {:>2}  {}", meta.name, meta.height, meta.description)?;
    }
    Ok(())
}

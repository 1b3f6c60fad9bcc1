use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indexed_shade::{DarknessLevel, ShadeSession};
use shadeview::palette_config;
use shadeview::viewer;

#[derive(Parser)]
#[command(name = "shadeview")]
#[command(about = "Indexed-palette image preview with darkness and underwater lighting")]
struct Cli {
    /// Image to load at startup (24-bit RGB); can also be dropped onto the window
    image: Option<PathBuf>,

    /// YAML palette file (256 hex colors); falls back to the built-in table
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Initial darkness level (0 = fully lit, 8 = fully dark)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=8))]
    darkness: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadeview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let palette = palette_config::load_palette(cli.palette.as_deref());
    let mut session = ShadeSession::new(palette);
    session.set_darkness(DarknessLevel::new(cli.darkness)?);

    viewer::run(session, cli.image)
}

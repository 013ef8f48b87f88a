use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use portfolio::images::{optimize, ImageConfig, Outcome};
use tracing_subscriber::EnvFilter;

/// Derive the avatar and the social preview banner from the profile photo
#[derive(Parser)]
#[command(name = "optimize-images")]
#[command(version)]
struct Cli {
    /// Profile photo; nothing is done when it doesn't exist
    #[arg(short, long, default_value = "public/image.png")]
    input: PathBuf,

    /// Where to write the 400x400 WebP avatar
    #[arg(long, default_value = "public/image.webp")]
    avatar: PathBuf,

    /// Where to write the 1200x630 PNG banner
    #[arg(long, default_value = "public/og-image.png")]
    banner: PathBuf,

    /// Only produce the avatar
    #[arg(long)]
    no_banner: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("error,optimize_images=info,portfolio=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ImageConfig {
        input: cli.input,
        avatar: cli.avatar,
        banner: (!cli.no_banner).then_some(cli.banner),
    };

    let outcome = optimize(&config)
        .with_context(|| format!("failed to optimize {}", config.input.display()))?;

    if let Outcome::Written { avatar, banner } = outcome {
        tracing::info!("avatar written to {}", avatar.display());
        if let Some(banner) = banner {
            tracing::info!("banner written to {}", banner.display());
        }
    }

    Ok(())
}

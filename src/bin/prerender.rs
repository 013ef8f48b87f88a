use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use portfolio::prerender::{
    prerender, LeptosHost, PrerenderConfig, DEFAULT_CSS_PATTERN, DEFAULT_TEMPLATE,
};
use tracing_subscriber::EnvFilter;

/// Server-render the page into a built index.html so its content shows up
/// in the page source.
#[derive(Parser)]
#[command(name = "prerender")]
#[command(version)]
struct Cli {
    /// Built page containing an empty `<div id="root"></div>`
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Regex whose first capture group is the stylesheet href to preload
    #[arg(long, default_value = DEFAULT_CSS_PATTERN)]
    css_pattern: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("error,prerender=info,portfolio=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = PrerenderConfig {
        template: cli.template,
        css_pattern: cli.css_pattern,
    };
    let mut host = LeptosHost::new();

    match prerender(&mut host, &config) {
        Ok(()) => {
            tracing::info!(
                "pre-render complete, content is now visible in the source of {}",
                config.template.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("pre-render failed: {e}");
            ExitCode::FAILURE
        }
    }
}

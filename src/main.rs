//! Folio - A single-page portfolio generator.

mod build;
mod check;
mod cli;
mod config;
mod dom;
mod layout;
mod logger;
mod page;
mod serve;
mod style;
mod utils;
mod watch;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Build { .. } => build_site(&cfg()).map(|_| ()),
        Commands::Serve { .. } => {
            build_site(&cfg())?;
            serve_site()
        }
        Commands::Check {
            viewport_min,
            viewport_max,
        } => run_check(*viewport_min, *viewport_max),
    }
}

/// Compose the page and fail on any invariant violation.
fn run_check(viewport_min: u32, viewport_max: u32) -> Result<()> {
    if viewport_min > viewport_max {
        bail!("--viewport-min ({viewport_min}) exceeds --viewport-max ({viewport_max})");
    }

    let errors = check::check_all(&page::compose_body(), viewport_min..=viewport_max);
    if errors.is_empty() {
        log!("check"; "ok, viewports {}..={}px", viewport_min, viewport_max);
        return Ok(());
    }

    for error in &errors {
        log!("error"; "{}", error);
    }
    bail!("{} check(s) failed", errors.len())
}

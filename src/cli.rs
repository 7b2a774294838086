//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio single-page portfolio generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Assets directory path (relative to project root)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Embed the stylesheet in the page instead of linking it
    #[arg(long = "inline-css", action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub inline_css: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the page into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Serve the site. Rebuild on asset or config change automatically
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,

        /// enable watch
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        watch: Option<bool>,
    },

    /// Compose the page and verify its structural and layout invariants
    Check {
        /// Narrowest viewport width to check, in px
        #[arg(long = "viewport-min", default_value_t = 320)]
        viewport_min: u32,

        /// Widest viewport width to check, in px
        #[arg(long = "viewport-max", default_value_t = 2560)]
        viewport_max: u32,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }

    /// Build arguments shared by `build` and `serve`.
    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } | Commands::Serve { build_args, .. } => {
                Some(build_args)
            }
            Commands::Check { .. } => None,
        }
    }
}

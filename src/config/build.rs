//! `[build]` section configuration.
//!
//! Output paths, minification and stylesheet placement.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"   # Output directory
/// assets = "assets"   # Copied verbatim into the output
/// minify = true       # Minify HTML
///
/// [build.css]
/// inline = false      # Link a fingerprinted stylesheet
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets (logo, documents) copied into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Stylesheet placement.
    #[serde(default)]
    pub css: CssConfig,
}

/// `[build.css]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct CssConfig {
    /// Embed the stylesheet in a `<style>` element instead of linking
    /// `style-<hash>.css`.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub inline: bool,
}

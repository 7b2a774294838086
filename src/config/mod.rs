//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[base]`      | Document metadata (title, description, language) |
//! | `[build]`     | Output and assets paths, minify, clean           |
//! | `[build.css]` | Inline or fingerprinted external stylesheet      |
//! | `[serve]`     | Preview server (port, interface, watch)          |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Sabrina Button"
//! language = "en"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [serve]
//! port = 8420
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use error::ConfigError;
pub use handle::{cfg, init_config, reload_config};

use base::BaseConfig;
use build::BuildConfig;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Document metadata
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load, apply CLI overrides and validate.
    ///
    /// A missing config file is not an error: every page string is literal, so
    /// defaults produce a complete site.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference, if the config was loaded from the command line.
    pub fn get_cli(&self) -> Option<&'static Cli> {
        self.cli
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root, &cli.config);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.css.inline, args.inline_css.as_ref());
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.base.language.trim().is_empty() {
            bail!(ConfigError::Validation("[base.language] must not be empty".into()));
        }

        if self.build.output.as_os_str().is_empty() {
            bail!(ConfigError::Validation("[build.output] must not be empty".into()));
        }

        // Output may sit inside assets; `clean` must never reach the assets.
        if self.build.assets.starts_with(&self.build.output) {
            bail!(ConfigError::Validation(
                "[build.assets] must not be the same as or inside [build.output]".into()
            ));
        }

        if self.serve.interface.parse::<IpAddr>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[serve.interface] `{}` is not a valid IP address",
                self.serve.interface
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "Portfolio"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "Portfolio");
        assert_eq!(config.base.language, "en");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str(
            r#"
            [base
            title = "Portfolio"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base.title, "Sabrina Button");
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.serve.port, 8420);
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [deploy]
            provider = "github"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let mut config = SiteConfig::default();
        config.base.language = " ".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.language]"));
    }

    #[test]
    fn test_validate_rejects_same_output_and_assets() {
        let mut config = SiteConfig::default();
        config.build.output = "site".into();
        config.build.assets = "site".into();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_assets_inside_output() {
        let mut config = SiteConfig::default();
        config.build.output = "/site/public".into();
        config.build.assets = "/site/public/assets".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[build.assets]"));
    }

    #[test]
    fn test_validate_allows_output_inside_assets() {
        let mut config = SiteConfig::default();
        config.build.assets = "/site".into();
        config.build.output = "/site/public".into();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_interface() {
        let mut config = SiteConfig::default();
        config.serve.interface = "localhost".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[serve.interface]"));
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "build"]);

        let config = SiteConfig::load(cli).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.build.assets, root.join("assets"));
        assert_eq!(config.config_path, root.join("folio.toml"));
    }

    #[test]
    fn test_load_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            r#"
            [build]
            minify = true
            output = "dist"

            [serve]
            port = 3000
        "#,
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&[
            "folio", "--root", root, "-o", "out", "serve", "--minify=false", "--clean", "-p",
            "9000",
        ]);

        let config = SiteConfig::load(cli).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.build.output, root.join("out"));
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.serve.interface, "127.0.0.1");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("folio.toml"), "[base]\nlanguage = \"\"\n").unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "check"]);

        assert!(SiteConfig::load(cli).is_err());
    }
}

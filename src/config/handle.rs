//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables hot-reloading of `folio.toml` during watch mode.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::cfg;
//!
//! let c = cfg();
//! build_site(&c)?;  // Arc auto-derefs to &SiteConfig
//! ```

use super::SiteConfig;
use crate::utils::hash;
use anyhow::{Result, anyhow};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

// =============================================================================
// Global State
// =============================================================================

/// Global config storage with atomic replacement support.
///
/// Initialized with default config, then replaced with loaded config in main.
/// During watch mode, replaced again when folio.toml changes.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content behind the current `CONFIG`.
/// Zero when no file was present.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

// =============================================================================
// Public API
// =============================================================================

/// Get current config as `Arc<SiteConfig>`.
///
/// Lock-free read via atomic load.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Replace config atomically (called when folio.toml changes).
///
/// Returns `true` if config was actually updated, `false` if content matches last load.
/// A deleted config file falls back to defaults.
///
/// # Errors
///
/// Returns error if folio.toml parsing or validation fails; the old config stays live.
pub fn reload_config() -> Result<bool> {
    let c = cfg();
    let cli = c
        .get_cli()
        .ok_or_else(|| anyhow!("config was not loaded from the command line"))?;

    let new_hash = match fs::read_to_string(&c.config_path) {
        Ok(content) => hash::compute(content.as_bytes()),
        Err(_) => 0,
    };
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load(cli)?;

    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

/// Initialize global config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(hash::compute(content.as_bytes()), Ordering::Relaxed);
    }

    CONFIG.store(Arc::new(config));
}

//! File system watcher for live rebuild.
//!
//! Monitors the assets directory and the config file, then rebuilds the site.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Event Loop                          │
//! │                                                          │
//! │  ┌──────────┐    ┌──────────┐    ┌────────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│  handle_changes()  │  │
//! │  │ events   │    │ (300ms)  │    │                    │  │
//! │  └──────────┘    └──────────┘    │  config → reload   │  │
//! │                                  │  then rebuild      │  │
//! │                                  └────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::RecvTimeoutError,
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

// =============================================================================
// Path Utilities
// =============================================================================

/// What a changed path means for the rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Config,
    Asset,
    Ignored,
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

fn classify(path: &Path, config: &SiteConfig) -> Change {
    if path == config.config_path {
        Change::Config
    } else if path.starts_with(&config.build.output) {
        Change::Ignored
    } else if path.starts_with(&config.build.assets) {
        Change::Asset
    } else {
        Change::Ignored
    }
}

/// Format path as relative to root for log display.
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Rebuild after a batch of changes. Returns true if a rebuild succeeded.
fn handle_changes(paths: &[PathBuf]) -> bool {
    let config = cfg();
    let changes: Vec<_> = paths.iter().map(|p| (p, classify(p, &config))).collect();

    let config_changed = changes.iter().any(|(_, c)| *c == Change::Config);
    let assets: Vec<_> = changes
        .iter()
        .filter(|(_, c)| *c == Change::Asset)
        .map(|(p, _)| rel_path(p, config.get_root()))
        .collect();

    if config_changed {
        match reload_config() {
            Ok(true) => {
                log!("watch"; "config changed, rebuilding...");
                return rebuild();
            }
            Ok(false) => {}
            Err(e) => {
                log!("error"; "config reload failed, keeping previous: {e:#}");
                return false;
            }
        }
    }

    if assets.is_empty() {
        return false;
    }
    log!("watch"; "{} changed, rebuilding...", assets.join(", "));
    rebuild()
}

fn rebuild() -> bool {
    match build_site(&cfg()) {
        Ok(_) => true,
        Err(e) => {
            log!("error"; "build failed: {e:#}");
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let mut watched = Vec::new();

    if config.build.assets.exists() {
        watcher
            .watch(&config.build.assets, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch assets: {}", config.build.assets.display()))?;
        watched.push(format!("{}/", rel_path(&config.build.assets, root)));
    }

    if config.config_path.exists() {
        watcher
            .watch(&config.config_path, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch config: {}", config.config_path.display()))?;
        watched.push(rel_path(&config.config_path, root));
    }

    if watched.is_empty() {
        log!("watch"; "nothing to watch");
    } else {
        log!("watch"; "{}", watched.join(", "));
    }
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let config = cfg();
    if !config.serve.watch {
        return Ok(());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &config)?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take()) {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}

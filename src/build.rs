//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()      ──► clean + create output dir
//!     │
//!     ├── copy_assets()         ──► assets/** → output/** (parallel)
//!     │
//!     ├── write_page()          ──► stylesheet + index.html
//!     │
//!     └── report()              ──► missing assets, invariant warnings
//! ```

use crate::{
    check::{DEFAULT_VIEWPORTS, check_all},
    config::SiteConfig,
    dom::StyleLink,
    log,
    page::{self, content::referenced_assets},
    utils::{css, minify::minify_html},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the page and copy assets into the output directory.
///
/// If `config.build.clean` is true, clears the entire output directory first.
/// Returns the path of the written `index.html`.
pub fn build_site(config: &SiteConfig) -> Result<PathBuf> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    // Generated files are written after the copy so they win over assets of the same name.
    let copied = copy_assets(&config.build.assets, output)?;
    let index = write_page(config)?;

    report(config);
    log!("build"; "done, {} assets copied", copied);

    Ok(index)
}

/// Ensure the output directory exists, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Collect all non-hidden files below `dir`, skipping the `exclude` subtree.
fn collect_asset_files(dir: &Path, exclude: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(is_hidden(e.file_name()) || e.path() == exclude))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

/// Copy the assets tree into `output`, preserving relative paths.
///
/// A missing assets directory copies nothing. An output directory nested
/// inside the assets tree is never copied into itself.
fn copy_assets(assets: &Path, output: &Path) -> Result<usize> {
    if !assets.exists() {
        log!("warn"; "assets directory not found: {}", assets.display());
        return Ok(0);
    }

    let files = collect_asset_files(assets, output);
    files.par_iter().try_for_each(|path| {
        let relative = path.strip_prefix(assets)?;
        let dest = output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy asset: {}", path.display()))?;
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(files.len())
}

/// Write the stylesheet and `index.html`.
fn write_page(config: &SiteConfig) -> Result<PathBuf> {
    let output = &config.build.output;
    let css = page::stylesheet();

    let style = if config.build.css.inline {
        css::cleanup_old_stylesheets(output, None)?;
        StyleLink::Inline(css)
    } else {
        let filename = css::write_stylesheet(output, &css)?;
        css::cleanup_old_stylesheets(output, Some(&filename))?;
        StyleLink::External(filename)
    };

    let html = page::compose(config, style).to_html();
    let html = minify_html(html.as_bytes(), config.build.minify);

    let index = output.join(INDEX_FILE);
    fs::write(&index, &*html).with_context(|| format!("Failed to write {}", index.display()))?;
    Ok(index)
}

/// Warn about referenced assets missing from the output and invariant violations.
fn report(config: &SiteConfig) {
    for asset in missing_assets(&config.build.output) {
        log!("warn"; "referenced asset missing: {}", asset);
    }

    for error in check_all(&page::compose_body(), DEFAULT_VIEWPORTS) {
        log!("warn"; "{}", error);
    }
}

/// Assets the page links to that are absent from `output`.
fn missing_assets(output: &Path) -> Vec<&'static str> {
    referenced_assets()
        .into_iter()
        .filter(|asset| !output.join(asset).exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = dir.join("public");
        config.build.assets = dir.join("assets");
        config
    }

    fn stylesheets(output: &Path) -> Vec<String> {
        fs::read_dir(output)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("style-") && n.ends_with(".css"))
            .collect()
    }

    #[test]
    fn test_build_writes_index_and_stylesheet() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        let index = build_site(&config).unwrap();
        let html = fs::read_to_string(&index).unwrap();
        let sheets = stylesheets(&config.build.output);

        assert_eq!(sheets.len(), 1);
        assert!(html.contains(&sheets[0]));
        assert!(html.contains("table of contents"));
    }

    #[test]
    fn test_build_inline_css() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        config.build.css.inline = true;
        config.build.minify = false;
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("style-deadbeef.css"), "old").unwrap();

        let index = build_site(&config).unwrap();
        let html = fs::read_to_string(&index).unwrap();

        assert!(html.contains("<style>"));
        assert!(html.contains("IBM Plex Mono"));
        assert!(stylesheets(&config.build.output).is_empty());
    }

    #[test]
    fn test_build_copies_assets_skipping_hidden() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        let assets = &config.build.assets;
        fs::create_dir_all(assets.join("docs")).unwrap();
        fs::write(assets.join("sb-logo.png"), b"png").unwrap();
        fs::write(assets.join("docs/notes.txt"), b"notes").unwrap();
        fs::write(assets.join(".DS_Store"), b"junk").unwrap();

        build_site(&config).unwrap();
        let output = &config.build.output;

        assert!(output.join("sb-logo.png").exists());
        assert!(output.join("docs/notes.txt").exists());
        assert!(!output.join(".DS_Store").exists());
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join(INDEX_FILE).exists());
    }

    #[test]
    fn test_build_without_minify_keeps_doctype_layout() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        config.build.minify = false;

        let index = build_site(&config).unwrap();
        let html = fs::read_to_string(&index).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_build_output_nested_in_assets_does_not_grow() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.assets = dir.path().to_path_buf();
        config.build.output = dir.path().join("public");
        fs::write(dir.path().join("sb-logo.png"), b"png").unwrap();

        for _ in 0..3 {
            build_site(&config).unwrap();
        }

        let output = &config.build.output;
        assert!(output.join("sb-logo.png").exists());
        assert!(!output.join("public").exists());
    }

    #[test]
    fn test_generated_index_wins_over_asset_of_same_name() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        config.build.minify = false;
        fs::create_dir_all(&config.build.assets).unwrap();
        fs::write(config.build.assets.join(INDEX_FILE), "stale asset").unwrap();

        let index = build_site(&config).unwrap();
        let html = fs::read_to_string(&index).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("stale asset"));
    }

    #[test]
    fn test_missing_assets_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sb-logo.png"), b"png").unwrap();

        let missing = missing_assets(dir.path());
        assert!(!missing.contains(&"sb-logo.png"));
        assert!(missing.contains(&"omni-diff-drive.pdf"));
        assert!(missing.contains(&"button-proposal-arctic-asv.pdf"));
    }
}

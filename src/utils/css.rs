//! Fingerprinted stylesheet output.
//!
//! The composed stylesheet is written as `style-<hash>.css` so browsers
//! refetch it exactly when its content changes.

use crate::utils::hash;
use anyhow::{Context, Result};
use std::{fs, path::Path};

const PREFIX: &str = "style-";
const SUFFIX: &str = ".css";

/// Stylesheet filename for `css`, like `style-a1b2c3d4.css`.
pub fn stylesheet_filename(css: &str) -> String {
    format!("{PREFIX}{}{SUFFIX}", hash::fingerprint(css))
}

/// Write `css` into `output_dir`, returning the filename used.
pub fn write_stylesheet(output_dir: &Path, css: &str) -> Result<String> {
    let filename = stylesheet_filename(css);
    let path = output_dir.join(&filename);
    fs::write(&path, css).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(filename)
}

/// Remove `style-*.css` files other than `keep`.
pub fn cleanup_old_stylesheets(output_dir: &Path, keep: Option<&str>) -> Result<()> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if name_str.starts_with(PREFIX)
            && name_str.ends_with(SUFFIX)
            && Some(name_str.as_ref()) != keep
        {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stylesheet_filename_format() {
        let filename = stylesheet_filename("body {}");
        assert!(filename.starts_with("style-"));
        assert!(filename.ends_with(".css"));
        assert_eq!(filename.len(), "style-12345678.css".len());
    }

    #[test]
    fn test_stylesheet_filename_tracks_content() {
        assert_eq!(stylesheet_filename("a {}"), stylesheet_filename("a {}"));
        assert_ne!(stylesheet_filename("a {}"), stylesheet_filename("b {}"));
    }

    #[test]
    fn test_write_and_cleanup() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("style-old00000.css"), "old").unwrap();
        fs::write(dir.path().join("other.css"), "keep").unwrap();

        let current = write_stylesheet(dir.path(), "body { margin: 0px; }").unwrap();
        cleanup_old_stylesheets(dir.path(), Some(&current)).unwrap();

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["other.css".to_string(), current]);
    }

    #[test]
    fn test_cleanup_all_when_inline() {
        let dir = tempdir().unwrap();
        write_stylesheet(dir.path(), "a {}").unwrap();

        cleanup_old_stylesheets(dir.path(), None).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

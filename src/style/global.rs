//! Document-wide defaults, initialized once per process.

use super::rule::Declaration;
use super::value::px;
use std::sync::OnceLock;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Webfont stylesheet for IBM Plex Mono (light, regular, semibold).
pub const FONT_IMPORT_URL: &str =
    "https://fonts.googleapis.com/css2?family=IBM+Plex+Mono:wght@300;400;600&display=swap";

/// Sole typeface, with the generic monospace fallback.
pub const FONT_FAMILY: &str = "'IBM Plex Mono', monospace";

pub const BACKGROUND: &str = "#ffffff";
pub const FOREGROUND: &str = "#1a1a1a";

static GLOBAL: OnceLock<GlobalStyle> = OnceLock::new();
#[cfg(test)]
static INIT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Resets and base typography applied to the whole document.
#[derive(Debug)]
pub struct GlobalStyle {
    pub font_import: &'static str,
    pub body: Vec<Declaration>,
    pub universal: Vec<Declaration>,
}

/// Get the global style, building it on first use.
pub fn global() -> &'static GlobalStyle {
    GLOBAL.get_or_init(|| {
        #[cfg(test)]
        INIT_COUNT.fetch_add(1, Ordering::Relaxed);
        GlobalStyle::build()
    })
}

/// Number of times the global style was built. Never exceeds 1.
#[cfg(test)]
pub fn init_count() -> usize {
    INIT_COUNT.load(Ordering::Relaxed)
}

impl GlobalStyle {
    fn build() -> Self {
        Self {
            font_import: FONT_IMPORT_URL,
            body: vec![
                Declaration::new("margin", px(0.0)),
                Declaration::new("padding", px(0.0)),
                Declaration::new("background-color", BACKGROUND),
                Declaration::new("color", FOREGROUND),
                Declaration::new("font-family", FONT_FAMILY),
                Declaration::new("-webkit-font-smoothing", "antialiased"),
            ],
            universal: vec![Declaration::new("box-sizing", "border-box")],
        }
    }

    #[cfg(test)]
    pub fn body_value(&self, property: &str) -> Option<&super::value::Value> {
        self.body
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::Value;

    #[test]
    fn test_global_is_built_once() {
        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));
        assert_eq!(init_count(), 1);
    }

    #[test]
    fn test_global_defaults() {
        let g = global();
        assert_eq!(g.body_value("margin"), Some(&px(0.0)));
        assert_eq!(g.body_value("font-family"), Some(&Value::Keyword(FONT_FAMILY)));
        assert_eq!(g.universal[0].property, "box-sizing");
        assert!(g.font_import.starts_with("https://fonts.googleapis.com/"));
    }
}

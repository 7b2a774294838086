//! HTML minification.

use std::borrow::Cow;

/// Minify HTML when `enabled`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_html(html: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

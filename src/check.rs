//! Invariant checks over the composed page.
//!
//! Structural checks walk the body tree; layout checks resolve the
//! responsive rules across a range of viewport widths.

use crate::{
    dom::Element,
    layout::{EPSILON, Zone, footer_logo_width, resolve_header},
    page::{
        content::{CONTACT_ANCHOR, CONTACT_LABEL, LinkKind, OUTBOUND_MARKER, OWNER_NAME},
        styles::{HEADER_TEXT_SIZE, NARROW_VIEWPORT, STYLES},
    },
    style::{StyleRule, Value, Viewport},
};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Viewport widths covered by `folio check` by default.
pub const DEFAULT_VIEWPORTS: RangeInclusive<u32> = 320..=2560;

/// Header text far longer than any real zone content.
const LONG_PLACEHOLDER: &str = "a much longer placeholder name that overflows the left zone of the header grid";

#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("table of contents is missing")]
    MissingToc,

    #[error("table of contents lists {toc} entries but the page has {sections} sections")]
    TocCountMismatch { toc: usize, sections: usize },

    #[error("toc link `{0}` lacks an in-page anchor, numeral or label")]
    MalformedTocEntry(String),

    #[error("anchor `#{0}` has no target")]
    MissingAnchor(String),

    #[error("anchor `#{anchor}` targets {count} elements")]
    DuplicateAnchor { anchor: String, count: usize },

    #[error("section `#{anchor}` heading `{heading}` does not match toc entry `{numeral} {label}`")]
    HeadingMismatch {
        anchor: String,
        numeral: String,
        label: String,
        heading: String,
    },

    #[error("toc entry {position} points to `#{toc}` but section {position} is `#{section}`")]
    OrderMismatch {
        position: usize,
        toc: String,
        section: String,
    },

    #[error("outbound link `{0}` lacks the `↗` marker")]
    MissingMarker(String),

    #[error("link `{0}` must not carry the `↗` marker")]
    UnexpectedMarker(String),

    #[error("{element} font size {size}px outside [{min}px, {max}px] at viewport {width}px")]
    FontOutOfRange {
        element: &'static str,
        size: f32,
        min: f32,
        max: f32,
        width: u32,
    },

    #[error("{element} overflows its header zone without an ellipsis at viewport {width}px")]
    UnclippedOverflow { element: &'static str, width: u32 },

    #[error("header center moves by {delta}px with long zone text at viewport {width}px")]
    CenterShift { width: u32, delta: f32 },

    #[error("footer logo is {actual:?}px at viewport {width}px, expected {expected}px")]
    FooterLogoWidth {
        width: u32,
        expected: f32,
        actual: Option<f32>,
    },

    #[error("header layout: {0}")]
    Layout(#[from] crate::layout::GridError),
}

/// Run every structural and layout check.
pub fn check_all(body: &Element, viewports: RangeInclusive<u32>) -> Vec<CheckError> {
    let mut errors = check_anchors(body);
    errors.extend(check_markers(body));
    errors.extend(check_layout(viewports));
    errors
}

// ============================================================================
// Structure
// ============================================================================

struct TocEntry<'a> {
    anchor: &'a str,
    numeral: String,
    label: String,
}

fn toc_entries<'a>(toc: &'a Element, errors: &mut Vec<CheckError>) -> Vec<TocEntry<'a>> {
    toc.find_all(|e| e.tag == "a")
        .filter_map(|a| {
            let href = a.get_attr("href").unwrap_or_default();
            let entry = href.strip_prefix('#').and_then(|anchor| {
                Some(TocEntry {
                    anchor,
                    numeral: a.find_class("toc-number")?.text_content(),
                    label: a.find_class("bold-underline")?.text_content(),
                })
            });
            if entry.is_none() {
                errors.push(CheckError::MalformedTocEntry(href.to_string()));
            }
            entry
        })
        .collect()
}

/// The toc exists with one entry per section, every toc anchor resolves to
/// exactly one section whose heading matches, sections appear in toc order,
/// and the contact anchor exists once.
pub fn check_anchors(body: &Element) -> Vec<CheckError> {
    let mut errors = Vec::new();
    let entries = match body.find(|e| e.tag == "nav") {
        Some(toc) => toc_entries(toc, &mut errors),
        None => {
            errors.push(CheckError::MissingToc);
            Vec::new()
        }
    };

    for entry in &entries {
        match body.count_id(entry.anchor) {
            0 => {
                errors.push(CheckError::MissingAnchor(entry.anchor.to_string()));
                continue;
            }
            1 => {}
            count => errors.push(CheckError::DuplicateAnchor {
                anchor: entry.anchor.to_string(),
                count,
            }),
        }

        let heading = body
            .find_by_id(entry.anchor)
            .and_then(|section| section.find(|e| e.tag == "h2"))
            .map(Element::text_content)
            .unwrap_or_default();
        let matches = heading
            .strip_prefix(entry.numeral.as_str())
            .is_some_and(|rest| rest.starts_with(' ') && rest.contains(entry.label.as_str()));
        if !matches {
            errors.push(CheckError::HeadingMismatch {
                anchor: entry.anchor.to_string(),
                numeral: entry.numeral.clone(),
                label: entry.label.clone(),
                heading,
            });
        }
    }

    let sections: Vec<&str> = body
        .find_all(|e| e.has_class("section"))
        .filter_map(Element::get_id)
        .collect();
    if !errors.contains(&CheckError::MissingToc) && entries.len() != sections.len() {
        errors.push(CheckError::TocCountMismatch {
            toc: entries.len(),
            sections: sections.len(),
        });
    }
    for (position, (entry, section)) in entries.iter().zip(&sections).enumerate() {
        if entry.anchor != *section {
            errors.push(CheckError::OrderMismatch {
                position: position + 1,
                toc: entry.anchor.to_string(),
                section: section.to_string(),
            });
        }
    }

    match body.count_id(CONTACT_ANCHOR) {
        0 => errors.push(CheckError::MissingAnchor(CONTACT_ANCHOR.to_string())),
        1 => {}
        count => errors.push(CheckError::DuplicateAnchor {
            anchor: CONTACT_ANCHOR.to_string(),
            count,
        }),
    }

    errors
}

/// Outbound links carry the marker; mail and in-page links do not.
pub fn check_markers(body: &Element) -> Vec<CheckError> {
    body.find_all(|e| e.tag == "a")
        .filter_map(|a| {
            let href = a.get_attr("href")?;
            let marked = a.text_content().contains(OUTBOUND_MARKER);
            match (LinkKind::of(href).is_outbound(), marked) {
                (true, false) => Some(CheckError::MissingMarker(href.to_string())),
                (false, true) => Some(CheckError::UnexpectedMarker(href.to_string())),
                _ => None,
            }
        })
        .collect()
}

// ============================================================================
// Layout
// ============================================================================

/// Clamp bounds, header balance and footer logo breakpoints per viewport.
pub fn check_layout(viewports: RangeInclusive<u32>) -> Vec<CheckError> {
    let mut errors = Vec::new();

    for width in viewports {
        let viewport = Viewport::with_width(width as f32);

        let (normal, long) = match (
            resolve_header(viewport, OWNER_NAME, CONTACT_LABEL),
            resolve_header(viewport, LONG_PLACEHOLDER, LONG_PLACEHOLDER),
        ) {
            (Ok(normal), Ok(long)) => (normal, long),
            (Err(e), _) | (_, Err(e)) => {
                errors.push(e.into());
                break;
            }
        };

        for (element, size) in [
            ("site title", normal.left.font_size),
            ("contact label", normal.right.font_size),
        ] {
            let size = size.unwrap_or(0.0);
            if size < HEADER_TEXT_SIZE.min || size > HEADER_TEXT_SIZE.max {
                errors.push(CheckError::FontOutOfRange {
                    element,
                    size,
                    min: HEADER_TEXT_SIZE.min,
                    max: HEADER_TEXT_SIZE.max,
                    width,
                });
            }
        }

        for (element, zone, rule) in [
            ("site title", &long.left, &STYLES.site_title),
            ("contact label", &long.right, &STYLES.contact_label),
        ] {
            errors.extend(check_overflow(element, zone, rule, viewport));
        }

        let delta = (normal.center.midpoint() - long.center.midpoint()).abs();
        if delta > EPSILON {
            errors.push(CheckError::CenterShift { width, delta });
        }

        let expected = if viewport.width <= NARROW_VIEWPORT {
            100.0
        } else {
            160.0
        };
        let actual = footer_logo_width(viewport);
        if actual != Some(expected) {
            errors.push(CheckError::FooterLogoWidth {
                width,
                expected,
                actual,
            });
        }
    }

    errors
}

/// A zone whose content overflows must clip on one line with an ellipsis.
fn check_overflow(
    element: &'static str,
    zone: &Zone,
    rule: &StyleRule,
    viewport: Viewport,
) -> Option<CheckError> {
    let clipped = [
        ("white-space", "nowrap"),
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
    ]
    .into_iter()
    .all(|(property, keyword)| {
        rule.get(property, viewport).and_then(Value::as_keyword) == Some(keyword)
    });

    (zone.truncated() && !clipped).then(|| CheckError::UnclippedOverflow {
        element,
        width: viewport.width as u32,
    })
}

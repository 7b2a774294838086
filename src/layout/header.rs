//! Header geometry: three zones on a `1fr auto 1fr` grid.

use super::grid::{GridError, GridItem, parse_tracks, resolve_tracks};
use super::text::measure;
use crate::page::styles::{BODY_TEXT_SIZE, STYLES};
use crate::style::{StyleRule, Value, Viewport};

/// Tolerance for float comparisons on resolved geometry.
pub const EPSILON: f32 = 0.01;

/// One resolved header zone, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub x: f32,
    pub width: f32,
    /// Unclipped width of the zone's content.
    pub content: f32,
    pub font_size: Option<f32>,
}

impl Zone {
    pub fn midpoint(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Content wider than the zone is clipped with an ellipsis.
    pub fn truncated(&self) -> bool {
        self.content > self.width + EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    pub viewport: Viewport,
    pub left: Zone,
    pub center: Zone,
    pub right: Zone,
}

/// Resolve the header at `viewport` for the given left/right zone texts.
pub fn resolve_header(
    viewport: Viewport,
    left_text: &str,
    right_text: &str,
) -> Result<HeaderLayout, GridError> {
    let s = &*STYLES;

    let padding = s.page.px("padding", viewport).unwrap_or(0.0);
    let container = (viewport.width - 2.0 * padding).max(0.0);
    let template = s
        .header
        .get("grid-template-columns", viewport)
        .and_then(Value::as_keyword)
        .unwrap_or("1fr auto 1fr");
    let tracks = parse_tracks(template)?;

    let title_size = font_size(&s.site_title, viewport);
    let title_spacing = match s.site_title.get("letter-spacing", viewport) {
        Some(Value::Em(em)) => *em,
        _ => 0.0,
    };
    let contact_size = font_size(&s.contact_label, viewport);
    let logo = s.logo.px("width", viewport).unwrap_or(0.0);

    let left_content = measure(left_text, title_size, title_spacing);
    let right_content = measure(right_text, contact_size, 0.0);

    let items = [
        grid_item(&s.header_left, left_content, viewport),
        GridItem::rigid(logo),
        grid_item(&s.header_right, right_content, viewport),
    ];
    let sizes = resolve_tracks(&tracks, &items, container)?;

    let left_x = padding;
    let center_track = left_x + sizes[0];
    let right_x = center_track + sizes[1];

    Ok(HeaderLayout {
        viewport,
        left: Zone {
            x: left_x,
            width: sizes[0],
            content: left_content,
            font_size: Some(title_size),
        },
        // justify-self: center inside its own track
        center: Zone {
            x: center_track + (sizes[1] - logo) / 2.0,
            width: logo,
            content: logo,
            font_size: None,
        },
        right: Zone {
            x: right_x,
            width: sizes[2],
            content: right_content,
            font_size: Some(contact_size),
        },
    })
}

fn font_size(rule: &StyleRule, viewport: Viewport) -> f32 {
    rule.px("font-size", viewport).unwrap_or(BODY_TEXT_SIZE)
}

/// Items declaring `min-width: 0` may shrink below their content.
fn grid_item(rule: &StyleRule, content: f32, viewport: Viewport) -> GridItem {
    match rule.px("min-width", viewport) {
        Some(min) if min <= 0.0 => GridItem::shrinkable(content),
        _ => GridItem::rigid(content),
    }
}

//! Column track sizing for a single-row grid.
//!
//! Supports the track kinds the header uses: fixed `px`, `auto` and `fr`.
//! `fr` tracks are sized with the flexible-length algorithm: the leftover
//! space is split by flex factor, except that a track whose item has a
//! larger minimum is frozen at that minimum and removed from the split.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    Px(f32),
    Auto,
    Fr(f32),
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("invalid track `{0}`")]
    InvalidTrack(String),
    #[error("{tracks} tracks but {items} items")]
    ItemCount { tracks: usize, items: usize },
}

/// Parse a `grid-template-columns` list such as `1fr auto 1fr`.
pub fn parse_tracks(template: &str) -> Result<Vec<Track>, GridError> {
    template
        .split_whitespace()
        .map(|token| {
            let parsed = if token == "auto" {
                Some(Track::Auto)
            } else if let Some(fr) = token.strip_suffix("fr") {
                fr.parse().ok().map(Track::Fr)
            } else if let Some(v) = token.strip_suffix("px") {
                v.parse().ok().map(Track::Px)
            } else {
                None
            };
            parsed.ok_or_else(|| GridError::InvalidTrack(token.to_string()))
        })
        .collect()
}

/// Sizing input for the item placed in one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridItem {
    /// Max-content width of the item.
    pub content: f32,
    /// Automatic minimum: `0` with `min-width: 0`, else the content width.
    pub min: f32,
}

impl GridItem {
    /// Item whose track may shrink below its content (`min-width: 0`).
    pub fn shrinkable(content: f32) -> Self {
        Self { content, min: 0.0 }
    }

    /// Item that keeps its content width as the track minimum.
    pub fn rigid(content: f32) -> Self {
        Self {
            content,
            min: content,
        }
    }
}

/// Resolve track widths for `container` px.
pub fn resolve_tracks(
    tracks: &[Track],
    items: &[GridItem],
    container: f32,
) -> Result<Vec<f32>, GridError> {
    if tracks.len() != items.len() {
        return Err(GridError::ItemCount {
            tracks: tracks.len(),
            items: items.len(),
        });
    }

    let mut sizes: Vec<Option<f32>> = tracks
        .iter()
        .zip(items)
        .map(|(track, item)| match track {
            Track::Px(v) => Some(*v),
            Track::Auto => Some(item.content),
            Track::Fr(_) => None,
        })
        .collect();

    // Freeze fr tracks whose minimum exceeds their share, then redistribute
    loop {
        let used: f32 = sizes.iter().flatten().sum();
        let free = (container - used).max(0.0);
        let flex: f32 = tracks
            .iter()
            .zip(&sizes)
            .filter_map(|(track, size)| match (track, size) {
                (Track::Fr(f), None) => Some(*f),
                _ => None,
            })
            .sum();
        if flex <= 0.0 {
            break;
        }
        let unit = free / flex;

        let mut frozen = false;
        for ((track, item), size) in tracks.iter().zip(items).zip(sizes.iter_mut()) {
            if let Track::Fr(f) = track
                && size.is_none()
                && unit * f < item.min
            {
                *size = Some(item.min);
                frozen = true;
            }
        }
        if !frozen {
            for (track, size) in tracks.iter().zip(sizes.iter_mut()) {
                if let Track::Fr(f) = track
                    && size.is_none()
                {
                    *size = Some(unit * f);
                }
            }
            break;
        }
    }

    Ok(sizes.into_iter().map(|s| s.unwrap_or(0.0)).collect())
}

//! Typed CSS values and viewport-relative resolution.
//!
//! Every value that has a pixel meaning at a given viewport can be resolved
//! with [`Value::to_px`]. Everything else (keywords, font-relative units) only
//! serializes.

use std::fmt;

/// Root font size used to resolve `rem` units.
pub const ROOT_FONT_PX: f32 = 16.0;

// ============================================================================
// Viewport
// ============================================================================

/// The rendering surface a layout is resolved against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport of the given width with a 16:10 landscape height.
    pub fn with_width(width: f32) -> Self {
        Self::new(width, (width * 0.625).max(480.0))
    }
}

// ============================================================================
// Clamp
// ============================================================================

/// `clamp(min, preferred, max)` with a viewport-width preferred term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    /// Floor in px.
    pub min: f32,
    /// Preferred size as a percentage of the viewport width.
    pub vw: f32,
    /// Ceiling in px.
    pub max: f32,
}

impl Clamp {
    pub const fn new(min: f32, vw: f32, max: f32) -> Self {
        Self { min, vw, max }
    }

    /// Evaluate against a viewport width in px.
    ///
    /// Scales continuously between the two bounds; no breakpoints involved.
    pub fn at(&self, viewport_width: f32) -> f32 {
        (viewport_width * self.vw / 100.0).clamp(self.min, self.max)
    }
}

impl fmt::Display for Clamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({}px, {}vw, {}px)",
            Num(self.min),
            Num(self.vw),
            Num(self.max)
        )
    }
}

// ============================================================================
// Value
// ============================================================================

/// A single CSS property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Px(f32),
    Rem(f32),
    Em(f32),
    Percent(f32),
    Vh(f32),
    Ch(f32),
    Number(f32),
    Clamp(Clamp),
    /// Static keyword or expression (`auto`, `1fr auto 1fr`, `#1a1a1a`).
    Keyword(&'static str),
}

impl Value {
    /// Resolve to pixels at the given viewport.
    ///
    /// `em` and `ch` depend on the element's font and are not resolved here.
    pub fn to_px(&self, viewport: Viewport) -> Option<f32> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Rem(v) => Some(v * ROOT_FONT_PX),
            Self::Vh(v) => Some(viewport.height * v / 100.0),
            Self::Clamp(c) => Some(c.at(viewport.width)),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(k) => Some(k),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", Num(*v)),
            Self::Rem(v) => write!(f, "{}rem", Num(*v)),
            Self::Em(v) => write!(f, "{}em", Num(*v)),
            Self::Percent(v) => write!(f, "{}%", Num(*v)),
            Self::Vh(v) => write!(f, "{}vh", Num(*v)),
            Self::Ch(v) => write!(f, "{}ch", Num(*v)),
            Self::Number(v) => write!(f, "{}", Num(*v)),
            Self::Clamp(c) => c.fmt(f),
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<&'static str> for Value {
    fn from(keyword: &'static str) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Clamp> for Value {
    fn from(clamp: Clamp) -> Self {
        Self::Clamp(clamp)
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub const fn px(v: f32) -> Value {
    Value::Px(v)
}

pub const fn rem(v: f32) -> Value {
    Value::Rem(v)
}

pub const fn em(v: f32) -> Value {
    Value::Em(v)
}

pub const fn percent(v: f32) -> Value {
    Value::Percent(v)
}

pub const fn vh(v: f32) -> Value {
    Value::Vh(v)
}

pub const fn ch(v: f32) -> Value {
    Value::Ch(v)
}

pub const fn num(v: f32) -> Value {
    Value::Number(v)
}

/// Number formatting without trailing `.0` (`100` not `100.0`).
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_display() {
        assert_eq!(Clamp::new(10.0, 2.5, 14.0).to_string(), "clamp(10px, 2.5vw, 14px)");
    }

    #[test]
    fn test_clamp_floor_and_ceiling() {
        let c = Clamp::new(10.0, 2.5, 14.0);
        assert_eq!(c.at(320.0), 10.0);
        assert_eq!(c.at(400.0), 10.0);
        assert_eq!(c.at(2560.0), 14.0);
        assert_eq!(c.at(560.0), 14.0);
    }

    #[test]
    fn test_clamp_scales_between_bounds() {
        let c = Clamp::new(10.0, 2.5, 14.0);
        // 480 * 2.5% = 12
        assert_eq!(c.at(480.0), 12.0);
        assert!(c.at(450.0) < c.at(500.0));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(px(100.0).to_string(), "100px");
        assert_eq!(rem(1.5).to_string(), "1.5rem");
        assert_eq!(em(0.05).to_string(), "0.05em");
        assert_eq!(percent(100.0).to_string(), "100%");
        assert_eq!(vh(100.0).to_string(), "100vh");
        assert_eq!(ch(4.0).to_string(), "4ch");
        assert_eq!(num(1.6).to_string(), "1.6");
        assert_eq!(Value::from("1fr auto 1fr").to_string(), "1fr auto 1fr");
    }

    #[test]
    fn test_value_to_px() {
        let vp = Viewport::new(1000.0, 800.0);
        assert_eq!(px(12.0).to_px(vp), Some(12.0));
        assert_eq!(rem(2.0).to_px(vp), Some(32.0));
        assert_eq!(vh(50.0).to_px(vp), Some(400.0));
        assert_eq!(Value::Clamp(Clamp::new(10.0, 2.5, 14.0)).to_px(vp), Some(14.0));
        assert_eq!(em(1.0).to_px(vp), None);
        assert_eq!(Value::from("auto").to_px(vp), None);
    }
}

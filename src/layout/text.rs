//! Monospace text measurement.

/// Horizontal advance of one IBM Plex Mono glyph, in em.
pub const MONO_ADVANCE_EM: f32 = 0.6;

/// Width in px of `text` set at `font_size` px with `letter_spacing` em.
pub fn measure(text: &str, font_size: f32, letter_spacing: f32) -> f32 {
    let glyphs = text.chars().count() as f32;
    glyphs * (MONO_ADVANCE_EM + letter_spacing) * font_size
}

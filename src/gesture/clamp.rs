//! Translation bounds for scaled content.
//!
//! The child is scaled around its own center, so at scale `s` a child of size
//! `c` overhangs its layout box by `(c * s - c) / 2` on each side. Translation
//! is limited so the overhanging content always covers the viewport, and is
//! forced to zero whenever the scaled content fits.

use crate::constants::MIN_ZOOM;

/// Clamp one axis of translation using the default minimum zoom.
#[inline]
pub fn clamp_translation(translation: f32, child_size: f32, viewport_size: f32, scale: f32) -> f32 {
    clamp_translation_with_min(translation, child_size, viewport_size, scale, MIN_ZOOM)
}

/// Clamp one axis of translation for a container whose unzoomed scale is `min_zoom`.
///
/// Returns 0 at `min_zoom` and whenever `child_size * scale <= viewport_size`.
/// Otherwise the result lies in
/// `[viewport_size - (child_size + scaled) / 2, (scaled - child_size) / 2]`.
pub fn clamp_translation_with_min(
    translation: f32,
    child_size: f32,
    viewport_size: f32,
    scale: f32,
    min_zoom: f32,
) -> f32 {
    if scale == min_zoom {
        return 0.0;
    }
    let scaled_size = child_size * scale;
    // Also catches NaN geometry
    if !(scaled_size > viewport_size) {
        return 0.0;
    }
    // Start edge of the content at the start of the viewport
    let max_trans = (scaled_size - child_size) / 2.0;
    // End edge of the content at the end of the viewport
    let min_trans = viewport_size - (child_size + scaled_size) / 2.0;

    // max/min rather than f32::clamp: a NaN translation lands on min_trans
    translation.max(min_trans).min(max_trans)
}

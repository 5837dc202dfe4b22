//! Gesture-wide constants.
//!
//! Centralizes zoom limits and touch thresholds so the defaults in
//! [`crate::config::ZoomConfig`] and the clamping helpers agree.

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level (content at natural size)
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 4.0;

// ============================================================================
// Touch
// ============================================================================

/// Default touch slop in logical pixels.
///
/// Finger travel from the down position beyond this distance turns a touch
/// into a drag and lets the container claim the gesture.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Smallest pointer span, in logical pixels, that may start a pinch
pub const MIN_PINCH_SPAN: f32 = 16.0;

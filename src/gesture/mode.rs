//! Interaction mode of the active touch sequence.

use serde::Serialize;

/// How the current touch sequence is being interpreted.
///
/// Exactly one mode is active at a time; there are no side flags that could
/// disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InteractionMode {
    /// No zoom/pan gesture; vertical scrolling belongs to the container
    #[default]
    None,
    /// Panning the zoomed child with one finger
    Dragging,
    /// Pinching with two fingers
    Zooming,
}

impl InteractionMode {
    /// Returns true while a pan or pinch gesture owns the touch stream
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn is_zooming(self) -> bool {
        matches!(self, Self::Zooming)
    }

    /// Reset to None
    pub fn reset(&mut self) {
        *self = Self::None;
    }
}

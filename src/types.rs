//! Touch input and geometry types shared by the gesture machine and hosts.

use serde::{Deserialize, Serialize};

/// A position or offset in local view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a view in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Masked action of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchAction {
    /// First finger touches down
    Down,
    /// Any pointer moved
    Move,
    /// An additional finger touches down
    PointerDown,
    /// A non-final finger lifts
    PointerUp,
    /// Last finger lifts
    Up,
    /// The gesture was aborted by the system
    Cancel,
}

impl TouchAction {
    /// Returns true for the two actions that terminate a gesture
    #[inline]
    pub fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single touch event as delivered by the host.
///
/// `position` is the primary pointer. `pointers` lists every pointer that is
/// down for this event, including one going down or up, and `action_index`
/// names that pointer for `PointerDown`/`PointerUp`.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub position: Point,
    pub pointers: Vec<Point>,
    pub action_index: usize,
}

impl TouchEvent {
    /// Single-pointer event at `(x, y)`.
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        let position = Point::new(x, y);
        Self {
            action,
            position,
            pointers: vec![position],
            action_index: 0,
        }
    }

    /// Replace the pointer list. The primary position becomes the first pointer.
    pub fn with_pointers(mut self, pointers: Vec<Point>) -> Self {
        if let Some(first) = pointers.first() {
            self.position = *first;
        }
        self.pointers = pointers;
        self
    }

    pub fn with_action_index(mut self, index: usize) -> Self {
        self.action_index = index;
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// Transform properties pushed onto the child view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl ChildTransform {
    pub const IDENTITY: ChildTransform = ChildTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        translation_x: 0.0,
        translation_y: 0.0,
    };

    /// Uniform scale with a translation
    pub fn new(scale: f32, translation: Point) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translation_x: translation.x,
            translation_y: translation.y,
        }
    }
}

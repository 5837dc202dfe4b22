//! Boundary to the hosting view system.
//!
//! The gesture machine never touches views directly. Everything it needs from
//! the toolkit (geometry, the child's transform properties, the ancestor's
//! interception flag and the container's stock scroll handling) goes through
//! this trait.

use crate::types::{ChildTransform, Size, TouchEvent};

pub trait ViewHost {
    /// Visible size of the container itself.
    fn viewport_size(&self) -> Size;

    /// Natural (unscaled) size of the single child, or `None` when the
    /// container is empty or not laid out yet.
    fn child_size(&self) -> Option<Size>;

    /// Push scale and translation onto the child.
    fn apply_child_transform(&mut self, transform: ChildTransform);

    /// Ask the enclosing container to stop (or resume) intercepting this
    /// gesture.
    fn request_parent_disallow_intercept(&mut self, disallow: bool);

    /// Stock vertical-scroll touch handling of the container.
    fn default_touch_event(&mut self, event: &TouchEvent) -> bool;

    /// Stock interception logic of the container. Its answer is advisory;
    /// the gesture machine makes the final decision.
    fn default_intercept_touch_event(&mut self, event: &TouchEvent) -> bool;
}

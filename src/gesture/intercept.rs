//! Interception decision - runs before the event is dispatched to descendants.

use crate::gesture::machine::ZoomGesture;
use crate::gesture::mode::InteractionMode;
use crate::gesture::pinch::PinchDetector;
use crate::host::ViewHost;
use crate::types::{TouchAction, TouchEvent};

impl<D: PinchDetector> ZoomGesture<D> {
    /// Decide whether the container steals this touch stream from its descendants.
    ///
    /// `Down` never intercepts; interception is only claimed on a later `Move`
    /// once the finger has travelled past the touch slop.
    pub fn decide_interception<H: ViewHost + ?Sized>(
        &mut self,
        event: &TouchEvent,
        host: &mut H,
    ) -> bool {
        match event.action {
            TouchAction::Down if !event.position.is_finite() => {
                tracing::warn!("Ignoring non-finite down position for interception");
                let _ = host.default_intercept_touch_event(event);
                false
            }

            TouchAction::Down => {
                self.intercept_down = event.position;
                if self.is_zoomed() {
                    self.start = event.position - self.committed;
                }
                // Keep the stock scroller's fling/scroll bookkeeping in sync
                let _ = host.default_intercept_touch_event(event);
                false
            }

            TouchAction::Move => {
                let distance = event.position.distance_to(self.intercept_down);
                if distance > self.config.touch_slop {
                    if self.is_zoomed() {
                        self.mode = InteractionMode::Dragging;
                    }
                    tracing::trace!(distance, mode = ?self.mode, "Intercepting past touch slop");
                    return true;
                }
                false
            }

            TouchAction::Up | TouchAction::Cancel => {
                self.mode.reset();
                false
            }

            // Extra pointers belong to this container, never to a descendant
            TouchAction::PointerDown | TouchAction::PointerUp => true,
        }
    }
}

//! Touch handling - mode transitions, drag offsets and pinch callbacks.

use crate::gesture::machine::ZoomGesture;
use crate::gesture::mode::InteractionMode;
use crate::gesture::pinch::{PinchDetector, PinchEvent};
use crate::host::ViewHost;
use crate::types::{TouchAction, TouchEvent};

/// Direction of a pinch step relative to "no change"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PinchDirection {
    Expand,
    Contract,
    Hold,
}

impl PinchDirection {
    fn of(factor: f32) -> Self {
        if factor > 1.0 {
            Self::Expand
        } else if factor < 1.0 {
            Self::Contract
        } else {
            Self::Hold
        }
    }

    /// A held sample never counts as a reversal
    fn reverses(self, previous: PinchDirection) -> bool {
        matches!(
            (self, previous),
            (Self::Expand, Self::Contract) | (Self::Contract, Self::Expand)
        )
    }
}

impl<D: PinchDetector> ZoomGesture<D> {
    /// Full touch handler.
    ///
    /// Returns true when the container keeps the event for zoom/pan; otherwise
    /// the host's stock scroll handling runs and its answer is returned.
    pub fn handle_event<H: ViewHost + ?Sized>(&mut self, event: &TouchEvent, host: &mut H) -> bool {
        self.handle_touch(event, host);

        let handling =
            self.mode.is_active() || self.is_zoomed() || self.detector.is_in_progress();
        if handling {
            true
        } else {
            host.default_touch_event(event)
        }
    }

    fn handle_touch<H: ViewHost + ?Sized>(&mut self, event: &TouchEvent, host: &mut H) {
        let position_ok = event.position.is_finite();

        match event.action {
            TouchAction::Down | TouchAction::Move if !position_ok => {
                tracing::warn!(action = ?event.action, "Ignoring non-finite touch position");
            }

            TouchAction::Down => {
                if self.is_zoomed() {
                    self.mode = InteractionMode::Dragging;
                    self.start = event.position - self.committed;
                } else {
                    self.mode = InteractionMode::None;
                }
            }

            TouchAction::Move => {
                if self.mode.is_dragging() {
                    self.offset = event.position - self.start;
                }
            }

            TouchAction::PointerDown => {
                self.mode = InteractionMode::Zooming;
            }

            TouchAction::PointerUp => {
                self.mode = InteractionMode::Dragging;
            }

            // Position is irrelevant here; a release must never be dropped
            TouchAction::Up | TouchAction::Cancel => {
                self.mode.reset();
                self.committed = self.offset;
                self.last_scale_factor = None;
            }
        }
        tracing::trace!(action = ?event.action, mode = ?self.mode, "Touch transition");

        if let Some(pinch) = self.detector.on_touch_event(event) {
            self.dispatch_pinch(pinch, host);
        }

        let claiming = (self.mode.is_dragging() && self.scale >= self.config.min_zoom)
            || self.mode.is_zooming();
        if claiming {
            host.request_parent_disallow_intercept(true);
            self.clamp_and_apply(host);
        } else {
            host.request_parent_disallow_intercept(false);
        }
    }

    fn dispatch_pinch<H: ViewHost + ?Sized>(&mut self, pinch: PinchEvent, host: &mut H) {
        match pinch {
            PinchEvent::Begin => {
                if !self.on_scale_begin() {
                    self.detector.cancel();
                }
            }
            PinchEvent::Scale { factor } => {
                self.on_scale(factor, host);
            }
            PinchEvent::End => self.on_scale_end(),
        }
    }

    /// Pinch begin callback; every pinch is accepted.
    pub fn on_scale_begin(&mut self) -> bool {
        true
    }

    /// Pinch step callback with the detector's per-step scale factor.
    ///
    /// A step whose direction reverses the previous step is discarded and
    /// clears the tracker instead of changing the scale. The transform is
    /// re-applied either way.
    pub fn on_scale<H: ViewHost + ?Sized>(&mut self, factor: f32, host: &mut H) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::warn!(factor, "Ignoring invalid pinch factor");
        } else {
            self.apply_scale_factor(factor);
        }

        self.clamp_and_apply(host);
        true
    }

    fn apply_scale_factor(&mut self, factor: f32) {
        let direction = PinchDirection::of(factor);
        let reversed = self
            .last_scale_factor
            .is_some_and(|last| direction.reverses(PinchDirection::of(last)));

        if reversed {
            tracing::debug!(
                factor,
                last = ?self.last_scale_factor,
                "Suppressing reversed pinch sample"
            );
            self.last_scale_factor = None;
            return;
        }

        // Not f32::clamp: an unvalidated config must not panic mid-gesture
        self.scale = (self.scale * factor).max(self.config.min_zoom).min(self.config.max_zoom);
        if direction != PinchDirection::Hold {
            self.last_scale_factor = Some(factor);
        }
    }

    /// Pinch end callback.
    pub fn on_scale_end(&mut self) {
        self.last_scale_factor = None;
    }
}

//! Toolkit-facing adapter around [`ZoomGesture`].
//!
//! `ZoomScrollView` owns the gesture machine and the host and exposes the
//! entry points a view system calls on a scrollable container: the
//! intercept hook, the touch handler, the pinch callbacks, and the
//! descendant's disallow-intercept request.

use crate::config::ZoomConfig;
use crate::gesture::pinch::{PinchDetector, SpanPinchDetector};
use crate::gesture::{GestureSnapshot, ZoomGesture};
use crate::host::ViewHost;
use crate::types::TouchEvent;

/// Outcome of a descendant asking the container not to intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptPolicy {
    /// The container keeps deciding interception itself
    Retained,
}

pub struct ZoomScrollView<H, D = SpanPinchDetector> {
    gesture: ZoomGesture<D>,
    host: H,
}

impl<H: ViewHost> ZoomScrollView<H> {
    pub fn new(host: H, config: ZoomConfig) -> Self {
        Self {
            gesture: ZoomGesture::new(config),
            host,
        }
    }
}

impl<H: ViewHost, D: PinchDetector> ZoomScrollView<H, D> {
    pub fn with_detector(host: H, config: ZoomConfig, detector: D) -> Self {
        Self {
            gesture: ZoomGesture::with_detector(config, detector),
            host,
        }
    }

    pub fn gesture(&self) -> &ZoomGesture<D> {
        &self.gesture
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn snapshot(&self) -> GestureSnapshot {
        self.gesture.snapshot()
    }

    /// Intercept hook, called before the event reaches descendants.
    pub fn on_intercept_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.gesture.decide_interception(event, &mut self.host)
    }

    /// Touch handler of the container itself.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.gesture.handle_event(event, &mut self.host)
    }

    /// A descendant asks the container to stop intercepting.
    ///
    /// The request is always overridden: a nested scrollable child must not be
    /// able to keep a zoom or pan gesture away from the container. Nothing is
    /// forwarded to the host or the ancestor.
    pub fn request_disallow_intercept_touch_event(&mut self, disallow: bool) -> InterceptPolicy {
        tracing::debug!(disallow, "Ignoring descendant disallow-intercept request");
        InterceptPolicy::Retained
    }

    pub fn on_scale_begin(&mut self) -> bool {
        self.gesture.on_scale_begin()
    }

    pub fn on_scale(&mut self, factor: f32) -> bool {
        self.gesture.on_scale(factor, &mut self.host)
    }

    pub fn on_scale_end(&mut self) {
        self.gesture.on_scale_end()
    }

    /// Drop zoom and pan, e.g. after loading new content into the child.
    pub fn reset_zoom(&mut self) {
        self.gesture.reset(&mut self.host)
    }
}

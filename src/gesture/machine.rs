//! Gesture state machine - unified state for zoom and pan interactions.

use crate::config::ZoomConfig;
use crate::gesture::clamp::clamp_translation_with_min;
use crate::gesture::mode::InteractionMode;
use crate::gesture::pinch::{PinchDetector, SpanPinchDetector};
use crate::host::ViewHost;
use crate::types::{ChildTransform, Point};
use serde::Serialize;

/// Zoom and pan state for one container.
///
/// Scale and the committed offset survive the end of a gesture; only the
/// mode and the pinch sample tracker are reset on release.
#[derive(Debug, Clone)]
pub struct ZoomGesture<D = SpanPinchDetector> {
    pub(super) config: ZoomConfig,
    pub(super) mode: InteractionMode,
    pub(super) scale: f32,
    /// Previous pinch factor of the current gesture
    pub(super) last_scale_factor: Option<f32>,
    /// Drag anchor: touch point at drag start minus the committed offset
    pub(super) start: Point,
    /// Current (clamped) translation
    pub(super) offset: Point,
    /// Translation committed by the last completed gesture
    pub(super) committed: Point,
    /// Down position used only for the slop test
    pub(super) intercept_down: Point,
    pub(super) detector: D,
}

/// Serializable view of the gesture state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GestureSnapshot {
    pub mode: InteractionMode,
    pub scale: f32,
    pub offset: Point,
    pub committed_offset: Point,
}

impl Default for ZoomGesture {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomGesture {
    /// Create a gesture machine with the built-in pinch detector.
    pub fn new(config: ZoomConfig) -> Self {
        Self::with_detector(config, SpanPinchDetector::new())
    }
}

impl<D: PinchDetector> ZoomGesture<D> {
    /// Create a gesture machine around a host-supplied pinch detector.
    pub fn with_detector(config: ZoomConfig, detector: D) -> Self {
        Self {
            mode: InteractionMode::None,
            scale: config.min_zoom,
            last_scale_factor: None,
            start: Point::ZERO,
            offset: Point::ZERO,
            committed: Point::ZERO,
            intercept_down: Point::ZERO,
            config,
            detector,
        }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn committed_offset(&self) -> Point {
        self.committed
    }

    /// Previous pinch factor of the current gesture, if any
    pub fn last_scale_factor(&self) -> Option<f32> {
        self.last_scale_factor
    }

    /// Returns true once the content is scaled past its natural size
    pub fn is_zoomed(&self) -> bool {
        self.scale > self.config.min_zoom
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn snapshot(&self) -> GestureSnapshot {
        GestureSnapshot {
            mode: self.mode,
            scale: self.scale,
            offset: self.offset,
            committed_offset: self.committed,
        }
    }

    /// Return to the unzoomed, centered state.
    ///
    /// Nothing calls this implicitly; hosts use it when they swap the child's
    /// content.
    pub fn reset<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        self.mode.reset();
        self.scale = self.config.min_zoom;
        self.last_scale_factor = None;
        self.start = Point::ZERO;
        self.offset = Point::ZERO;
        self.committed = Point::ZERO;
        self.detector.cancel();
        tracing::debug!("Zoom state reset");
        self.clamp_and_apply(host);
    }

    /// Clamp the offset for the current scale and push the transform to the child.
    ///
    /// Without child geometry nothing is clamped or applied.
    pub(super) fn clamp_and_apply<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        let Some(child) = host.child_size() else {
            tracing::debug!("No child to transform");
            return;
        };
        let viewport = host.viewport_size();
        let min_zoom = self.config.min_zoom;

        self.offset.x = clamp_translation_with_min(
            self.offset.x,
            child.width,
            viewport.width,
            self.scale,
            min_zoom,
        );
        self.offset.y = clamp_translation_with_min(
            self.offset.y,
            child.height,
            viewport.height,
            self.scale,
            min_zoom,
        );

        let transform = ChildTransform::new(self.scale, self.offset);
        tracing::trace!(
            scale = self.scale,
            tx = transform.translation_x,
            ty = transform.translation_y,
            "Apply child transform"
        );
        host.apply_child_transform(transform);
    }
}

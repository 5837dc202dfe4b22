//! Two-finger pinch recognition.
//!
//! A [`PinchDetector`] is fed every touch event and reports begin, per-step
//! scale and end events. Hosts that already have a platform recognizer can
//! implement the trait over it; [`SpanPinchDetector`] is the built-in one.

use crate::constants::MIN_PINCH_SPAN;
use crate::types::{Point, TouchAction, TouchEvent};

/// Derived pinch event for a single touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchEvent {
    Begin,
    /// Ratio of the current span to the previous span
    Scale { factor: f32 },
    End,
}

pub trait PinchDetector {
    /// Feed a touch event; returns the pinch event it produced, if any.
    fn on_touch_event(&mut self, event: &TouchEvent) -> Option<PinchEvent>;

    /// Returns true between `Begin` and `End`.
    fn is_in_progress(&self) -> bool;

    /// Drop the current pinch without emitting `End` (the listener declined it).
    fn cancel(&mut self);
}

/// Pinch detector based on the span of the active pointers.
///
/// The span is twice the mean distance of the pointers to their centroid,
/// which for two fingers is the distance between them.
#[derive(Debug, Clone)]
pub struct SpanPinchDetector {
    in_progress: bool,
    prev_span: f32,
    min_span: f32,
}

impl Default for SpanPinchDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanPinchDetector {
    pub fn new() -> Self {
        Self::with_min_span(MIN_PINCH_SPAN)
    }

    pub fn with_min_span(min_span: f32) -> Self {
        Self {
            in_progress: false,
            prev_span: 0.0,
            min_span,
        }
    }

    fn try_begin(&mut self, pointers: &[Point]) -> Option<PinchEvent> {
        let span = span_of(pointers)?;
        if span < self.min_span {
            return None;
        }
        self.in_progress = true;
        self.prev_span = span;
        Some(PinchEvent::Begin)
    }

    fn finish(&mut self) -> Option<PinchEvent> {
        if !self.in_progress {
            return None;
        }
        self.in_progress = false;
        self.prev_span = 0.0;
        Some(PinchEvent::End)
    }
}

impl PinchDetector for SpanPinchDetector {
    fn on_touch_event(&mut self, event: &TouchEvent) -> Option<PinchEvent> {
        match event.action {
            TouchAction::Down => {
                // A fresh sequence; drop anything left from a lost Up
                self.in_progress = false;
                None
            }
            TouchAction::PointerDown => {
                if self.in_progress {
                    // A third finger joins; rebase the span without a jump
                    self.prev_span = span_of(&event.pointers).unwrap_or(self.prev_span);
                    None
                } else {
                    self.try_begin(&event.pointers)
                }
            }
            TouchAction::Move => {
                if !self.in_progress {
                    return self.try_begin(&event.pointers);
                }
                let span = span_of(&event.pointers)?;
                let factor = if self.prev_span > 0.0 {
                    span / self.prev_span
                } else {
                    1.0
                };
                self.prev_span = span;
                Some(PinchEvent::Scale { factor })
            }
            TouchAction::PointerUp => {
                if !self.in_progress {
                    return None;
                }
                let remaining: Vec<Point> = event
                    .pointers
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != event.action_index)
                    .map(|(_, p)| *p)
                    .collect();
                match span_of(&remaining) {
                    Some(span) => {
                        self.prev_span = span;
                        None
                    }
                    None => self.finish(),
                }
            }
            TouchAction::Up | TouchAction::Cancel => self.finish(),
        }
    }

    fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    fn cancel(&mut self) {
        self.in_progress = false;
        self.prev_span = 0.0;
    }
}

/// Span of two or more pointers; `None` for fewer.
fn span_of(pointers: &[Point]) -> Option<f32> {
    if pointers.len() < 2 {
        return None;
    }
    let count = pointers.len() as f32;
    let (sum_x, sum_y) = pointers
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let focus = Point::new(sum_x / count, sum_y / count);
    let mean = pointers.iter().map(|p| p.distance_to(focus)).sum::<f32>() / count;
    let span = mean * 2.0;
    span.is_finite().then_some(span)
}

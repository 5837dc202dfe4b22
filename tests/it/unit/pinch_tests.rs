//! Unit tests for pinch scale handling on the gesture machine.

use crate::helpers::{assert_close, init_tracing, RecordingHost};
use zoom_scroll::{ZoomConfig, ZoomGesture};

fn gesture() -> (ZoomGesture, RecordingHost) {
    init_tracing();
    (ZoomGesture::new(ZoomConfig::default()), RecordingHost::new(200.0, 300.0))
}

#[test]
fn test_scale_begin_is_accepted() {
    let (mut gesture, _) = gesture();
    assert!(gesture.on_scale_begin());
}

#[test]
fn test_same_direction_factors_multiply() {
    let (mut gesture, mut host) = gesture();
    assert!(gesture.on_scale(1.5, &mut host));
    gesture.on_scale(1.5, &mut host);
    assert_eq!(gesture.scale(), 2.25);
    assert_eq!(gesture.last_scale_factor(), Some(1.5));
    assert_eq!(host.transforms.len(), 2);
    assert_eq!(host.last_transform().unwrap().scale_x, 2.25);
    assert_eq!(host.last_transform().unwrap().scale_y, 2.25);
}

#[test]
fn test_scale_never_leaves_range() {
    let (mut gesture, mut host) = gesture();
    for _ in 0..20 {
        gesture.on_scale(1.5, &mut host);
        assert!(gesture.scale() >= 1.0 && gesture.scale() <= 4.0);
    }
    assert_eq!(gesture.scale(), 4.0);

    gesture.on_scale_end();
    for _ in 0..20 {
        gesture.on_scale(0.5, &mut host);
        assert!(gesture.scale() >= 1.0 && gesture.scale() <= 4.0);
    }
    assert_eq!(gesture.scale(), 1.0);
}

#[test]
fn test_reversed_sample_is_suppressed() {
    let (mut gesture, mut host) = gesture();
    gesture.on_scale(1.2, &mut host);
    gesture.on_scale(1.1, &mut host);
    let before = gesture.scale();
    assert_close(before, 1.32);

    gesture.on_scale(0.8, &mut host);
    assert_eq!(gesture.scale(), before);
    assert_eq!(gesture.last_scale_factor(), None);
    // Transform is re-applied even for the suppressed sample
    assert_eq!(host.transforms.len(), 3);

    // With the tracker cleared the next contraction applies
    gesture.on_scale(0.8, &mut host);
    assert_close(gesture.scale(), 1.056);
    assert_eq!(gesture.last_scale_factor(), Some(0.8));
}

#[test]
fn test_scale_end_clears_tracker() {
    let (mut gesture, mut host) = gesture();
    gesture.on_scale(1.2, &mut host);
    gesture.on_scale_end();
    assert_eq!(gesture.last_scale_factor(), None);
    gesture.on_scale(0.9, &mut host);
    assert_close(gesture.scale(), 1.08);
}

#[test]
fn test_invalid_factor_ignored() {
    let (mut gesture, mut host) = gesture();
    gesture.on_scale(2.0, &mut host);
    gesture.on_scale(f32::NAN, &mut host);
    gesture.on_scale(0.0, &mut host);
    gesture.on_scale(-1.5, &mut host);
    assert_eq!(gesture.scale(), 2.0);
    assert_eq!(gesture.last_scale_factor(), Some(2.0));
}

#[test]
fn test_neutral_factor_keeps_tracker() {
    let (mut gesture, mut host) = gesture();
    gesture.on_scale(1.5, &mut host);
    gesture.on_scale(1.0, &mut host);
    assert_eq!(gesture.scale(), 1.5);
    assert_eq!(gesture.last_scale_factor(), Some(1.5));
}

#[test]
fn test_scale_without_child_updates_state_only() {
    init_tracing();
    let mut gesture = ZoomGesture::new(ZoomConfig::default());
    let mut host = RecordingHost::empty(200.0);
    gesture.on_scale(2.0, &mut host);
    assert_eq!(gesture.scale(), 2.0);
    assert!(host.transforms.is_empty());
}

//! Touch gesture handling for the zoomable container.
//!
//! ## Architecture
//!
//! A single explicit state machine (`ZoomGesture`) owns the interaction mode,
//! the zoom scale and the pan offsets. Hosts feed it every touch event twice:
//! once through `decide_interception` before the event reaches descendants,
//! and once through `handle_event` when the container itself handles it.
//!
//! ```text
//! None     -> Dragging   (down while zoomed, pointer up, move past slop while zoomed)
//! None     -> Zooming    (second finger down)
//! Dragging -> Zooming    (second finger down)
//! Zooming  -> Dragging   (one of two fingers lifts)
//! Any      -> None       (up / cancel - commits the pan offset)
//! ```
//!
//! ## Modules
//!
//! - `mode` - Interaction mode enum
//! - `clamp` - Translation bounds for scaled content
//! - `pinch` - Pinch detector trait and the default span-based detector
//! - `machine` - The state machine struct, accessors and transform application
//! - `intercept` - Interception decision ahead of child dispatch
//! - `touch` - Full touch handling and pinch callbacks

pub mod clamp;
mod intercept;
mod machine;
mod mode;
pub mod pinch;
mod touch;

pub use clamp::{clamp_translation, clamp_translation_with_min};
pub use machine::{GestureSnapshot, ZoomGesture};
pub use mode::InteractionMode;
pub use pinch::{PinchDetector, PinchEvent, SpanPinchDetector};

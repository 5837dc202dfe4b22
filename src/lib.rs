//! Pinch-zoom and pan for a single child inside a vertically scrolling container.
//!
//! The crate is split into a toolkit-independent gesture state machine
//! ([`gesture::ZoomGesture`]) and a thin adapter ([`view::ZoomScrollView`])
//! that wires it to whatever view system hosts it through the
//! [`host::ViewHost`] trait.
//!
//! ## Modules
//!
//! - `constants` - Zoom limits and gesture thresholds
//! - `config` - Serde-backed configuration with validation
//! - `types` - Touch events, geometry and child transforms
//! - `host` - The boundary to the hosting view system
//! - `gesture` - Interaction mode, clamping, pinch detection and the state machine
//! - `view` - Toolkit-style adapter around the state machine

pub mod config;
pub mod constants;
pub mod gesture;
pub mod host;
pub mod types;
pub mod view;

pub use config::{ConfigError, ConfigResult, ZoomConfig};
pub use gesture::{GestureSnapshot, InteractionMode, PinchDetector, PinchEvent, ZoomGesture};
pub use host::ViewHost;
pub use types::{ChildTransform, Point, Size, TouchAction, TouchEvent};
pub use view::{InterceptPolicy, ZoomScrollView};

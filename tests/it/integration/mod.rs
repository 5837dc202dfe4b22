//! Integration tests driving full touch sequences through `ZoomScrollView`.

//! Unit tests for zoom-scroll.

mod pinch_tests;

//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices.
//!
//! Structure:
//! - helpers: Recording host, event builders, tracing setup
//! - integration: Full touch sequences through the view adapter
//! - unit: Single-component unit tests

mod integration;
mod unit;

//! Application layer containing the tip calculation entry points.
//!
//! This module defines the `TipEngine`, which pairs the pure tip formula with an
//! injected currency formatter. The engine holds no mutable state, so a single
//! instance can serve every change event a front end produces.

pub mod engine;

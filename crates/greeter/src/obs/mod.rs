//! Lightweight in-process HTTP metrics (dependency-free).
//!
//! Counters and histograms are stored as atomics behind `DashMap` and
//! rendered by the `/metrics` handler. One middleware layer records every
//! request; no metrics crate is pulled in.

pub mod metrics;
pub mod middleware;

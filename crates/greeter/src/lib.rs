//! greeter server library entry.
//!
//! This crate wires the config layer, the greeting route, the ops endpoints,
//! and HTTP metrics into a small axum service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod routes;

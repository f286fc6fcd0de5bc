//! greeter core: error types shared by the server and its tests.
//!
//! This crate defines the error surface for the greeter service. It carries
//! no transport or runtime dependencies so it stays cheap to depend on from
//! tooling and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GreeterError`/`Result` so the
//! server process does not crash on bad configuration.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;

/// Shared result type.
pub use error::{GreeterError, Result};

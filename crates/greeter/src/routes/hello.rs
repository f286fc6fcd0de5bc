//! The greeting route.
//!
//! `GET /` responds 200 with exactly `Hello, World!` (13 bytes, no trailing
//! newline). The handler reads nothing from the request and holds no state,
//! so repeated requests are byte-identical.

pub const GREETING: &str = "Hello, World!";

pub async fn hello() -> &'static str {
    GREETING
}

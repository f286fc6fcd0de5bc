//! Application routes.

pub mod hello;

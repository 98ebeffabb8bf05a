//! Tracing initialization for degrees.

pub mod setup;

pub use setup::init_tracing;

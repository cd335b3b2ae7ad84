//! Core types and trait definitions for the Karma contribution scorer.
//!
//! This crate is deliberately free of database and runtime dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod classify;
pub mod contribution;
pub mod error;
pub mod event;
pub mod score;
pub mod source;
pub mod store;

pub use error::{Error, Result};

// server/src/lib.rs

//! Tape Store HTTP service: an actix-web front over the `tapestore` domain
//! library. Exposed as a library so the integration tests can assemble the
//! same app the binary runs.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;

//! Plumbing shared by the inventory service crates.
//!
//! Configuration loading, the JSON error envelope, the liveness handler, the
//! request-id layer and tracing initialisation.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;

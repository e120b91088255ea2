//! relcheck - A deployment gate that verifies a release checklist before deploying
//!
//! This library provides the core functionality for selecting a release
//! checklist issue from the tracker, parsing its checkbox list into typed
//! tasks, and deciding whether a deployment may proceed for a given host.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod classify;
pub mod config;
pub mod evaluator;
pub mod output;
pub mod parser;
pub mod storage;
pub mod tracker;
pub mod version;

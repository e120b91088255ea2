//! relcheck - A deployment gate that verifies a release checklist before deploying
//!
//! The binary exposes the two pipeline hooks as subcommands: `check` runs
//! before the deploy action and aborts it while mandatory checklist tasks
//! remain unresolved; `remind` runs after a successful deploy and lists the
//! post-release tasks still pending.

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

mod cli;
mod commands;

/// Main entry point for the relcheck CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

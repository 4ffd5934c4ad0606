#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the journal, filtering, summary, and rendering
//! primitives behind a single-user expense log, plus the interactive CLI
//! that fronts them.

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod filter;
pub mod journal;
pub mod render;
pub mod storage;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

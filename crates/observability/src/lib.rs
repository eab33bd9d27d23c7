//! Process-wide logging for storefront binaries.

pub mod tracing;

/// Install the storefront subscriber. Safe to call more than once.
pub fn init() {
    tracing::init();
}

//! # Warble Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Module behavior against mock sessions and backends
//!     └── private_storage.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p warble-tests
//!
//! # By category
//! cargo test -p warble-tests integration::
//! ```

pub mod integration;

/// Install the logging subscriber once per test binary.
pub fn init_logging() {
    warble_telemetry::init_for_tests();
}

//! Cross-crate integration scenarios.

pub mod private_storage;

//! Storage backend adapters.

pub mod faulty;
pub mod memory;

pub use faulty::FaultyBackend;
pub use memory::MemoryBackend;

//! Object store implementations.
//!
//! Available backends:
//! - `MemoryObjectStore` - In-memory storage (tests, development)
//! - `LocalObjectStore` - Directory-per-bucket storage on the local filesystem

pub mod local;
pub mod memory;

pub use local::LocalObjectStore;
pub use memory::MemoryObjectStore;

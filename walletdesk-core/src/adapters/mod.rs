//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-process map for the KeyValueStore port (tests, throwaway sessions)
//! - JSON file on disk for the KeyValueStore port

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

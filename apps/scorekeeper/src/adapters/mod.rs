//! Storage adapters implementing `repos::GameRepo`.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRepo;
pub use json_file::JsonFileRepo;

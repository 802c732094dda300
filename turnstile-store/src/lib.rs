pub mod app_config;
pub mod json_store;
pub mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::InMemoryStore;

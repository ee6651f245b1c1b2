//! Implementations of the user directory collaborator.

pub mod in_memory;

pub use in_memory::InMemoryUserDirectory;

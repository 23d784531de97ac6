//! Journal store implementations for healthjournal.

pub mod in_memory;

pub use in_memory::InMemoryJournal;

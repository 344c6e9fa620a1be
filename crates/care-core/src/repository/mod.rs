//! Repository Layer
//!
//! Storage abstraction plus the completion store built on it.

mod completion_store;
mod memory;
mod traits;


pub use completion_store::{day_key, CompletionLog, CompletionStore, COMPLETION_KEY};
pub use memory::MemoryBackend;
pub use traits::StorageBackend;

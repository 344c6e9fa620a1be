//! Repository Layer - Storage Trait
//!
//! A string key-value store. Implementations: in-memory (tests, native tools)
//! and browser `localStorage` (web app).

use crate::error::CareResult;

/// Host key-value storage
///
/// Takes `&self` because host storages (like `localStorage`) are handles with
/// interior mutability.
pub trait StorageBackend {
    /// Raw value under `key`, `None` when nothing is stored
    fn read(&self, key: &str) -> CareResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> CareResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> CareResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> CareResult<()> {
        (**self).write(key, value)
    }
}

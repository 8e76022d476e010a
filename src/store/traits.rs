use crate::store::error::StoreError;

/// Byte-level durable storage addressed by collection name.
///
/// `read` distinguishes "never written" (`Ok(None)`) from real failures; the
/// collection store recovers absence with the collection's initial value.
/// `write` must be all-or-nothing: a concurrent reader may observe the old
/// bytes or the new bytes, never a torn file.
#[async_trait::async_trait]
pub trait CollectionBacking: Send + Sync {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

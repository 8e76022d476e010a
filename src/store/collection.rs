use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::codec;
use crate::store::error::StoreError;
use crate::store::locks::LockRegistry;
use crate::store::traits::CollectionBacking;

/// A named record collection the store knows how to persist.
///
/// `NAME` is the stable logical name (and durable file stem); `initial` is the
/// value an unwritten collection decodes to.
pub trait Collection: Serialize + DeserializeOwned + Send + 'static {
    const NAME: &'static str;

    fn initial() -> Self;
}

/// What a mutation decided to do with the collection value.
///
/// `Discard` carries a result but skips the write entirely, so no-op
/// transformations (add of an already-present id, upsert to the same status)
/// never churn storage.
pub enum Outcome<R> {
    Commit(R),
    Discard(R),
}

/// Atomic load-modify-persist over named collections.
///
/// Every call re-reads the backing bytes under the collection's exclusive
/// guard; the store caches nothing across calls, so the durable document stays
/// the single source of truth.
pub struct CollectionStore<B> {
    backing: B,
    locks: LockRegistry,
}

impl<B: CollectionBacking> CollectionStore<B> {
    pub fn new(backing: B) -> Self {
        Self {
            backing,
            locks: LockRegistry::new(),
        }
    }

    /// Read the current value of a collection. Never writes.
    pub async fn get<C: Collection>(&self) -> Result<C, StoreError> {
        let _guard = self.locks.acquire(C::NAME).await;
        self.load::<C>().await
    }

    /// Run one read-modify-write cycle under the collection's guard.
    ///
    /// `apply` receives the decoded value and decides whether the result is
    /// worth persisting. On `Err` or `Outcome::Discard` storage is left
    /// untouched; on `Outcome::Commit` the new value is encoded and written
    /// all-or-nothing. The guard is released on every exit path.
    pub async fn mutate<C, R, E, F>(&self, apply: F) -> Result<R, E>
    where
        C: Collection,
        E: From<StoreError>,
        F: FnOnce(&mut C) -> Result<Outcome<R>, E>,
    {
        let _guard = self.locks.acquire(C::NAME).await;
        let mut value = self.load::<C>().await.map_err(E::from)?;
        match apply(&mut value)? {
            Outcome::Commit(result) => {
                let bytes = codec::encode(&value).map_err(E::from)?;
                self.backing.write(C::NAME, &bytes).await.map_err(E::from)?;
                Ok(result)
            }
            Outcome::Discard(result) => Ok(result),
        }
    }

    async fn load<C: Collection>(&self) -> Result<C, StoreError> {
        match self.backing.read(C::NAME).await? {
            Some(bytes) => codec::decode(C::NAME, &bytes),
            None => Ok(C::initial()),
        }
    }
}

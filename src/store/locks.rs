use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-collection exclusive-access guards, created lazily, one per distinct
/// name. Operations on different collections never contend.
///
/// The registry map itself is behind a short-held `parking_lot` lock: it is
/// only taken for the lookup-or-insert, never across the I/O cycle. The
/// per-name mutex is a tokio mutex because its guard is held across the
/// backing store's read/write awaits.
#[derive(Debug, Default)]
pub struct LockRegistry {
    guards: parking_lot::Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the exclusive guard for `name`, creating it on first use.
    pub async fn acquire(&self, name: &str) -> OwnedMutexGuard<()> {
        let guard = {
            let mut guards = self.guards.lock();
            guards
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        guard.lock_owned().await
    }
}

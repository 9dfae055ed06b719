//! Query cache with typed keys and change notification.
//!
//! Reads go through [`QueryCache::fetch`]: a fresh cached value is returned
//! without touching the backend, a stale or missing one triggers the loader.
//! Mutations run through [`QueryCache::mutate`], which invalidates the
//! affected keys only after the mutation succeeds. Interested parties
//! subscribe to a key and get woken whenever its value changes or goes
//! stale.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::trace;

use hearth_shared::{DataError, FamilyId, Result, UserId};

/// Cache key, one per query the UI can render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CurrentUser,
    Users,
    User(UserId),
    Families(UserId),
    Tasks(FamilyId),
    Categories,
    Events(UserId),
    /// Viewer-scoped: the anonymity scrub makes the cached value depend on
    /// who is looking, so two viewers must never share a slot.
    Wishlist { owner: UserId, viewer: UserId },
    Friends(UserId),
    FriendRequests(UserId),
}

struct Slot {
    value: Option<serde_json::Value>,
    stale: bool,
    version: u64,
    tx: watch::Sender<u64>,
}

impl Slot {
    fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            value: None,
            stale: true,
            version: 0,
            tx,
        }
    }

    fn bump(&mut self) {
        self.version += 1;
        let _ = self.tx.send(self.version);
    }
}

/// Keyed cache shared by all hooks of one app instance.
#[derive(Default)]
pub struct QueryCache {
    slots: Mutex<HashMap<QueryKey, Slot>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `loader` and cache its
    /// result. The slot lock is never held across the load.
    pub async fn fetch<T, F>(&self, key: QueryKey, loader: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<T>>,
    {
        {
            let slots = self.lock();
            if let Some(slot) = slots.get(&key) {
                if !slot.stale {
                    if let Some(value) = &slot.value {
                        trace!(?key, "cache hit");
                        return serde_json::from_value(value.clone())
                            .map_err(|e| DataError::Storage(format!("cached value: {e}")));
                    }
                }
            }
        }

        trace!(?key, "cache miss");
        let loaded = loader.await?;
        let value = serde_json::to_value(&loaded)
            .map_err(|e| DataError::Storage(format!("cache encode: {e}")))?;

        let mut slots = self.lock();
        let slot = slots.entry(key).or_insert_with(Slot::new);
        slot.value = Some(value);
        slot.stale = false;
        slot.bump();
        Ok(loaded)
    }

    /// Mark one key stale and wake its subscribers.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.lock();
        if let Some(slot) = slots.get_mut(key) {
            slot.stale = true;
            slot.bump();
        }
    }

    /// Mark every wishlist key stale. Bookings change what other viewers are
    /// allowed to see, so no single owner's key suffices.
    pub fn invalidate_wishlists(&self) {
        let mut slots = self.lock();
        for (key, slot) in slots.iter_mut() {
            if matches!(key, QueryKey::Wishlist { .. }) {
                slot.stale = true;
                slot.bump();
            }
        }
    }

    /// Subscribe to change notifications for `key`. The receiver yields the
    /// slot's version counter; any change of value or staleness bumps it.
    pub fn subscribe(&self, key: QueryKey) -> watch::Receiver<u64> {
        let mut slots = self.lock();
        slots.entry(key).or_insert_with(Slot::new).tx.subscribe()
    }

    /// Run a mutation and, only if it succeeds, invalidate `keys`.
    pub async fn mutate<T, F>(&self, keys: &[QueryKey], mutation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let out = mutation.await?;
        for key in keys {
            self.invalidate(key);
        }
        Ok(out)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<QueryKey, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_caches_until_invalidated() {
        let cache = QueryCache::new();
        let key = QueryKey::Categories;

        let first: u32 = cache.fetch(key.clone(), async { Ok(1) }).await.unwrap();
        assert_eq!(first, 1);

        // Fresh hit: the loader must not run.
        let second: u32 = cache
            .fetch(key.clone(), async { panic!("loader ran on a fresh slot") })
            .await
            .unwrap();
        assert_eq!(second, 1);

        cache.invalidate(&key);
        let third: u32 = cache.fetch(key, async { Ok(2) }).await.unwrap();
        assert_eq!(third, 2);
    }

    #[tokio::test]
    async fn failed_mutations_do_not_invalidate() {
        let cache = QueryCache::new();
        let key = QueryKey::Users;
        let _: u32 = cache.fetch(key.clone(), async { Ok(7) }).await.unwrap();

        let result: Result<()> = cache
            .mutate(&[key.clone()], async {
                Err(DataError::Conflict("nope".into()))
            })
            .await;
        assert!(result.is_err());

        let cached: u32 = cache
            .fetch(key, async { panic!("slot must still be fresh") })
            .await
            .unwrap();
        assert_eq!(cached, 7);
    }

    #[tokio::test]
    async fn subscribers_wake_on_invalidation() {
        let cache = QueryCache::new();
        let key = QueryKey::Wishlist {
            owner: "1".into(),
            viewer: "2".into(),
        };
        let mut rx = cache.subscribe(key.clone());
        let baseline = *rx.borrow_and_update();

        let _: u32 = cache.fetch(key.clone(), async { Ok(1) }).await.unwrap();
        cache.invalidate_wishlists();

        rx.changed().await.unwrap();
        assert!(*rx.borrow() > baseline);

        // Unrelated keys stay quiet.
        let mut other = cache.subscribe(QueryKey::Friends("1".into()));
        assert!(!other.has_changed().unwrap());
    }
}

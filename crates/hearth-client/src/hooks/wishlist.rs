//! Wishlist hook, scoped to the signed-in viewer.
//!
//! Booking and cancelling invalidate every cached wishlist, not just the
//! owner's: the same mutation changes what the owner, the booker, and every
//! other friend are allowed to see.

use std::sync::Arc;

use tokio::sync::watch;

use hearth_shared::{ItemId, NewWishlistItem, Result, UserId, WishlistItem};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct WishlistHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    viewer_id: UserId,
}

impl WishlistHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, viewer_id: UserId) -> Self {
        Self {
            service,
            cache,
            viewer_id,
        }
    }

    /// Cache key for one owner's list as seen by this hook's viewer. Keys
    /// carry the viewer because the cached value is already anonymized.
    fn key(&self, owner_id: &UserId) -> QueryKey {
        QueryKey::Wishlist {
            owner: owner_id.clone(),
            viewer: self.viewer_id.clone(),
        }
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self, owner_id: &UserId) -> Option<Vec<WishlistItem>> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().wishlist_of(owner_id, &self.viewer_id)),
            Mode::Remote => None,
        }
    }

    /// Another user's wishlist, as this viewer may see it.
    pub async fn items_of(&self, owner_id: &UserId) -> Result<Vec<WishlistItem>> {
        self.cache
            .fetch(
                self.key(owner_id),
                self.service.wishlist_of(owner_id, &self.viewer_id),
            )
            .await
    }

    /// The viewer's own list. Bookings on it stay anonymous.
    pub async fn my_items(&self) -> Result<Vec<WishlistItem>> {
        self.items_of(&self.viewer_id).await
    }

    pub async fn create_item(&self, draft: &NewWishlistItem) -> Result<WishlistItem> {
        self.cache
            .mutate(&[self.key(&draft.user_id)], self.service.create_item(draft))
            .await
    }

    pub async fn book_item(&self, id: &ItemId) -> Result<WishlistItem> {
        let item = self.service.book_item(id, &self.viewer_id).await?;
        self.cache.invalidate_wishlists();
        Ok(item)
    }

    pub async fn cancel_booking(&self, id: &ItemId) -> Result<WishlistItem> {
        let item = self.service.cancel_booking(id).await?;
        self.cache.invalidate_wishlists();
        Ok(item)
    }

    pub async fn delete_item(&self, id: &ItemId, owner_id: &UserId) -> Result<()> {
        self.cache
            .mutate(&[self.key(owner_id)], self.service.delete_item(id))
            .await
    }

    pub fn subscribe(&self, owner_id: &UserId) -> watch::Receiver<u64> {
        self.cache.subscribe(self.key(owner_id))
    }
}

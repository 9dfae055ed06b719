//! Wishlist operations, both backends.
//!
//! The anonymity rule is enforced again on remote responses: even if a
//! server leaks the booker, the client scrubs it before anything renders.

use hearth_shared::{
    ItemId, NewWishlistItem, Result, UserId, WishlistItem, WishlistPatchBody,
};

use crate::config::Mode;
use crate::service::DataService;

impl DataService {
    pub async fn wishlist_of(
        &self,
        owner_id: &UserId,
        viewer_id: &UserId,
    ) -> Result<Vec<WishlistItem>> {
        match self.mode() {
            Mode::Local => Ok(self.store().wishlist_of(owner_id, viewer_id)),
            Mode::Remote => {
                let items: Vec<WishlistItem> = self
                    .api()
                    .get(&format!(
                        "/wishlist?user_id={}&current_user_id={}",
                        owner_id.as_str(),
                        viewer_id.as_str()
                    ))
                    .await?;
                Ok(items
                    .into_iter()
                    .map(|w| w.anonymized_for(viewer_id))
                    .collect())
            }
        }
    }

    pub async fn create_item(&self, draft: &NewWishlistItem) -> Result<WishlistItem> {
        draft.validate()?;
        match self.mode() {
            Mode::Local => self.store().create_item(draft),
            Mode::Remote => self.api().post("/wishlist", draft).await,
        }
    }

    pub async fn book_item(&self, id: &ItemId, booker_id: &UserId) -> Result<WishlistItem> {
        match self.mode() {
            Mode::Local => self.store().book_item(id, booker_id),
            Mode::Remote => {
                let body = WishlistPatchBody::Book {
                    item_id: id.clone(),
                    booked_by: booker_id.clone(),
                };
                self.api().patch("/wishlist", &body).await
            }
        }
    }

    pub async fn cancel_booking(&self, id: &ItemId) -> Result<WishlistItem> {
        match self.mode() {
            Mode::Local => self.store().cancel_booking(id),
            Mode::Remote => {
                let body = WishlistPatchBody::Cancel {
                    item_id: id.clone(),
                };
                self.api().patch("/wishlist", &body).await
            }
        }
    }

    pub async fn delete_item(&self, id: &ItemId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().delete_item(id),
            Mode::Remote => {
                let _: bool = self
                    .api()
                    .delete(&format!("/wishlist?id={}", id.as_str()))
                    .await?;
                Ok(())
            }
        }
    }
}

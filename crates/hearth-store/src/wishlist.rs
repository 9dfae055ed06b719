//! Wishlist and booking operations.
//!
//! Bookings are anonymous towards the item's owner: read paths go through
//! [`select::wishlist_for_viewer`], which scrubs the booker identity for
//! everyone except the booker themself.

use chrono::Utc;

use hearth_shared::{DataError, ItemId, NewWishlistItem, Result, UserId, WishlistItem};

use crate::select;
use crate::store::EntityStore;

impl EntityStore {
    /// One user's wishlist as `viewer` is allowed to see it.
    pub fn wishlist_of(&self, owner_id: &UserId, viewer_id: &UserId) -> Vec<WishlistItem> {
        select::wishlist_for_viewer(&self.lock().wishlist_items, owner_id, viewer_id)
    }

    /// Items are always created unbooked.
    pub fn create_item(&self, draft: &NewWishlistItem) -> Result<WishlistItem> {
        draft.validate()?;

        let mut data = self.lock();
        if !data.users.iter().any(|u| u.id == draft.user_id) {
            return Err(DataError::NotFound("user"));
        }

        let item = WishlistItem {
            id: ItemId::generate(),
            user_id: draft.user_id.clone(),
            title: draft.title.trim().to_string(),
            description: draft.description.clone(),
            link: draft.link.clone(),
            price: draft.price,
            image_url: draft.image_url.clone(),
            is_booked: false,
            booked_by: None,
            booked_at: None,
            created_at: Some(Utc::now()),
        };
        data.wishlist_items.push(item.clone());
        self.persist(&data);
        Ok(item)
    }

    /// Book an item for gifting. Owners cannot book their own items, and an
    /// already-booked item stays with its first booker.
    pub fn book_item(&self, id: &ItemId, booker_id: &UserId) -> Result<WishlistItem> {
        let mut data = self.lock();
        let item = data
            .wishlist_items
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or(DataError::NotFound("wishlist item"))?;

        if &item.user_id == booker_id {
            return Err(DataError::Validation(
                "cannot book an item on your own wishlist".into(),
            ));
        }
        if item.is_booked {
            return Err(DataError::Conflict("item is already booked".into()));
        }

        item.is_booked = true;
        item.booked_by = Some(booker_id.clone());
        item.booked_at = Some(Utc::now());

        let updated = item.clone();
        self.persist(&data);
        Ok(updated)
    }

    /// Release a booking, making the item available again.
    pub fn cancel_booking(&self, id: &ItemId) -> Result<WishlistItem> {
        let mut data = self.lock();
        let item = data
            .wishlist_items
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or(DataError::NotFound("wishlist item"))?;

        if !item.is_booked {
            return Err(DataError::Conflict("item is not booked".into()));
        }

        item.is_booked = false;
        item.booked_by = None;
        item.booked_at = None;

        let updated = item.clone();
        self.persist(&data);
        Ok(updated)
    }

    /// Delete an item. Booked items are protected so a committed gift does
    /// not silently vanish under its booker.
    pub fn delete_item(&self, id: &ItemId) -> Result<()> {
        let mut data = self.lock();
        let item = data
            .wishlist_items
            .iter()
            .find(|w| &w.id == id)
            .ok_or(DataError::NotFound("wishlist item"))?;

        if item.is_booked {
            return Err(DataError::Conflict(
                "booked items cannot be deleted".into(),
            ));
        }

        data.wishlist_items.retain(|w| &w.id != id);
        self.persist(&data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_items_start_unbooked() {
        let store = EntityStore::in_memory();
        let item = store
            .create_item(&NewWishlistItem {
                user_id: "2".into(),
                title: "Наушники".into(),
                description: None,
                link: None,
                price: Some(12990.0),
                image_url: None,
            })
            .unwrap();

        assert!(!item.is_booked);
        assert!(item.booked_by.is_none());
    }

    #[test]
    fn booking_is_first_come_first_served() {
        let store = EntityStore::in_memory();

        // w1 belongs to user 1 and is free.
        let item = store.book_item(&"w1".into(), &"4".into()).unwrap();
        assert!(item.is_booked);
        assert_eq!(item.booked_by, Some("4".into()));

        assert!(matches!(
            store.book_item(&"w1".into(), &"5".into()),
            Err(DataError::Conflict(_))
        ));
    }

    #[test]
    fn owners_cannot_book_their_own_items() {
        let store = EntityStore::in_memory();
        assert!(matches!(
            store.book_item(&"w1".into(), &"1".into()),
            Err(DataError::Validation(_))
        ));
    }

    #[test]
    fn cancel_frees_the_item_for_rebooking() {
        let store = EntityStore::in_memory();

        // w3 is booked in the starting data.
        let item = store.cancel_booking(&"w3".into()).unwrap();
        assert!(!item.is_booked);
        assert!(item.booked_by.is_none());
        assert!(item.booked_at.is_none());

        assert!(matches!(
            store.cancel_booking(&"w3".into()),
            Err(DataError::Conflict(_))
        ));

        store.book_item(&"w3".into(), &"5".into()).unwrap();
    }

    #[test]
    fn booked_items_cannot_be_deleted() {
        let store = EntityStore::in_memory();

        assert!(matches!(
            store.delete_item(&"w3".into()),
            Err(DataError::Conflict(_))
        ));

        store.delete_item(&"w1".into()).unwrap();
        assert!(matches!(
            store.delete_item(&"w1".into()),
            Err(DataError::NotFound("wishlist item"))
        ));
    }

    #[test]
    fn owner_view_hides_the_booker() {
        let store = EntityStore::in_memory();
        let owner: UserId = "1".into();

        let view = store.wishlist_of(&owner, &owner);
        let booked = view.iter().find(|w| w.id.as_str() == "w3").unwrap();
        assert!(booked.is_booked);
        assert!(booked.booked_by.is_none());
    }
}

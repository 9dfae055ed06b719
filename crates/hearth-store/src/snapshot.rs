//! JSON snapshot persistence.
//!
//! The snapshot carries the user-owned collections only; categories are
//! static reference data and the family selection is transient UI state, so
//! both always come from the seed on rehydration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hearth_shared::{Event, FamilyGroup, FriendRequest, Friendship, Task, User, WishlistItem};

use crate::seed;
use crate::store::StoreData;

/// On-disk snapshot payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPayload {
    /// ISO 8601 timestamp of when the snapshot was written.
    pub created_at: String,
    /// Crate version that produced the snapshot.
    pub version: String,
    pub current_user: User,
    pub users: Vec<User>,
    pub families: Vec<FamilyGroup>,
    pub friendships: Vec<Friendship>,
    pub friend_requests: Vec<FriendRequest>,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub wishlist_items: Vec<WishlistItem>,
}

/// Load a snapshot and overlay it on the seed. `None` on a missing or
/// corrupt file, in which case the caller starts from the seed alone.
pub(crate) fn load(path: &Path) -> Option<StoreData> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read store snapshot");
            return None;
        }
    };

    let payload: SnapshotPayload = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corrupt store snapshot, using seed");
            return None;
        }
    };

    let mut data = seed::store_data();
    data.current_user = payload.current_user;
    data.users = payload.users;
    data.families = payload.families;
    data.friendships = payload.friendships;
    data.friend_requests = payload.friend_requests;
    data.tasks = payload.tasks;
    data.events = payload.events;
    data.wishlist_items = payload.wishlist_items;
    data.selected_family_id = data.families.first().map(|f| f.id.clone());
    Some(data)
}

pub(crate) fn save(path: &Path, data: &StoreData) -> std::io::Result<()> {
    let payload = SnapshotPayload {
        created_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        current_user: data.current_user.clone(),
        users: data.users.clone(),
        families: data.families.clone(),
        friendships: data.friendships.clone(),
        friend_requests: data.friend_requests.clone(),
        tasks: data.tasks.clone(),
        events: data.events.clone(),
        wishlist_items: data.wishlist_items.clone(),
    };

    let json = serde_json::to_string(&payload).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut data = seed::store_data();
        data.current_user.first_name = "Ваня".into();
        save(&path, &data).unwrap();

        let loaded = load(&path).expect("snapshot should load");
        assert_eq!(loaded.current_user.first_name, "Ваня");
        // Categories are never persisted: they come back from the seed.
        assert_eq!(loaded.categories.len(), seed::store_data().categories.len());
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_none());
    }
}

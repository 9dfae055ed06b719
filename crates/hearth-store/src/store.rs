//! Store handle and lifecycle.
//!
//! [`EntityStore`] owns every domain collection behind one mutex. It is an
//! explicitly constructed object with a defined lifecycle (open at startup,
//! `reset` on demand) — callers receive it by `Arc`, nothing is process
//! global.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use hearth_shared::{
    DataError, Event, FamilyGroup, FamilyId, FriendRequest, Friendship, Result, Task,
    TaskCategory, User, WishlistItem,
};

use crate::seed;
use crate::snapshot;

/// All domain collections plus the client-local family selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoreData {
    pub current_user: User,
    pub users: Vec<User>,
    pub families: Vec<FamilyGroup>,
    pub friendships: Vec<Friendship>,
    pub friend_requests: Vec<FriendRequest>,
    pub tasks: Vec<Task>,
    pub categories: Vec<TaskCategory>,
    pub events: Vec<Event>,
    pub wishlist_items: Vec<WishlistItem>,
    /// Which family group the UI currently shows. Not persisted.
    pub selected_family_id: Option<FamilyId>,
}

/// The local-mode source of truth for all entities.
pub struct EntityStore {
    data: Mutex<StoreData>,
    path: Option<PathBuf>,
}

impl EntityStore {
    /// Open (or create) the store in the platform data directory:
    /// - Linux:   `~/.local/share/hearth/store.json`
    /// - macOS:   `~/Library/Application Support/app.hearth.hearth/store.json`
    /// - Windows: `{FOLDERID_RoamingAppData}\hearth\hearth\data\store.json`
    pub fn open() -> Result<Self> {
        let project_dirs = ProjectDirs::from("app", "hearth", "hearth").ok_or_else(|| {
            DataError::Storage("could not determine application data directory".into())
        })?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| DataError::Storage(format!("creating {}: {e}", data_dir.display())))?;

        let store_path = data_dir.join("store.json");
        tracing::info!(path = %store_path.display(), "opening entity store");

        Ok(Self::open_at(&store_path))
    }

    /// Open a store backed by an explicit snapshot path.
    ///
    /// Useful for tests and custom directory layouts. A missing or corrupt
    /// snapshot is not an error: the store starts from the demo seed.
    pub fn open_at(path: &Path) -> Self {
        let data = snapshot::load(path).unwrap_or_else(seed::store_data);
        Self {
            data: Mutex::new(data),
            path: Some(path.to_path_buf()),
        }
    }

    /// A store that never touches the filesystem. Used in remote mode (where
    /// the store only carries client-local state) and in tests.
    pub fn in_memory() -> Self {
        Self {
            data: Mutex::new(seed::store_data()),
            path: None,
        }
    }

    /// Discard everything and restore the demo seed.
    pub fn reset(&self) {
        let mut data = self.lock();
        *data = seed::store_data();
        self.persist(&data);
    }

    /// Filesystem path of the snapshot, if the store is persistent.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ------------------------------------------------------------------
    // Internals shared by the per-entity operation modules
    // ------------------------------------------------------------------

    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreData> {
        // Mutations never panic while holding the lock, so a poisoned mutex
        // still contains consistent data.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write the snapshot. Persistence failures are logged, never surfaced:
    /// the in-memory state is already consistent and remains authoritative.
    pub(crate) fn persist(&self, data: &StoreData) {
        let Some(path) = &self.path else { return };
        if let Err(e) = snapshot::save(path, data) {
            tracing::warn!(path = %path.display(), error = %e, "failed to persist store snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_starts_from_seed() {
        let store = EntityStore::in_memory();
        assert_eq!(store.current_user().id.as_str(), "1");
        assert_eq!(store.list_users().len(), 5);
        assert!(store.path().is_none());
    }

    #[test]
    fn open_at_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = EntityStore::open_at(&path);
        store
            .create_family("Дача", &"1".into())
            .expect("should create family");
        drop(store);

        let reopened = EntityStore::open_at(&path);
        let families = reopened.families_for(&"1".into());
        assert!(families.iter().any(|f| f.name == "Дача"));
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = EntityStore::open_at(&path);
        assert_eq!(store.list_users().len(), 5);
    }

    #[test]
    fn reset_restores_seed() {
        let store = EntityStore::in_memory();
        store
            .delete_task(&"t1".into())
            .expect("seed task t1 is active");
        assert!(store
            .tasks_for_family(&"f1".into(), None)
            .iter()
            .all(|t| t.id.as_str() != "t1"));

        store.reset();
        assert!(store
            .tasks_for_family(&"f1".into(), None)
            .iter()
            .any(|t| t.id.as_str() == "t1"));
    }
}

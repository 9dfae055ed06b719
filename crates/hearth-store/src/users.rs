//! User operations.

use hearth_shared::{DataError, PlatformIdentity, Result, User, UserId, UserPatch};

use crate::store::EntityStore;

/// Search results are capped to keep the friend-search list short.
const SEARCH_LIMIT: usize = 20;

impl EntityStore {
    pub fn current_user(&self) -> User {
        self.lock().current_user.clone()
    }

    /// Idempotent sign-in upsert keyed by the platform id.
    ///
    /// Matches an existing user by `telegram_id` and refreshes the profile
    /// fields the platform provides; otherwise creates a new account. Either
    /// way the resolved user becomes the current user.
    pub fn upsert_current_user(&self, identity: &PlatformIdentity) -> User {
        let mut data = self.lock();

        let user = match data
            .users
            .iter_mut()
            .find(|u| u.telegram_id == identity.telegram_id)
        {
            Some(user) => {
                user.username = identity.username.clone();
                user.first_name = identity.first_name.clone();
                user.last_name = identity.last_name.clone();
                user.avatar_url = identity.avatar_url.clone();
                user.clone()
            }
            None => {
                let user = User {
                    id: UserId::generate(),
                    telegram_id: identity.telegram_id,
                    username: identity.username.clone(),
                    first_name: identity.first_name.clone(),
                    last_name: identity.last_name.clone(),
                    avatar_url: identity.avatar_url.clone(),
                    birthday: None,
                    show_birthday: true,
                    created_at: Some(chrono::Utc::now()),
                };
                data.users.push(user.clone());
                user
            }
        };

        data.current_user = user.clone();
        self.persist(&data);
        user
    }

    pub fn get_user(&self, id: &UserId) -> Result<User> {
        self.lock()
            .users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(DataError::NotFound("user"))
    }

    pub fn list_users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Case-insensitive substring search over username and first name,
    /// excluding the current user, capped at [`SEARCH_LIMIT`] results.
    pub fn search_users(&self, query: &str) -> Vec<User> {
        let data = self.lock();
        let needle = query.to_lowercase();
        data.users
            .iter()
            .filter(|u| u.id != data.current_user.id)
            .filter(|u| {
                u.first_name.to_lowercase().contains(&needle)
                    || u.username
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Apply a partial profile update.
    pub fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User> {
        let mut data = self.lock();

        let user = data
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(DataError::NotFound("user"))?;

        if let Some(username) = &patch.username {
            user.username = Some(username.clone());
        }
        if let Some(first_name) = &patch.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            user.last_name = Some(last_name.clone());
        }
        if let Some(avatar_url) = &patch.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
        if let Some(birthday) = patch.birthday {
            user.birthday = Some(birthday);
        }
        if let Some(show_birthday) = patch.show_birthday {
            user.show_birthday = show_birthday;
        }

        let updated = user.clone();
        if data.current_user.id == *id {
            data.current_user = updated.clone();
        }
        self.persist(&data);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_matches_by_platform_id() {
        let store = EntityStore::in_memory();
        let before = store.list_users().len();

        let user = store.upsert_current_user(&PlatformIdentity {
            telegram_id: 123456789,
            username: Some("ivan_new".into()),
            first_name: "Иван".into(),
            last_name: Some("Иванов".into()),
            avatar_url: None,
        });

        // Same platform id: no new account, profile refreshed.
        assert_eq!(store.list_users().len(), before);
        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.username.as_deref(), Some("ivan_new"));
        assert_eq!(store.current_user().username.as_deref(), Some("ivan_new"));
    }

    #[test]
    fn upsert_creates_unknown_platform_user() {
        let store = EntityStore::in_memory();
        let before = store.list_users().len();

        let user = store.upsert_current_user(&PlatformIdentity {
            telegram_id: 42,
            username: None,
            first_name: "Новый".into(),
            last_name: None,
            avatar_url: None,
        });

        assert_eq!(store.list_users().len(), before + 1);
        assert!(user.show_birthday);
        assert_eq!(store.current_user().id, user.id);
    }

    #[test]
    fn search_excludes_current_user_and_is_case_insensitive() {
        let store = EntityStore::in_memory();

        let hits = store.search_users("IVANOVA");
        // Matches Мария (username maria_ivanova) but never the current user,
        // even though his username would match too.
        assert!(hits.iter().all(|u| u.id.as_str() != "1"));
        assert!(hits.iter().any(|u| u.id.as_str() == "2"));

        let hits = store.search_users("petr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "3");
    }

    #[test]
    fn update_user_touches_only_patched_fields() {
        let store = EntityStore::in_memory();
        let patch = UserPatch {
            show_birthday: Some(false),
            ..Default::default()
        };

        let updated = store.update_user(&"1".into(), &patch).unwrap();
        assert!(!updated.show_birthday);
        assert_eq!(updated.first_name, "Иван");

        assert!(matches!(
            store.update_user(&"missing".into(), &patch),
            Err(DataError::NotFound("user"))
        ));
    }
}

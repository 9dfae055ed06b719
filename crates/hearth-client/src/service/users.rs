//! User operations, both backends.

use hearth_shared::{PlatformIdentity, Result, User, UserId, UserPatch, UserPatchBody};

use crate::config::Mode;
use crate::service::DataService;

impl DataService {
    /// Resolve the signed-in user from the platform identity.
    pub async fn upsert_current_user(&self, identity: &PlatformIdentity) -> Result<User> {
        match self.mode() {
            Mode::Local => Ok(self.store().upsert_current_user(identity)),
            Mode::Remote => {
                let user: User = self.api().post("/users", identity).await?;
                // Keep the local copy in step so selection state has a user.
                self.store().upsert_current_user(identity);
                Ok(user)
            }
        }
    }

    pub async fn get_user(&self, id: &UserId) -> Result<User> {
        match self.mode() {
            Mode::Local => self.store().get_user(id),
            Mode::Remote => self.api().get(&format!("/users?id={}", id.as_str())).await,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        match self.mode() {
            Mode::Local => Ok(self.store().list_users()),
            Mode::Remote => self.api().get("/users").await,
        }
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        match self.mode() {
            Mode::Local => Ok(self.store().search_users(query)),
            Mode::Remote => self.api().get(&format!("/users?search={query}")).await,
        }
    }

    pub async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User> {
        match self.mode() {
            Mode::Local => self.store().update_user(id, patch),
            Mode::Remote => {
                let body = UserPatchBody {
                    id: id.clone(),
                    patch: patch.clone(),
                };
                self.api().patch("/users", &body).await
            }
        }
    }
}

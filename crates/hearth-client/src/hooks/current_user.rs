//! Signed-in user hook.

use std::sync::Arc;

use tokio::sync::watch;

use hearth_shared::{PlatformIdentity, Result, User, UserPatch};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct CurrentUserHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    identity: PlatformIdentity,
}

impl CurrentUserHook {
    pub fn new(
        service: Arc<DataService>,
        cache: Arc<QueryCache>,
        identity: PlatformIdentity,
    ) -> Self {
        Self {
            service,
            cache,
            identity,
        }
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<User> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().current_user()),
            Mode::Remote => None,
        }
    }

    /// Resolve the current user, upserting from the platform identity on
    /// first load.
    pub async fn current_user(&self) -> Result<User> {
        self.cache
            .fetch(
                QueryKey::CurrentUser,
                self.service.upsert_current_user(&self.identity),
            )
            .await
    }

    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User> {
        let user = self.current_user().await?;
        self.cache
            .mutate(
                &[
                    QueryKey::CurrentUser,
                    QueryKey::Users,
                    QueryKey::User(user.id.clone()),
                ],
                self.service.update_user(&user.id, patch),
            )
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe(QueryKey::CurrentUser)
    }
}

//! Another user's profile page: identity, wishlist, friendship status.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hearth_shared::{Result, User, UserId, WishlistItem};

use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    pub user: User,
    pub wishlist: Vec<WishlistItem>,
    pub is_friend: bool,
}

pub struct ProfileHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    viewer_id: UserId,
}

impl ProfileHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, viewer_id: UserId) -> Self {
        Self {
            service,
            cache,
            viewer_id,
        }
    }

    pub async fn profile(&self, user_id: &UserId) -> Result<ProfileView> {
        let user = self
            .cache
            .fetch(QueryKey::User(user_id.clone()), self.service.get_user(user_id))
            .await?;
        let wishlist = self
            .cache
            .fetch(
                QueryKey::Wishlist {
                    owner: user_id.clone(),
                    viewer: self.viewer_id.clone(),
                },
                self.service.wishlist_of(user_id, &self.viewer_id),
            )
            .await?;
        let is_friend = self.service.are_friends(&self.viewer_id, user_id).await?;

        Ok(ProfileView {
            user,
            wishlist,
            is_friend,
        })
    }
}

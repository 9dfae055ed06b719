//! Friends screen hook: friend list, incoming requests, user search.

use std::sync::Arc;

use tokio::sync::watch;

use hearth_shared::{FriendRequest, RequestId, Result, User, UserId};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct FriendsHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    user_id: UserId,
}

impl FriendsHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, user_id: UserId) -> Self {
        Self {
            service,
            cache,
            user_id,
        }
    }

    fn friends_key(&self) -> QueryKey {
        QueryKey::Friends(self.user_id.clone())
    }

    fn requests_key(&self) -> QueryKey {
        QueryKey::FriendRequests(self.user_id.clone())
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<Vec<User>> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().friends_of(&self.user_id)),
            Mode::Remote => None,
        }
    }

    pub async fn friends(&self) -> Result<Vec<User>> {
        self.cache
            .fetch(self.friends_key(), self.service.friends_of(&self.user_id))
            .await
    }

    pub async fn requests(&self) -> Result<Vec<FriendRequest>> {
        self.cache
            .fetch(
                self.requests_key(),
                self.service.incoming_requests(&self.user_id),
            )
            .await
    }

    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.cache
            .fetch(QueryKey::Users, self.service.list_users())
            .await
    }

    /// Live search is never cached; every keystroke is a fresh query.
    pub async fn search(&self, query: &str) -> Result<Vec<User>> {
        self.service.search_users(query).await
    }

    /// Users with an unanswered request from us. The search screen disables
    /// their "add" button.
    pub async fn pending_request_user_ids(&self) -> Result<Vec<UserId>> {
        self.service.pending_sent_by(&self.user_id).await
    }

    /// Nothing cached depends on outgoing requests (the pending ids above
    /// are read uncached), so there is no key to invalidate.
    pub async fn send_request(&self, receiver_id: &UserId) -> Result<FriendRequest> {
        self.service
            .send_friend_request(&self.user_id, receiver_id)
            .await
    }

    pub async fn accept_request(&self, request_id: &RequestId) -> Result<()> {
        self.cache
            .mutate(
                &[self.friends_key(), self.requests_key(), QueryKey::Users],
                self.service.accept_friend_request(request_id),
            )
            .await
    }

    pub async fn decline_request(&self, request_id: &RequestId) -> Result<()> {
        self.cache
            .mutate(
                &[self.requests_key()],
                self.service.decline_friend_request(request_id),
            )
            .await
    }

    pub async fn remove_friend(&self, friend_id: &UserId) -> Result<()> {
        self.cache
            .mutate(
                &[self.friends_key(), QueryKey::Users],
                self.service.remove_friend(&self.user_id, friend_id),
            )
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe(self.friends_key())
    }
}

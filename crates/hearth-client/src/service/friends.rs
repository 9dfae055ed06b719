//! Friendship operations, both backends.

use hearth_shared::{
    FriendPatchBody, FriendRequest, RequestId, Result, SendRequestBody, User, UserId,
};

use crate::config::Mode;
use crate::service::DataService;

impl DataService {
    pub async fn friends_of(&self, user_id: &UserId) -> Result<Vec<User>> {
        match self.mode() {
            Mode::Local => Ok(self.store().friends_of(user_id)),
            Mode::Remote => {
                self.api()
                    .get(&format!("/friends?user_id={}", user_id.as_str()))
                    .await
            }
        }
    }

    pub async fn incoming_requests(&self, user_id: &UserId) -> Result<Vec<FriendRequest>> {
        match self.mode() {
            Mode::Local => Ok(self.store().incoming_requests(user_id)),
            Mode::Remote => {
                self.api()
                    .get(&format!(
                        "/friends?user_id={}&type=requests",
                        user_id.as_str()
                    ))
                    .await
            }
        }
    }

    /// Targets of the user's pending outgoing requests. The REST API has no
    /// endpoint for this, so remote mode reports none.
    pub async fn pending_sent_by(&self, user_id: &UserId) -> Result<Vec<UserId>> {
        match self.mode() {
            Mode::Local => Ok(self.store().pending_sent_by(user_id)),
            Mode::Remote => Ok(Vec::new()),
        }
    }

    pub async fn are_friends(&self, user_id: &UserId, friend_id: &UserId) -> Result<bool> {
        match self.mode() {
            Mode::Local => Ok(self.store().are_friends(user_id, friend_id)),
            Mode::Remote => {
                let friends = self.friends_of(user_id).await?;
                Ok(friends.iter().any(|u| &u.id == friend_id))
            }
        }
    }

    pub async fn send_friend_request(
        &self,
        sender_id: &UserId,
        receiver_id: &UserId,
    ) -> Result<FriendRequest> {
        match self.mode() {
            Mode::Local => self.store().send_friend_request(sender_id, receiver_id),
            Mode::Remote => {
                let body = SendRequestBody {
                    sender_id: sender_id.clone(),
                    receiver_id: receiver_id.clone(),
                };
                self.api().post("/friends", &body).await
            }
        }
    }

    pub async fn accept_friend_request(&self, request_id: &RequestId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().accept_friend_request(request_id),
            Mode::Remote => {
                let body = FriendPatchBody::Accept {
                    request_id: request_id.clone(),
                };
                let _: bool = self.api().patch("/friends", &body).await?;
                Ok(())
            }
        }
    }

    pub async fn decline_friend_request(&self, request_id: &RequestId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().decline_friend_request(request_id),
            Mode::Remote => {
                let body = FriendPatchBody::Decline {
                    request_id: request_id.clone(),
                };
                let _: bool = self.api().patch("/friends", &body).await?;
                Ok(())
            }
        }
    }

    pub async fn remove_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().remove_friend(user_id, friend_id),
            Mode::Remote => {
                let _: bool = self
                    .api()
                    .delete(&format!(
                        "/friends?user_id={}&friend_id={}",
                        user_id.as_str(),
                        friend_id.as_str()
                    ))
                    .await?;
                Ok(())
            }
        }
    }
}

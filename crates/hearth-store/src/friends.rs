//! Friendship and friend-request operations.
//!
//! Friendship edges are directional and always exist in pairs. Accepting a
//! request flips its status and inserts both edges in one locked mutation,
//! so no reader can observe a half-created pair.

use chrono::Utc;

use hearth_shared::{
    DataError, FriendRequest, Friendship, FriendshipId, RequestId, RequestStatus, Result, User,
    UserId,
};

use crate::select;
use crate::store::EntityStore;

impl EntityStore {
    /// Users on the far side of the given user's friendship edges.
    pub fn friends_of(&self, user_id: &UserId) -> Vec<User> {
        let data = self.lock();
        let ids = select::friend_ids(&data.friendships, user_id);
        data.users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect()
    }

    /// Pending requests addressed to the user, sender profile embedded.
    pub fn incoming_requests(&self, user_id: &UserId) -> Vec<FriendRequest> {
        let data = self.lock();
        data.friend_requests
            .iter()
            .filter(|r| &r.receiver_id == user_id && r.status == RequestStatus::Pending)
            .map(|r| {
                let mut r = r.clone();
                r.sender = data.users.iter().find(|u| u.id == r.sender_id).cloned();
                r
            })
            .collect()
    }

    /// Receivers of the user's pending outgoing requests.
    pub fn pending_sent_by(&self, user_id: &UserId) -> Vec<UserId> {
        select::pending_sent_to(&self.lock().friend_requests, user_id)
    }

    pub fn are_friends(&self, user_id: &UserId, friend_id: &UserId) -> bool {
        self.lock()
            .friendships
            .iter()
            .any(|f| &f.user_id == user_id && &f.friend_id == friend_id)
    }

    /// Send a friend request.
    ///
    /// Rejected when the pair is already friends or a pending request exists
    /// in either direction. Declined requests do not block a retry.
    pub fn send_friend_request(
        &self,
        sender_id: &UserId,
        receiver_id: &UserId,
    ) -> Result<FriendRequest> {
        if sender_id == receiver_id {
            return Err(DataError::Validation(
                "cannot send a friend request to yourself".into(),
            ));
        }

        let mut data = self.lock();
        if !data.users.iter().any(|u| &u.id == receiver_id) {
            return Err(DataError::NotFound("user"));
        }

        let already_friends = data
            .friendships
            .iter()
            .any(|f| &f.user_id == sender_id && &f.friend_id == receiver_id);
        if already_friends {
            return Err(DataError::Conflict("already friends".into()));
        }

        let pending_exists = data.friend_requests.iter().any(|r| {
            r.status == RequestStatus::Pending
                && ((&r.sender_id == sender_id && &r.receiver_id == receiver_id)
                    || (&r.sender_id == receiver_id && &r.receiver_id == sender_id))
        });
        if pending_exists {
            return Err(DataError::Conflict(
                "a pending request already exists between these users".into(),
            ));
        }

        let request = FriendRequest {
            id: RequestId::generate(),
            sender_id: sender_id.clone(),
            receiver_id: receiver_id.clone(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            sender: None,
        };
        data.friend_requests.push(request.clone());
        self.persist(&data);
        Ok(request)
    }

    /// Accept a pending request: status becomes `accepted` and both
    /// directional friendship edges are created atomically.
    pub fn accept_friend_request(&self, request_id: &RequestId) -> Result<()> {
        let mut data = self.lock();

        let request = data
            .friend_requests
            .iter_mut()
            .find(|r| &r.id == request_id)
            .ok_or(DataError::NotFound("friend request"))?;
        if request.status != RequestStatus::Pending {
            return Err(DataError::Conflict("request is already resolved".into()));
        }

        request.status = RequestStatus::Accepted;
        let (sender_id, receiver_id) = (request.sender_id.clone(), request.receiver_id.clone());

        let now = Utc::now();
        data.friendships.push(Friendship {
            id: FriendshipId::generate(),
            user_id: sender_id.clone(),
            friend_id: receiver_id.clone(),
            created_at: now,
        });
        data.friendships.push(Friendship {
            id: FriendshipId::generate(),
            user_id: receiver_id,
            friend_id: sender_id,
            created_at: now,
        });
        self.persist(&data);
        Ok(())
    }

    /// Decline a pending request. No friendship is created.
    pub fn decline_friend_request(&self, request_id: &RequestId) -> Result<()> {
        let mut data = self.lock();
        let request = data
            .friend_requests
            .iter_mut()
            .find(|r| &r.id == request_id)
            .ok_or(DataError::NotFound("friend request"))?;
        if request.status != RequestStatus::Pending {
            return Err(DataError::Conflict("request is already resolved".into()));
        }
        request.status = RequestStatus::Declined;
        self.persist(&data);
        Ok(())
    }

    /// Delete both directional edges between the pair.
    pub fn remove_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<()> {
        let mut data = self.lock();
        let before = data.friendships.len();
        data.friendships.retain(|f| {
            !((&f.user_id == user_id && &f.friend_id == friend_id)
                || (&f.user_id == friend_id && &f.friend_id == user_id))
        });
        if data.friendships.len() == before {
            return Err(DataError::NotFound("friendship"));
        }
        self.persist(&data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_count(store: &EntityStore, a: &UserId, b: &UserId) -> usize {
        usize::from(store.are_friends(a, b)) + usize::from(store.are_friends(b, a))
    }

    #[test]
    fn accept_creates_exactly_one_edge_per_direction() {
        let store = EntityStore::in_memory();
        let (maria, petr): (UserId, UserId) = ("2".into(), "3".into());
        assert_eq!(edge_count(&store, &maria, &petr), 0);

        // Seed request fr1: Maria -> Petr, pending.
        store.accept_friend_request(&"fr1".into()).unwrap();

        assert_eq!(edge_count(&store, &maria, &petr), 2);
        let requests = store.incoming_requests(&petr);
        assert!(requests.is_empty(), "accepted request must leave the inbox");
    }

    #[test]
    fn accept_is_not_repeatable() {
        let store = EntityStore::in_memory();
        store.accept_friend_request(&"fr1".into()).unwrap();
        assert!(matches!(
            store.accept_friend_request(&"fr1".into()),
            Err(DataError::Conflict(_))
        ));
    }

    #[test]
    fn decline_creates_no_edges_and_allows_resend() {
        let store = EntityStore::in_memory();
        let (maria, petr): (UserId, UserId) = ("2".into(), "3".into());

        store.decline_friend_request(&"fr1".into()).unwrap();
        assert_eq!(edge_count(&store, &maria, &petr), 0);

        // A declined request does not block a new attempt.
        let request = store.send_friend_request(&maria, &petr).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn pending_request_blocks_duplicates_in_both_directions() {
        let store = EntityStore::in_memory();

        // fr1 is Maria -> Petr; neither direction may add another.
        assert!(matches!(
            store.send_friend_request(&"2".into(), &"3".into()),
            Err(DataError::Conflict(_))
        ));
        assert!(matches!(
            store.send_friend_request(&"3".into(), &"2".into()),
            Err(DataError::Conflict(_))
        ));
    }

    #[test]
    fn existing_friendship_blocks_requests() {
        let store = EntityStore::in_memory();
        assert!(matches!(
            store.send_friend_request(&"1".into(), &"3".into()),
            Err(DataError::Conflict(_))
        ));
    }

    #[test]
    fn self_requests_are_invalid() {
        let store = EntityStore::in_memory();
        assert!(matches!(
            store.send_friend_request(&"1".into(), &"1".into()),
            Err(DataError::Validation(_))
        ));
    }

    #[test]
    fn remove_friend_deletes_both_directions() {
        let store = EntityStore::in_memory();
        let (ivan, petr): (UserId, UserId) = ("1".into(), "3".into());
        assert_eq!(edge_count(&store, &ivan, &petr), 2);

        store.remove_friend(&ivan, &petr).unwrap();
        assert_eq!(edge_count(&store, &ivan, &petr), 0);

        assert!(matches!(
            store.remove_friend(&ivan, &petr),
            Err(DataError::NotFound("friendship"))
        ));
    }

    #[test]
    fn incoming_requests_embed_the_sender() {
        let store = EntityStore::in_memory();
        let requests = store.incoming_requests(&"3".into());
        assert_eq!(requests.len(), 1);
        let sender = requests[0].sender.as_ref().expect("sender embedded");
        assert_eq!(sender.first_name, "Мария");
    }

    #[test]
    fn pending_sent_by_lists_outgoing_targets() {
        let store = EntityStore::in_memory();
        assert_eq!(store.pending_sent_by(&"2".into()), vec!["3".into()]);
        assert!(store.pending_sent_by(&"1".into()).is_empty());
    }
}

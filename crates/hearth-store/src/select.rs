//! Pure derived-view selectors.
//!
//! Free functions over entity slices, shared by the store's query methods
//! and the client hooks so both compute projections the same way.

use hearth_shared::{
    Event, FamilyId, FriendRequest, Friendship, RequestStatus, Task, TaskStatus, UserId,
    WishlistItem,
};

/// Split a family's tasks into the main list (active and completed, still
/// visible) and the archive.
pub fn split_tasks(tasks: &[Task], family_id: &FamilyId) -> (Vec<Task>, Vec<Task>) {
    let mut active = Vec::new();
    let mut archived = Vec::new();
    for task in tasks.iter().filter(|t| &t.family_id == family_id) {
        match task.status {
            TaskStatus::Active | TaskStatus::Completed => active.push(task.clone()),
            TaskStatus::Archived => archived.push(task.clone()),
        }
    }
    (active, archived)
}

/// Events the user is involved in: as creator, invitee, or participant.
pub fn events_involving(events: &[Event], user_id: &UserId) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            e.created_by == *user_id
                || e.invited_users.contains(user_id)
                || e.participants.iter().any(|p| &p.user_id == user_id)
        })
        .cloned()
        .collect()
}

/// Ids on the far side of a user's outgoing friendship edges.
pub fn friend_ids(friendships: &[Friendship], user_id: &UserId) -> Vec<UserId> {
    friendships
        .iter()
        .filter(|f| &f.user_id == user_id)
        .map(|f| f.friend_id.clone())
        .collect()
}

/// Receivers of the user's still-pending outgoing requests. The UI uses this
/// to disable duplicate "add friend" buttons.
pub fn pending_sent_to(requests: &[FriendRequest], sender_id: &UserId) -> Vec<UserId> {
    requests
        .iter()
        .filter(|r| &r.sender_id == sender_id && r.status == RequestStatus::Pending)
        .map(|r| r.receiver_id.clone())
        .collect()
}

/// One user's wishlist as seen by `viewer`, booking identity scrubbed per
/// the anonymity rule.
pub fn wishlist_for_viewer(
    items: &[WishlistItem],
    owner_id: &UserId,
    viewer_id: &UserId,
) -> Vec<WishlistItem> {
    items
        .iter()
        .filter(|w| &w.user_id == owner_id)
        .map(|w| w.clone().anonymized_for(viewer_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn task_split_keeps_completed_in_main_list() {
        let data = seed::store_data();
        let (active, archived) = split_tasks(&data.tasks, &"f1".into());

        assert!(active
            .iter()
            .any(|t| t.status == TaskStatus::Completed));
        assert!(active.iter().all(|t| t.status != TaskStatus::Archived));
        assert!(archived.iter().all(|t| t.status == TaskStatus::Archived));
        assert_eq!(active.len() + archived.len(), data.tasks.len());
    }

    #[test]
    fn events_involving_covers_all_three_roles() {
        let data = seed::store_data();

        // User 1 is creator of e1, invited to e2 and e3.
        let mine = events_involving(&data.events, &"1".into());
        assert_eq!(mine.len(), 3);

        // User 2 is only a participant/invitee of e1.
        let theirs = events_involving(&data.events, &"2".into());
        assert_eq!(theirs.len(), 1);
        assert_eq!(theirs[0].id.as_str(), "e1");
    }

    #[test]
    fn friend_ids_are_directional() {
        let data = seed::store_data();
        let mut ids = friend_ids(&data.friendships, &"1".into());
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(ids, vec!["3".into(), "4".into(), "5".into()]);

        assert_eq!(friend_ids(&data.friendships, &"2".into()).len(), 0);
    }

    #[test]
    fn owner_never_sees_who_booked() {
        let data = seed::store_data();
        let owner: UserId = "1".into();

        let own_view = wishlist_for_viewer(&data.wishlist_items, &owner, &owner);
        let booked = own_view.iter().find(|w| w.id.as_str() == "w3").unwrap();
        assert!(booked.is_booked);
        assert!(booked.booked_by.is_none());
        assert!(booked.booked_at.is_none());

        // The booker (user 3) sees their own booking.
        let booker_view = wishlist_for_viewer(&data.wishlist_items, &owner, &"3".into());
        let booked = booker_view.iter().find(|w| w.id.as_str() == "w3").unwrap();
        assert_eq!(booked.booked_by, Some("3".into()));
    }
}

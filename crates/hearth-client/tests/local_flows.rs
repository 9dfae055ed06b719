//! End-to-end flows through the hooks against the local backend.

use std::sync::Arc;

use hearth_client::hooks::{
    CurrentUserHook, EventsHook, FamiliesHook, FriendsHook, ProfileHook, TasksHook, WishlistHook,
};
use hearth_client::{AppConfig, DataService, QueryCache, QueryKey};
use hearth_shared::{
    DataError, EventResponse, NewEvent, NewTask, NewWishlistItem, PlatformIdentity, TaskKind,
    TaskStatus, UserPatch,
};
use hearth_store::EntityStore;

fn setup() -> (Arc<DataService>, Arc<QueryCache>) {
    let store = Arc::new(EntityStore::in_memory());
    let service = DataService::new(&AppConfig::local(), store).unwrap();
    (Arc::new(service), Arc::new(QueryCache::new()))
}

fn ivan() -> PlatformIdentity {
    PlatformIdentity {
        telegram_id: 123456789,
        username: Some("ivan_ivanov".into()),
        first_name: "Иван".into(),
        last_name: Some("Иванов".into()),
        avatar_url: None,
    }
}

#[tokio::test]
async fn sign_in_and_profile_update() {
    let (service, cache) = setup();
    let hook = CurrentUserHook::new(service, cache, ivan());

    let user = hook.current_user().await.unwrap();
    assert_eq!(user.id.as_str(), "1");

    let mut rx = hook.subscribe();
    rx.borrow_and_update();

    let updated = hook
        .update_profile(&UserPatch {
            show_birthday: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!updated.show_birthday);

    // The mutation must wake current-user subscribers.
    assert!(rx.has_changed().unwrap());
}

#[tokio::test]
async fn task_lifecycle_through_the_hook() {
    let (service, cache) = setup();
    let hook = TasksHook::new(service, cache, "f1".into());

    // Local mode paints synchronously before the first fetch.
    let initial = hook.initial().expect("local mode has an initial view");
    assert!(!initial.active.is_empty());

    let task = hook
        .create_task(&NewTask {
            family_id: "f1".into(),
            created_by: "1".into(),
            kind: TaskKind::Shopping,
            category_id: Some("c1".into()),
            title: "Хлеб".into(),
            description: None,
            quantity: Some(1.0),
            unit: Some("шт".into()),
            assigned_to: vec![],
        })
        .await
        .unwrap();

    let completed = hook.complete_task(&task.id, &"2".into()).await.unwrap();
    assert_eq!(completed.status, TaskStatus::Completed);
    assert_eq!(completed.completed_by, Some("2".into()));

    // Completed tasks stay in the main list until archived.
    let view = hook.tasks().await.unwrap();
    assert!(view.active.iter().any(|t| t.id == task.id));

    hook.archive_task(&task.id).await.unwrap();
    let view = hook.tasks().await.unwrap();
    assert!(view.active.iter().all(|t| t.id != task.id));
    assert!(view.archived.iter().any(|t| t.id == task.id));

    // Archived tasks cannot be deleted.
    assert!(matches!(
        hook.delete_task(&task.id).await,
        Err(DataError::Conflict(_))
    ));
}

#[tokio::test]
async fn family_mutations_invalidate_the_family_list() {
    let (service, cache) = setup();
    let hook = FamiliesHook::new(service, cache, "1".into());

    assert_eq!(hook.families().await.unwrap().len(), 2);

    let family = hook.create_family("Дача").await.unwrap();
    let families = hook.families().await.unwrap();
    assert_eq!(families.len(), 3);

    // Creating selects the new group.
    let selected = hook.selected_family().await.unwrap().unwrap();
    assert_eq!(selected.id, family.id);

    hook.invite_member(&family.id, &"3".into()).await.unwrap();
    assert_eq!(hook.family_members(&family.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn rsvp_round_trip() {
    let (service, cache) = setup();
    let hook = EventsHook::new(service.clone(), cache.clone(), "1".into());

    let event = hook
        .create_event(&NewEvent {
            created_by: "1".into(),
            title: "Прогулка".into(),
            description: None,
            location: None,
            event_date: chrono::Utc::now() + chrono::Duration::days(2),
            image_url: None,
            invited_users: vec!["3".into()],
        })
        .await
        .unwrap();

    // The invitee answers through their own hook.
    let invitee = EventsHook::new(service, cache, "3".into());
    let updated = invitee
        .respond(&event.id, EventResponse::Going)
        .await
        .unwrap();
    assert!(updated
        .participants
        .iter()
        .any(|p| p.user_id.as_str() == "3" && p.response == EventResponse::Going));

    // The creator cannot answer their own event.
    assert!(matches!(
        hook.respond(&event.id, EventResponse::Going).await,
        Err(DataError::Conflict(_))
    ));
}

#[tokio::test]
async fn booking_stays_anonymous_across_hooks() {
    let (service, cache) = setup();
    let owner = WishlistHook::new(service.clone(), cache.clone(), "1".into());
    let friend = WishlistHook::new(service, cache, "4".into());

    let item = friend
        .create_item(&NewWishlistItem {
            user_id: "4".into(),
            title: "Книга".into(),
            description: None,
            link: None,
            price: None,
            image_url: None,
        })
        .await
        .unwrap();
    assert!(!item.is_booked);

    // User 4 books an item on user 1's list.
    let mut rx = owner.subscribe(&"1".into());
    rx.borrow_and_update();
    friend.book_item(&"w1".into()).await.unwrap();
    assert!(rx.has_changed().unwrap(), "booking wakes every wishlist");

    let owner_view = owner.my_items().await.unwrap();
    let booked = owner_view.iter().find(|w| w.id.as_str() == "w1").unwrap();
    assert!(booked.is_booked);
    assert!(booked.booked_by.is_none(), "owner never learns the booker");

    // The booker sees their own booking even though the owner's view of the
    // same list is already cached.
    let friend_view = friend.items_of(&"1".into()).await.unwrap();
    let booked = friend_view.iter().find(|w| w.id.as_str() == "w1").unwrap();
    assert_eq!(booked.booked_by, Some("4".into()));

    // And the booker's fetch must not overwrite the owner's cached view.
    let owner_view = owner.my_items().await.unwrap();
    let booked = owner_view.iter().find(|w| w.id.as_str() == "w1").unwrap();
    assert!(booked.booked_by.is_none());
}

#[tokio::test]
async fn sending_a_request_leaves_cached_users_fresh() {
    let (service, cache) = setup();
    let maria = FriendsHook::new(service, cache.clone(), "2".into());

    maria.all_users().await.unwrap();
    let mut rx = cache.subscribe(QueryKey::Users);
    rx.borrow_and_update();

    // Maria has no edge to Anna and no pending request towards her.
    maria.send_request(&"4".into()).await.unwrap();

    assert!(!rx.has_changed().unwrap(), "user list is unaffected");
    assert!(maria
        .pending_request_user_ids()
        .await
        .unwrap()
        .contains(&"4".into()));
}

#[tokio::test]
async fn friend_request_accept_flow() {
    let (service, cache) = setup();
    let maria = FriendsHook::new(service.clone(), cache.clone(), "2".into());
    let petr = FriendsHook::new(service.clone(), cache.clone(), "3".into());

    // Seeded: Maria -> Petr is pending.
    let requests = petr.requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(maria.pending_request_user_ids().await.unwrap().len(), 1);

    petr.accept_request(&requests[0].id).await.unwrap();

    assert!(petr.friends().await.unwrap().iter().any(|u| u.id.as_str() == "2"));
    assert!(petr.requests().await.unwrap().is_empty());

    // Friendship visible from the profile page too.
    let profile = ProfileHook::new(service, cache, "2".into());
    let view = profile.profile(&"3".into()).await.unwrap();
    assert!(view.is_friend);
    assert_eq!(view.user.first_name, "Пётр");
}

//! Domain model structs for every entity the app coordinates.
//!
//! Field names match the REST contract (snake_case JSON); enum variants
//! serialize as the wire strings (`"not_going"`, `"admin"`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::ids::*;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user identity imported from the messaging platform on first sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    /// Numeric id assigned by the messaging platform; upsert key.
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    /// Whether friends may see the birthday. Defaults to true.
    pub show_birthday: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Identity payload handed over by the platform SDK at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformIdentity {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_birthday: Option<bool>,
}

// ---------------------------------------------------------------------------
// Family group
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRole {
    Admin,
    Member,
}

/// One membership row. Carries the joined [`User`] so the UI never needs a
/// second lookup to render a member list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    pub id: MemberId,
    pub family_id: FamilyId,
    pub user_id: UserId,
    pub role: FamilyRole,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<User>,
}

/// A family group. The creator is always its first admin member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyGroup {
    pub id: FamilyId,
    pub name: String,
    pub created_by: UserId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub members: Vec<FamilyMember>,
}

impl FamilyGroup {
    pub fn member(&self, user_id: &UserId) -> Option<&FamilyMember> {
        self.members.iter().find(|m| &m.user_id == user_id)
    }

    pub fn is_admin(&self, user_id: &UserId) -> bool {
        self.member(user_id)
            .is_some_and(|m| m.role == FamilyRole::Admin)
    }
}

// ---------------------------------------------------------------------------
// Friends
// ---------------------------------------------------------------------------

/// One directional friendship edge. Edges always exist in pairs: accepting a
/// request inserts `(a, b)` and `(b, a)`, removal deletes both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Friendship {
    pub id: FriendshipId,
    pub user_id: UserId,
    pub friend_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendRequest {
    pub id: RequestId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Sender profile, embedded when listing incoming requests.
    #[serde(default)]
    pub sender: Option<User>,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Shopping,
    Home,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Active,
    Completed,
    Archived,
}

/// Static reference data: a category tile in the task form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskCategory {
    pub id: CategoryId,
    pub name: String,
    /// Icon name rendered by the UI layer.
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub order: u32,
}

/// A shared task inside one family group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub family_id: FamilyId,
    pub created_by: UserId,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub category_id: Option<CategoryId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Amount to buy; shopping tasks only.
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    /// Empty means unassigned/shared.
    #[serde(default)]
    pub assigned_to: Vec<UserId>,
    pub status: TaskStatus,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Creation input for a task. Validated before any state is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub family_id: FamilyId,
    pub created_by: UserId,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub assigned_to: Vec<UserId>,
}

impl NewTask {
    /// Reject drafts that would violate the task shape invariants.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.title.trim().is_empty() {
            return Err(DataError::Validation("task title must not be empty".into()));
        }
        if self.kind != TaskKind::Shopping && (self.quantity.is_some() || self.unit.is_some()) {
            return Err(DataError::Validation(
                "quantity/unit are only valid on shopping tasks".into(),
            ));
        }
        Ok(())
    }
}

/// Partial task edit (title, description, category, assignment, amounts).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Vec<UserId>>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventResponse {
    Pending,
    Going,
    NotGoing,
}

/// One invited user's RSVP row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventParticipant {
    pub id: ParticipantId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub response: EventResponse,
    pub updated_at: DateTime<Utc>,
}

/// A shared event with explicit invitations.
///
/// Participants are created 1:1 with `invited_users` at creation time, all
/// `pending`. The creator never has a participant row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub created_by: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub invited_users: Vec<UserId>,
    #[serde(default)]
    pub participants: Vec<EventParticipant>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Creation input for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub created_by: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub invited_users: Vec<UserId>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.title.trim().is_empty() {
            return Err(DataError::Validation(
                "event title must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Wishlist
// ---------------------------------------------------------------------------

/// A gift idea owned by one user, bookable by friends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    pub id: ItemId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_booked: bool,
    #[serde(default)]
    pub booked_by: Option<UserId>,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl WishlistItem {
    /// Scrub the booking identity unless `viewer` is the booker themself.
    ///
    /// `is_booked` stays visible so the owner knows the item is taken without
    /// learning by whom.
    pub fn anonymized_for(mut self, viewer: &UserId) -> Self {
        if self.booked_by.as_ref() != Some(viewer) {
            self.booked_by = None;
            self.booked_at = None;
        }
        self
    }
}

/// Creation input for a wishlist item. Items are always created unbooked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWishlistItem {
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewWishlistItem {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.title.trim().is_empty() {
            return Err(DataError::Validation(
                "wishlist item title must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shopping_draft() -> NewTask {
        NewTask {
            family_id: FamilyId::from("f1"),
            created_by: UserId::from("1"),
            kind: TaskKind::Shopping,
            category_id: Some(CategoryId::from("c1")),
            title: "Молоко".into(),
            description: None,
            quantity: Some(2.0),
            unit: Some("л".into()),
            assigned_to: vec![],
        }
    }

    #[test]
    fn statuses_use_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&EventResponse::NotGoing).unwrap(),
            "\"not_going\""
        );
        assert_eq!(serde_json::to_string(&FamilyRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&TaskStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn task_kind_serializes_as_type() {
        let draft = shopping_draft();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "shopping");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn quantity_rejected_on_non_shopping_task() {
        let mut draft = shopping_draft();
        draft.kind = TaskKind::Home;
        draft.category_id = Some(CategoryId::from("c11"));
        assert!(matches!(
            draft.validate(),
            Err(DataError::Validation(_))
        ));
    }

    #[test]
    fn empty_title_rejected() {
        let mut draft = shopping_draft();
        draft.title = "  ".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn anonymize_hides_booking_from_everyone_but_the_booker() {
        let item = WishlistItem {
            id: ItemId::from("w3"),
            user_id: UserId::from("1"),
            title: "Подписка".into(),
            description: None,
            link: None,
            price: Some(2999.0),
            image_url: None,
            is_booked: true,
            booked_by: Some(UserId::from("3")),
            booked_at: Some(chrono::Utc::now()),
            created_at: None,
        };

        let owner_view = item.clone().anonymized_for(&UserId::from("1"));
        assert!(owner_view.is_booked);
        assert!(owner_view.booked_by.is_none());
        assert!(owner_view.booked_at.is_none());

        let booker_view = item.anonymized_for(&UserId::from("3"));
        assert_eq!(booker_view.booked_by, Some(UserId::from("3")));
    }
}

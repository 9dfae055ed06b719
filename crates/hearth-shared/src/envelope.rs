//! Wire contract of the REST boundary.
//!
//! Every endpoint answers `{"data": ...}` on success or `{"error": "..."}`
//! with a non-2xx status on failure. PATCH endpoints multiplex several
//! actions through a tagged body; those bodies live here so the client and
//! any test double agree on the exact shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::*;
use crate::models::{EventResponse, TaskStatus, UserPatch};

/// The `{data, error}` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiEnvelope<T> {
        ApiEnvelope {
            data: None,
            error: Some(message.into()),
        }
    }
}

/// `PATCH /users` — partial profile update by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPatchBody {
    pub id: UserId,
    #[serde(flatten)]
    pub patch: UserPatch,
}

/// `POST /families` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFamilyBody {
    pub name: String,
    pub created_by: UserId,
}

/// `PATCH /families` — membership changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FamilyPatchBody {
    Invite { family_id: FamilyId, user_id: UserId },
    Leave { family_id: FamilyId, user_id: UserId },
}

/// `PATCH /tasks` — status transition or edit, merged by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPatchBody {
    pub id: TaskId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<UserId>,
    #[serde(flatten)]
    pub patch: crate::models::TaskPatch,
}

/// `PATCH /events` — currently only RSVP updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPatchBody {
    Response {
        event_id: EventId,
        user_id: UserId,
        response: EventResponse,
    },
}

/// `PATCH /wishlist` — booking state transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WishlistPatchBody {
    Book { item_id: ItemId, booked_by: UserId },
    Cancel { item_id: ItemId },
}

/// `POST /friends` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequestBody {
    pub sender_id: UserId,
    pub receiver_id: UserId,
}

/// `PATCH /friends` — resolve a pending request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FriendPatchBody {
    Accept { request_id: RequestId },
    Decline { request_id: RequestId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_round_trip() {
        let ok: ApiEnvelope<Vec<u32>> = ApiEnvelope::data(vec![1, 2]);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);

        let err: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }

    #[test]
    fn patch_bodies_are_action_tagged() {
        let body = WishlistPatchBody::Book {
            item_id: ItemId::from("w1"),
            booked_by: UserId::from("3"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["action"], "book");
        assert_eq!(json["item_id"], "w1");

        let body = FamilyPatchBody::Leave {
            family_id: FamilyId::from("f1"),
            user_id: UserId::from("2"),
        };
        assert_eq!(serde_json::to_value(&body).unwrap()["action"], "leave");
    }
}

//! Opaque string identifiers, one newtype per entity.
//!
//! Ids are plain strings on the wire (the backing database hands out its own
//! keys in remote mode); locally generated ids are UUIDv4 in simple format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a fresh random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

opaque_id!(
    /// A user account.
    UserId
);
opaque_id!(
    /// A family group.
    FamilyId
);
opaque_id!(
    /// A membership row inside a family group.
    MemberId
);
opaque_id!(
    /// One directional friendship edge.
    FriendshipId
);
opaque_id!(
    /// A friend request.
    RequestId
);
opaque_id!(
    /// A shopping/home/other task.
    TaskId
);
opaque_id!(
    /// A static task category.
    CategoryId
);
opaque_id!(
    /// A shared event.
    EventId
);
opaque_id!(
    /// One invited user's RSVP row on an event.
    ParticipantId
);
opaque_id!(
    /// A wishlist item.
    ItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_opaque() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = UserId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        let back: UserId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(back, id);
    }
}

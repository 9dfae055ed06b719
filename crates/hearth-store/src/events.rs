//! Event and RSVP operations.

use chrono::Utc;

use hearth_shared::{
    DataError, Event, EventId, EventParticipant, EventResponse, NewEvent, ParticipantId, Result,
    UserId,
};

use crate::select;
use crate::store::EntityStore;

impl EntityStore {
    /// Events the user created, is invited to, or participates in.
    pub fn events_for(&self, user_id: &UserId) -> Vec<Event> {
        select::events_involving(&self.lock().events, user_id)
    }

    /// Create an event. Every invited user (the creator excluded, should the
    /// invite list mention them) gets a `pending` participant row.
    pub fn create_event(&self, draft: &NewEvent) -> Result<Event> {
        draft.validate()?;

        let mut data = self.lock();
        let event_id = EventId::generate();
        let now = Utc::now();

        let invited: Vec<UserId> = draft
            .invited_users
            .iter()
            .filter(|id| *id != &draft.created_by)
            .cloned()
            .collect();
        let participants = invited
            .iter()
            .map(|user_id| EventParticipant {
                id: ParticipantId::generate(),
                event_id: event_id.clone(),
                user_id: user_id.clone(),
                response: EventResponse::Pending,
                updated_at: now,
            })
            .collect();

        let event = Event {
            id: event_id,
            created_by: draft.created_by.clone(),
            title: draft.title.trim().to_string(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            event_date: draft.event_date,
            image_url: draft.image_url.clone(),
            invited_users: invited,
            participants,
            created_at: Some(now),
        };
        data.events.push(event.clone());
        self.persist(&data);
        Ok(event)
    }

    /// Record an invitee's RSVP.
    ///
    /// Only `going`/`not_going` are accepted; `pending` is the initial state,
    /// not an answer. The creator has no participant row and cannot respond.
    pub fn respond_to_event(
        &self,
        event_id: &EventId,
        user_id: &UserId,
        response: EventResponse,
    ) -> Result<Event> {
        if response == EventResponse::Pending {
            return Err(DataError::Validation(
                "a response must be going or not_going".into(),
            ));
        }

        let mut data = self.lock();
        let event = data
            .events
            .iter_mut()
            .find(|e| &e.id == event_id)
            .ok_or(DataError::NotFound("event"))?;

        if &event.created_by == user_id {
            return Err(DataError::Conflict("the creator does not respond to their own event".into()));
        }

        let participant = event
            .participants
            .iter_mut()
            .find(|p| &p.user_id == user_id)
            .ok_or(DataError::NotFound("participant"))?;
        participant.response = response;
        participant.updated_at = Utc::now();

        let updated = event.clone();
        self.persist(&data);
        Ok(updated)
    }

    pub fn delete_event(&self, id: &EventId) -> Result<()> {
        let mut data = self.lock();
        let before = data.events.len();
        data.events.retain(|e| &e.id != id);
        if data.events.len() == before {
            return Err(DataError::NotFound("event"));
        }
        self.persist(&data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewEvent {
        NewEvent {
            created_by: "1".into(),
            title: "Шашлыки".into(),
            description: None,
            location: Some("Дача".into()),
            event_date: Utc::now() + chrono::Duration::days(7),
            image_url: None,
            invited_users: vec!["2".into(), "3".into()],
        }
    }

    #[test]
    fn creation_gives_every_invitee_a_pending_row() {
        let store = EntityStore::in_memory();
        let event = store.create_event(&draft()).unwrap();

        assert_eq!(event.participants.len(), event.invited_users.len());
        assert!(event
            .participants
            .iter()
            .all(|p| p.response == EventResponse::Pending && p.event_id == event.id));
    }

    #[test]
    fn creator_is_dropped_from_their_own_invite_list() {
        let store = EntityStore::in_memory();
        let mut d = draft();
        d.invited_users.push("1".into());

        let event = store.create_event(&d).unwrap();
        assert!(!event.invited_users.contains(&"1".into()));
        assert!(event.participants.iter().all(|p| p.user_id.as_str() != "1"));
    }

    #[test]
    fn respond_updates_the_matching_participant() {
        let store = EntityStore::in_memory();

        // e1: created by user 1, user 3 still pending.
        let event = store
            .respond_to_event(&"e1".into(), &"3".into(), EventResponse::Going)
            .unwrap();
        let row = event
            .participants
            .iter()
            .find(|p| p.user_id.as_str() == "3")
            .unwrap();
        assert_eq!(row.response, EventResponse::Going);

        // Answers can change.
        let event = store
            .respond_to_event(&"e1".into(), &"3".into(), EventResponse::NotGoing)
            .unwrap();
        let row = event
            .participants
            .iter()
            .find(|p| p.user_id.as_str() == "3")
            .unwrap();
        assert_eq!(row.response, EventResponse::NotGoing);
    }

    #[test]
    fn pending_is_not_a_valid_answer() {
        let store = EntityStore::in_memory();
        assert!(matches!(
            store.respond_to_event(&"e1".into(), &"3".into(), EventResponse::Pending),
            Err(DataError::Validation(_))
        ));
    }

    #[test]
    fn creator_and_outsiders_cannot_respond() {
        let store = EntityStore::in_memory();

        assert!(matches!(
            store.respond_to_event(&"e1".into(), &"1".into(), EventResponse::Going),
            Err(DataError::Conflict(_))
        ));
        // e2 only invites user 1; user 5 has no participant row there.
        assert!(matches!(
            store.respond_to_event(&"e2".into(), &"5".into(), EventResponse::Going),
            Err(DataError::NotFound("participant"))
        ));
    }

    #[test]
    fn events_for_spans_created_and_invited() {
        let store = EntityStore::in_memory();
        let events = store.events_for(&"1".into());
        assert_eq!(events.len(), 3);

        store.delete_event(&"e1".into()).unwrap();
        assert_eq!(store.events_for(&"1".into()).len(), 2);
        assert!(matches!(
            store.delete_event(&"e1".into()),
            Err(DataError::NotFound("event"))
        ));
    }
}

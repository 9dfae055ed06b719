//! Event and RSVP operations, both backends.

use hearth_shared::{
    DataError, Event, EventId, EventPatchBody, EventResponse, NewEvent, Result, UserId,
};

use crate::config::Mode;
use crate::service::DataService;

impl DataService {
    pub async fn events_for(&self, user_id: &UserId) -> Result<Vec<Event>> {
        match self.mode() {
            Mode::Local => Ok(self.store().events_for(user_id)),
            Mode::Remote => {
                self.api()
                    .get(&format!("/events?user_id={}", user_id.as_str()))
                    .await
            }
        }
    }

    pub async fn create_event(&self, draft: &NewEvent) -> Result<Event> {
        draft.validate()?;
        match self.mode() {
            Mode::Local => self.store().create_event(draft),
            Mode::Remote => self.api().post("/events", draft).await,
        }
    }

    /// Record an RSVP. `pending` is the initial state, not an answer, and is
    /// rejected here so both backends behave identically.
    pub async fn respond_to_event(
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
        match self.mode() {
            Mode::Local => self.store().respond_to_event(event_id, user_id, response),
            Mode::Remote => {
                let body = EventPatchBody::Response {
                    event_id: event_id.clone(),
                    user_id: user_id.clone(),
                    response,
                };
                self.api().patch("/events", &body).await
            }
        }
    }

    pub async fn delete_event(&self, id: &EventId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().delete_event(id),
            Mode::Remote => {
                let _: bool = self
                    .api()
                    .delete(&format!("/events?id={}", id.as_str()))
                    .await?;
                Ok(())
            }
        }
    }
}

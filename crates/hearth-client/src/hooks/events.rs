//! Events hook.

use std::sync::Arc;

use tokio::sync::watch;

use hearth_shared::{Event, EventId, EventResponse, NewEvent, Result, UserId};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct EventsHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    user_id: UserId,
}

impl EventsHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, user_id: UserId) -> Self {
        Self {
            service,
            cache,
            user_id,
        }
    }

    fn key(&self) -> QueryKey {
        QueryKey::Events(self.user_id.clone())
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<Vec<Event>> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().events_for(&self.user_id)),
            Mode::Remote => None,
        }
    }

    /// Events the user created or is invited to.
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.cache
            .fetch(self.key(), self.service.events_for(&self.user_id))
            .await
    }

    pub async fn create_event(&self, draft: &NewEvent) -> Result<Event> {
        self.cache
            .mutate(&[self.key()], self.service.create_event(draft))
            .await
    }

    pub async fn respond(&self, event_id: &EventId, response: EventResponse) -> Result<Event> {
        self.cache
            .mutate(
                &[self.key()],
                self.service
                    .respond_to_event(event_id, &self.user_id, response),
            )
            .await
    }

    pub async fn delete_event(&self, id: &EventId) -> Result<()> {
        self.cache
            .mutate(&[self.key()], self.service.delete_event(id))
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe(self.key())
    }
}

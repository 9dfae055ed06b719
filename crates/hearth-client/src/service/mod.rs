//! The data service facade.
//!
//! One [`DataService`] per app instance. Every operation has the same
//! signature in both modes: local calls hit the in-process [`EntityStore`],
//! remote calls go through the REST transport. Hooks never know which.

mod events;
mod families;
mod friends;
mod tasks;
mod users;
mod wishlist;

use std::sync::Arc;

use tracing::info;

use hearth_shared::Result;
use hearth_store::EntityStore;

use crate::api::ApiClient;
use crate::config::{AppConfig, Mode};

pub struct DataService {
    mode: Mode,
    api: ApiClient,
    store: Arc<EntityStore>,
}

impl DataService {
    pub fn new(config: &AppConfig, store: Arc<EntityStore>) -> Result<Self> {
        info!(mode = ?config.mode, api_base = %config.api_base, "Data service ready");
        Ok(Self {
            mode: config.mode,
            api: ApiClient::new(config)?,
            store,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Direct store access, for selection state and local-first reads.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}

//! Task category reference data hook.

use std::sync::Arc;

use hearth_shared::{Result, TaskCategory};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct CategoriesHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
}

impl CategoriesHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>) -> Self {
        Self { service, cache }
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<Vec<TaskCategory>> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().categories()),
            Mode::Remote => None,
        }
    }

    /// Category tiles in display order. Static data: cached until someone
    /// explicitly invalidates.
    pub async fn categories(&self) -> Result<Vec<TaskCategory>> {
        self.cache
            .fetch(QueryKey::Categories, self.service.categories())
            .await
    }
}

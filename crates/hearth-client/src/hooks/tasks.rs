//! Family tasks hook.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use hearth_shared::{FamilyId, NewTask, Result, Task, TaskId, TaskPatch, UserId};
use hearth_store::select;

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

/// What the task screen renders: completed tasks stay in the main list,
/// archived ones move to the archive tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskView {
    pub tasks: Vec<Task>,
    pub active: Vec<Task>,
    pub archived: Vec<Task>,
}

impl TaskView {
    fn build(tasks: Vec<Task>, family_id: &FamilyId) -> Self {
        let (active, archived) = select::split_tasks(&tasks, family_id);
        Self {
            tasks,
            active,
            archived,
        }
    }
}

pub struct TasksHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    family_id: FamilyId,
}

impl TasksHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, family_id: FamilyId) -> Self {
        Self {
            service,
            cache,
            family_id,
        }
    }

    fn key(&self) -> QueryKey {
        QueryKey::Tasks(self.family_id.clone())
    }

    pub async fn tasks(&self) -> Result<TaskView> {
        let family_id = self.family_id.clone();
        self.cache
            .fetch(self.key(), async move {
                let tasks = self.service.tasks_for_family(&family_id, None).await?;
                Ok(TaskView::build(tasks, &family_id))
            })
            .await
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<TaskView> {
        match self.service.mode() {
            Mode::Local => {
                let tasks = self.service.store().tasks_for_family(&self.family_id, None);
                Some(TaskView::build(tasks, &self.family_id))
            }
            Mode::Remote => None,
        }
    }

    pub async fn create_task(&self, draft: &NewTask) -> Result<Task> {
        self.cache
            .mutate(&[self.key()], self.service.create_task(draft))
            .await
    }

    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        self.cache
            .mutate(&[self.key()], self.service.update_task(id, patch))
            .await
    }

    pub async fn complete_task(&self, id: &TaskId, actor_id: &UserId) -> Result<Task> {
        self.cache
            .mutate(&[self.key()], self.service.complete_task(id, actor_id))
            .await
    }

    pub async fn archive_task(&self, id: &TaskId) -> Result<Task> {
        self.cache
            .mutate(&[self.key()], self.service.archive_task(id))
            .await
    }

    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.cache
            .mutate(&[self.key()], self.service.delete_task(id))
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe(self.key())
    }
}

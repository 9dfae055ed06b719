//! Task and category operations, both backends.
//!
//! Remote status transitions ride the merged `PATCH /tasks` endpoint, with
//! the client stamping `completed_at`/`completed_by` the same way the local
//! store does.

use chrono::Utc;

use hearth_shared::{
    FamilyId, NewTask, Result, Task, TaskCategory, TaskId, TaskPatch, TaskPatchBody, TaskStatus,
    UserId,
};

use crate::config::Mode;
use crate::service::DataService;

fn status_param(status: Option<TaskStatus>) -> &'static str {
    match status {
        None => "all",
        Some(TaskStatus::Active) => "active",
        Some(TaskStatus::Completed) => "completed",
        Some(TaskStatus::Archived) => "archived",
    }
}

impl DataService {
    pub async fn categories(&self) -> Result<Vec<TaskCategory>> {
        match self.mode() {
            Mode::Local => Ok(self.store().categories()),
            Mode::Remote => self.api().get("/tasks?categories=true").await,
        }
    }

    pub async fn tasks_for_family(
        &self,
        family_id: &FamilyId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>> {
        match self.mode() {
            Mode::Local => Ok(self.store().tasks_for_family(family_id, status)),
            Mode::Remote => {
                self.api()
                    .get(&format!(
                        "/tasks?family_id={}&status={}",
                        family_id.as_str(),
                        status_param(status)
                    ))
                    .await
            }
        }
    }

    pub async fn create_task(&self, draft: &NewTask) -> Result<Task> {
        draft.validate()?;
        match self.mode() {
            Mode::Local => self.store().create_task(draft),
            Mode::Remote => self.api().post("/tasks", draft).await,
        }
    }

    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        match self.mode() {
            Mode::Local => self.store().update_task(id, patch),
            Mode::Remote => {
                let body = TaskPatchBody {
                    id: id.clone(),
                    status: None,
                    completed_at: None,
                    completed_by: None,
                    patch: patch.clone(),
                };
                self.api().patch("/tasks", &body).await
            }
        }
    }

    pub async fn complete_task(&self, id: &TaskId, actor_id: &UserId) -> Result<Task> {
        match self.mode() {
            Mode::Local => self.store().complete_task(id, actor_id),
            Mode::Remote => {
                let body = TaskPatchBody {
                    id: id.clone(),
                    status: Some(TaskStatus::Completed),
                    completed_at: Some(Utc::now()),
                    completed_by: Some(actor_id.clone()),
                    patch: TaskPatch::default(),
                };
                self.api().patch("/tasks", &body).await
            }
        }
    }

    pub async fn archive_task(&self, id: &TaskId) -> Result<Task> {
        match self.mode() {
            Mode::Local => self.store().archive_task(id),
            Mode::Remote => {
                let body = TaskPatchBody {
                    id: id.clone(),
                    status: Some(TaskStatus::Archived),
                    completed_at: None,
                    completed_by: None,
                    patch: TaskPatch::default(),
                };
                self.api().patch("/tasks", &body).await
            }
        }
    }

    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().delete_task(id),
            Mode::Remote => {
                let _: bool = self
                    .api()
                    .delete(&format!("/tasks?id={}", id.as_str()))
                    .await?;
                Ok(())
            }
        }
    }
}

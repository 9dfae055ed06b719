//! Task and category operations.
//!
//! Task lifecycle is `active -> completed -> archived`; completion stamps
//! `completed_at` and `completed_by` together, archiving keeps them.

use chrono::Utc;

use hearth_shared::{
    DataError, FamilyId, NewTask, Result, Task, TaskCategory, TaskId, TaskPatch, TaskStatus,
    UserId,
};

use crate::store::EntityStore;

impl EntityStore {
    /// Category reference data, in display order.
    pub fn categories(&self) -> Vec<TaskCategory> {
        self.lock().categories.clone()
    }

    /// All of a family's tasks, optionally narrowed to one status.
    pub fn tasks_for_family(&self, family_id: &FamilyId, status: Option<TaskStatus>) -> Vec<Task> {
        self.lock()
            .tasks
            .iter()
            .filter(|t| &t.family_id == family_id)
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect()
    }

    pub fn create_task(&self, draft: &NewTask) -> Result<Task> {
        draft.validate()?;

        let mut data = self.lock();
        if !data.families.iter().any(|f| f.id == draft.family_id) {
            return Err(DataError::NotFound("family"));
        }

        let task = Task {
            id: TaskId::generate(),
            family_id: draft.family_id.clone(),
            created_by: draft.created_by.clone(),
            kind: draft.kind,
            category_id: draft.category_id.clone(),
            title: draft.title.trim().to_string(),
            description: draft.description.clone(),
            quantity: draft.quantity,
            unit: draft.unit.clone(),
            assigned_to: draft.assigned_to.clone(),
            status: TaskStatus::Active,
            completed_at: None,
            completed_by: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        data.tasks.push(task.clone());
        self.persist(&data);
        Ok(task)
    }

    /// Apply a partial edit. Lifecycle fields go through [`complete_task`]
    /// and [`archive_task`] instead.
    pub fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        let mut data = self.lock();
        let task = data
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(DataError::NotFound("task"))?;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(DataError::Validation("task title must not be empty".into()));
            }
            task.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            task.description = Some(description.clone());
        }
        if let Some(category_id) = &patch.category_id {
            task.category_id = Some(category_id.clone());
        }
        if let Some(quantity) = patch.quantity {
            task.quantity = Some(quantity);
        }
        if let Some(unit) = &patch.unit {
            task.unit = Some(unit.clone());
        }
        if let Some(assigned_to) = &patch.assigned_to {
            task.assigned_to = assigned_to.clone();
        }
        task.updated_at = Some(Utc::now());

        let updated = task.clone();
        self.persist(&data);
        Ok(updated)
    }

    /// Mark an active task completed, recording who finished it and when.
    pub fn complete_task(&self, id: &TaskId, actor_id: &UserId) -> Result<Task> {
        let mut data = self.lock();
        let task = data
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(DataError::NotFound("task"))?;

        if task.status != TaskStatus::Active {
            return Err(DataError::Conflict("only active tasks can be completed".into()));
        }

        task.status = TaskStatus::Completed;
        task.completed_at = Some(Utc::now());
        task.completed_by = Some(actor_id.clone());
        task.updated_at = task.completed_at;

        let updated = task.clone();
        self.persist(&data);
        Ok(updated)
    }

    /// Move a completed task out of the main list into the archive.
    pub fn archive_task(&self, id: &TaskId) -> Result<Task> {
        let mut data = self.lock();
        let task = data
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(DataError::NotFound("task"))?;

        if task.status != TaskStatus::Completed {
            return Err(DataError::Conflict(
                "only completed tasks can be archived".into(),
            ));
        }

        task.status = TaskStatus::Archived;
        task.updated_at = Some(Utc::now());

        let updated = task.clone();
        self.persist(&data);
        Ok(updated)
    }

    /// Delete a task outright. Only active tasks may be deleted; finished
    /// ones are archived so the history stays.
    pub fn delete_task(&self, id: &TaskId) -> Result<()> {
        let mut data = self.lock();
        let task = data
            .tasks
            .iter()
            .find(|t| &t.id == id)
            .ok_or(DataError::NotFound("task"))?;

        if task.status != TaskStatus::Active {
            return Err(DataError::Conflict("only active tasks can be deleted".into()));
        }

        data.tasks.retain(|t| &t.id != id);
        self.persist(&data);
        Ok(())
    }
}

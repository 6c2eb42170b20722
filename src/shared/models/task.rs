use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{task_response::TaskResponse, task_status::TaskStatus};

/// A task as it lives in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a task that passed validation and is about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
}

/// Validated partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn new(draft: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(self, changes: TaskChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title.unwrap_or(self.title),
            description: changes.description.unwrap_or(self.description),
            due_date: changes.due_date.unwrap_or(self.due_date),
            status: changes.status.unwrap_or(self.status),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn to_response(&self) -> TaskResponse {
        TaskResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> NewTask {
        NewTask {
            title: "Write report".into(),
            description: "Quarterly numbers".into(),
            due_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn new_task_gets_id_and_matching_timestamps() {
        let task = Task::new(draft());
        assert!(!task.id.is_nil());
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn edit_only_touches_supplied_fields() {
        let task = Task::new(draft());
        let edited = task.clone().edit(TaskChanges {
            status: Some(TaskStatus::Completed),
            ..TaskChanges::default()
        });

        assert_eq!(edited.id, task.id);
        assert_eq!(edited.title, task.title);
        assert_eq!(edited.description, task.description);
        assert_eq!(edited.due_date, task.due_date);
        assert_eq!(edited.created_at, task.created_at);
        assert_eq!(edited.status, TaskStatus::Completed);
        assert!(edited.updated_at >= task.updated_at);
    }

    #[test]
    fn survives_postcard_encoding() {
        let task = Task::new(draft());
        let bytes = postcard::to_allocvec(&task).unwrap();
        let decoded: Task = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, task);
    }
}

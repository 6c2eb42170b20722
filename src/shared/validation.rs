//! Field rules for tasks.
//!
//! Runs before anything is written, whatever the store underneath. Every
//! failing rule contributes one message; the caller gets all of them at once.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{
    create_task_request::CreateTaskRequest,
    due_date_input::DueDateInput,
    task::{NewTask, TaskChanges},
    task_error::{TaskError, ALL_FIELDS_REQUIRED},
    task_status::TaskStatus,
    update_task_request::UpdateTaskRequest,
};

pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

struct TextRule {
    field: &'static str,
    max_chars: usize,
}

const TITLE: TextRule = TextRule { field: "title", max_chars: TITLE_MAX_CHARS };
const DESCRIPTION: TextRule = TextRule { field: "description", max_chars: DESCRIPTION_MAX_CHARS };

pub fn validate_new_task(request: CreateTaskRequest) -> Result<NewTask, TaskError> {
    let (Some(title), Some(description), Some(due_date)) = (
        filled(request.title),
        filled(request.description),
        request.due_date.filter(|due| !due.is_blank()),
    ) else {
        return Err(TaskError::Validation(ALL_FIELDS_REQUIRED.to_string()));
    };

    let mut errors = Vec::new();
    let title = keep(check_text(Some(&title), &TITLE), &mut errors);
    let description = keep(check_text(Some(&description), &DESCRIPTION), &mut errors);
    let due_date = keep(check_due_date(Some(due_date)), &mut errors);
    let status = match request.status {
        Some(raw) => keep(check_status(&raw), &mut errors),
        None => Some(TaskStatus::default()),
    };

    match (title, description, due_date, status) {
        (Some(title), Some(description), Some(due_date), Some(status)) => Ok(NewTask {
            title,
            description,
            due_date,
            status,
        }),
        _ => Err(TaskError::validation(errors)),
    }
}

pub fn validate_changes(request: UpdateTaskRequest) -> Result<TaskChanges, TaskError> {
    let mut errors = Vec::new();

    let title = request
        .title
        .and_then(|value| keep(check_text(value.as_deref(), &TITLE), &mut errors));
    let description = request
        .description
        .and_then(|value| keep(check_text(value.as_deref(), &DESCRIPTION), &mut errors));
    let due_date = request
        .due_date
        .and_then(|value| keep(check_due_date(value), &mut errors));
    let status = request
        .status
        .and_then(|value| keep(check_status(&value), &mut errors));

    if !errors.is_empty() {
        return Err(TaskError::validation(errors));
    }

    Ok(TaskChanges {
        title,
        description,
        due_date,
        status,
    })
}

/// Accepts RFC 3339, a naive datetime (taken as UTC) or a bare date (midnight UTC).
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn keep<T>(checked: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    match checked {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(message);
            None
        }
    }
}

fn check_text(value: Option<&str>, rule: &TextRule) -> Result<String, String> {
    match value {
        None | Some("") => Err(format!("provide a {} for this task", rule.field)),
        Some(text) if text.chars().count() > rule.max_chars => Err(format!(
            "{} cannot be more than {} chars",
            rule.field, rule.max_chars
        )),
        Some(text) => Ok(text.to_string()),
    }
}

fn check_due_date(value: Option<DueDateInput>) -> Result<DateTime<Utc>, String> {
    match value {
        None => Err("provide a due date for this task".to_string()),
        Some(due) if due.is_blank() => Err("provide a due date for this task".to_string()),
        Some(DueDateInput::Millis(millis)) => DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| format!("`{millis}` is not a valid due date")),
        Some(DueDateInput::Text(raw)) => {
            parse_due_date(&raw).ok_or_else(|| format!("`{raw}` is not a valid due date"))
        }
    }
}

fn check_status(raw: &str) -> Result<TaskStatus, String> {
    raw.parse::<TaskStatus>().map_err(|_| {
        let allowed = TaskStatus::ALL.map(|s| s.as_str()).join(", ");
        format!("`{raw}` is not a valid status, expected one of {allowed}")
    })
}

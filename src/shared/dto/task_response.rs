use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task_status::TaskStatus;

/// Wire shape of a task: camelCase keys, ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "iso_millis")]
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

// 2025-01-01T00:00:00.000Z
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_camel_case_with_millisecond_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let response = TaskResponse {
            id: Uuid::nil(),
            title: "A".into(),
            description: "B".into(),
            due_date: at,
            status: TaskStatus::InProgress,
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dueDate"], "2025-01-01T00:00:00.000Z");
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00.000Z");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("due_date").is_none());
    }
}

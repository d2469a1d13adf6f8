use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(anyhow!(
                "Unknown status '{}': expected todo|in_progress|done",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(TaskPriority::Low),
            "MEDIUM" | "MED" => Ok(TaskPriority::Medium),
            "HIGH" => Ok(TaskPriority::High),
            other => Err(anyhow!(
                "Unknown priority '{}': expected low|medium|high",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Create,
    Update,
    Delete,
    Comment,
    Assign,
    StatusChange,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Create,
        ActivityKind::Update,
        ActivityKind::Delete,
        ActivityKind::Comment,
        ActivityKind::Assign,
        ActivityKind::StatusChange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Create => "CREATE",
            ActivityKind::Update => "UPDATE",
            ActivityKind::Delete => "DELETE",
            ActivityKind::Comment => "COMMENT",
            ActivityKind::Assign => "ASSIGN",
            ActivityKind::StatusChange => "STATUS_CHANGE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Create => "Created",
            ActivityKind::Update => "Updated",
            ActivityKind::Delete => "Deleted",
            ActivityKind::Comment => "Commented",
            ActivityKind::Assign => "Assigned",
            ActivityKind::StatusChange => "Status change",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "CREATE" => Ok(ActivityKind::Create),
            "UPDATE" => Ok(ActivityKind::Update),
            "DELETE" => Ok(ActivityKind::Delete),
            "COMMENT" => Ok(ActivityKind::Comment),
            "ASSIGN" => Ok(ActivityKind::Assign),
            "STATUS_CHANGE" => Ok(ActivityKind::StatusChange),
            other => Err(anyhow!(
                "Unknown activity kind '{}': expected create|update|delete|comment|assign|status_change",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub action: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub user: UserRef,
    #[serde(default)]
    pub target_user: Option<UserRef>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub task: Option<TaskRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub project: ProjectRef,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Server-computed pagination metadata. Values are clamped on receipt so a
/// malformed response can never push the UI into negative ranges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub total_pages: i64,
}

impl PageInfo {
    pub fn sanitized(mut self) -> Self {
        self.total_count = self.total_count.max(0);
        self.total_pages = self.total_pages.max(0);
        self.current_page = self.current_page.clamp(1, self.total_pages.max(1));
        self
    }
}

/// One page of a dashboard list query: the items plus the server's
/// pagination metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination_info: PageInfo,
}

impl<T> Page<T> {
    pub fn sanitized(mut self) -> Self {
        self.pagination_info = self.pagination_info.sanitized();
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub action: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn page_info_sanitize_clamps_malformed_values() {
        let info = PageInfo {
            has_next_page: false,
            has_previous_page: false,
            total_count: -3,
            current_page: -1,
            total_pages: -2,
        }
        .sanitized();

        assert_eq!(info.total_count, 0);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.current_page, 1);
    }

    #[test]
    fn page_info_sanitize_caps_current_page() {
        let info = PageInfo {
            has_next_page: false,
            has_previous_page: true,
            total_count: 25,
            current_page: 9,
            total_pages: 3,
        }
        .sanitized();

        assert_eq!(info.current_page, 3);
    }

    #[test]
    fn task_decodes_from_api_shape() {
        let raw = serde_json::json!({
            "id": "t-1",
            "title": "Ship release notes",
            "description": null,
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "dueDate": "2025-06-01",
            "project": { "id": "p-1", "name": "Docs" },
            "assignee": { "id": "u-1", "name": "Sam" },
            "tags": [{ "id": "g-1", "name": "release" }],
            "createdAt": "2025-05-20T10:00:00Z",
            "updatedAt": "2025-05-21T09:30:00Z"
        });

        let task: Task = serde_json::from_value(raw).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.project.name, "Docs");
        assert_eq!(task.tags.len(), 1);
    }

    #[test]
    fn activity_kind_field_uses_type_on_the_wire() {
        let raw = serde_json::json!({
            "id": "a-1",
            "action": "moved task to done",
            "type": "STATUS_CHANGE",
            "user": { "id": "u-1", "name": "Sam" },
            "createdAt": "2025-05-20T10:00:00Z",
            "updatedAt": "2025-05-20T10:00:00Z"
        });

        let activity: Activity = serde_json::from_value(raw).unwrap();
        assert_eq!(activity.kind, ActivityKind::StatusChange);
        assert!(activity.project.is_none());
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{ActivityInput, ActivityKind, TaskInput, TaskPriority, TaskStatus};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_ACTION_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Field-scoped validation errors, keyed by the field identifier used by the
/// form. An empty map means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn put(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

/// Raw text the task modal collects before anything is sent to the API.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: String,
    pub project_id: String,
    pub assignee_id: String,
    pub tag_ids: String,
}

impl TaskDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.put("title", "Title is required");
        } else if title.chars().count() > MAX_TITLE_LEN {
            errors.put("title", format!("Title must be at most {} characters", MAX_TITLE_LEN));
        }

        if self.description.trim().chars().count() > MAX_DESCRIPTION_LEN {
            errors.put(
                "description",
                format!("Description must be at most {} characters", MAX_DESCRIPTION_LEN),
            );
        }

        if self.project_id.trim().is_empty() {
            errors.put("project", "Project is required");
        }

        let due = self.due_date.trim();
        if !due.is_empty() && parse_due_date(due).is_none() {
            errors.put("due_date", "Due date must be YYYY-MM-DD");
        }

        errors
    }

    /// Convert into the mutation input. Call only after `validate` returned
    /// no errors; a still-invalid due date is dropped rather than sent.
    pub fn into_input(self) -> TaskInput {
        TaskInput {
            title: self.title.trim().to_string(),
            description: none_if_blank(&self.description),
            status: self.status,
            priority: self.priority,
            due_date: parse_due_date(self.due_date.trim()),
            project_id: self.project_id.trim().to_string(),
            assignee_id: none_if_blank(&self.assignee_id),
            tag_ids: split_ids(&self.tag_ids),
        }
    }
}

/// Raw text the activity modal collects.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub action: String,
    pub kind: ActivityKind,
    pub target_user_id: String,
    pub project_id: String,
    pub task_id: String,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            action: String::new(),
            kind: ActivityKind::Create,
            target_user_id: String::new(),
            project_id: String::new(),
            task_id: String::new(),
        }
    }
}

impl ActivityDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let action = self.action.trim();
        if action.is_empty() {
            errors.put("action", "Action is required");
        } else if action.chars().count() > MAX_ACTION_LEN {
            errors.put(
                "action",
                format!("Action must be at most {} characters", MAX_ACTION_LEN),
            );
        }

        errors
    }

    pub fn into_input(self) -> ActivityInput {
        ActivityInput {
            action: self.action.trim().to_string(),
            kind: self.kind,
            target_user_id: none_if_blank(&self.target_user_id),
            project_id: none_if_blank(&self.project_id),
            task_id: none_if_blank(&self.task_id),
        }
    }
}

fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn split_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_a_field_error() {
        let draft = TaskDraft {
            title: "   ".into(),
            project_id: "p-1".into(),
            ..TaskDraft::default()
        };
        let errors = draft.validate();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.get("project").is_none());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let draft = TaskDraft {
            title: "x".repeat(MAX_TITLE_LEN + 1),
            project_id: "p-1".into(),
            ..TaskDraft::default()
        };
        assert!(draft.validate().get("title").is_some());
    }

    #[test]
    fn missing_project_is_a_field_error() {
        let draft = TaskDraft {
            title: "Write docs".into(),
            ..TaskDraft::default()
        };
        assert_eq!(draft.validate().get("project"), Some("Project is required"));
    }

    #[test]
    fn malformed_due_date_is_rejected_blank_is_fine() {
        let mut draft = TaskDraft {
            title: "Write docs".into(),
            project_id: "p-1".into(),
            due_date: "next tuesday".into(),
            ..TaskDraft::default()
        };
        assert!(draft.validate().get("due_date").is_some());

        draft.due_date = "2025-06-01".into();
        assert!(draft.validate().is_empty());

        draft.due_date = String::new();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn clearing_a_field_error_leaves_the_rest() {
        let draft = TaskDraft::default();
        let mut errors = draft.validate();
        assert!(errors.get("title").is_some());
        assert!(errors.get("project").is_some());

        errors.clear("title");
        assert!(errors.get("title").is_none());
        assert!(errors.get("project").is_some());
    }

    #[test]
    fn draft_converts_to_trimmed_input() {
        let draft = TaskDraft {
            title: "  Write docs  ".into(),
            description: "   ".into(),
            due_date: "2025-06-01".into(),
            project_id: " p-1 ".into(),
            assignee_id: String::new(),
            tag_ids: "g-1, g-2,,".into(),
            ..TaskDraft::default()
        };

        let input = draft.into_input();
        assert_eq!(input.title, "Write docs");
        assert!(input.description.is_none());
        assert_eq!(input.project_id, "p-1");
        assert!(input.assignee_id.is_none());
        assert_eq!(input.tag_ids, vec!["g-1".to_string(), "g-2".to_string()]);
        assert!(input.due_date.is_some());
    }

    #[test]
    fn activity_action_bounds_are_enforced() {
        let mut draft = ActivityDraft {
            action: String::new(),
            ..ActivityDraft::default()
        };
        assert_eq!(draft.validate().get("action"), Some("Action is required"));

        draft.action = "x".repeat(MAX_ACTION_LEN);
        assert!(draft.validate().is_empty());

        draft.action.push('x');
        assert!(draft.validate().get("action").is_some());
    }
}

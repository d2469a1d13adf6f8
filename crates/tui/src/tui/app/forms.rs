//! Modal create/edit form state for tasks and activities.

use taskdeck_core::model::{Activity, ActivityKind, Task, TaskPriority, TaskStatus};
use taskdeck_core::validate::{ActivityDraft, FieldErrors, TaskDraft};

use crate::tui::buffer::FieldBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormTarget {
    CreateTask,
    EditTask(String),
    CreateActivity,
    EditActivity(String),
}

#[derive(Debug)]
pub(crate) enum FieldWidget {
    Text(FieldBuffer),
    Select { options: Vec<&'static str>, index: usize },
}

#[derive(Debug)]
pub(crate) struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub widget: FieldWidget,
}

impl FormField {
    fn text(key: &'static str, label: &'static str, required: bool, value: &str) -> Self {
        Self {
            key,
            label,
            required,
            widget: FieldWidget::Text(FieldBuffer::from_text(value)),
        }
    }

    fn select(
        key: &'static str,
        label: &'static str,
        options: Vec<&'static str>,
        index: usize,
    ) -> Self {
        Self {
            key,
            label,
            required: false,
            widget: FieldWidget::Select { options, index },
        }
    }

    pub(crate) fn display_value(&self) -> &str {
        match &self.widget {
            FieldWidget::Text(buffer) => buffer.as_str(),
            FieldWidget::Select { options, index } => options.get(*index).copied().unwrap_or(""),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ModalForm {
    pub target: FormTarget,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
    pub submitting: bool,
}

impl ModalForm {
    pub(crate) fn create_task() -> Self {
        Self::task_fields(FormTarget::CreateTask, &TaskDraft::default())
    }

    pub(crate) fn edit_task(task: &Task) -> Self {
        let draft = TaskDraft {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            project_id: task.project.id.clone(),
            assignee_id: task
                .assignee
                .as_ref()
                .map(|user| user.id.clone())
                .unwrap_or_default(),
            tag_ids: task
                .tags
                .iter()
                .map(|tag| tag.id.clone())
                .collect::<Vec<_>>()
                .join(", "),
        };
        Self::task_fields(FormTarget::EditTask(task.id.clone()), &draft)
    }

    fn task_fields(target: FormTarget, draft: &TaskDraft) -> Self {
        let status_index = TaskStatus::ALL
            .iter()
            .position(|status| *status == draft.status)
            .unwrap_or(0);
        let priority_index = TaskPriority::ALL
            .iter()
            .position(|priority| *priority == draft.priority)
            .unwrap_or(0);

        Self {
            target,
            fields: vec![
                FormField::text("title", "Title", true, &draft.title),
                FormField::text("description", "Description", false, &draft.description),
                FormField::select(
                    "status",
                    "Status",
                    TaskStatus::ALL.iter().map(TaskStatus::label).collect(),
                    status_index,
                ),
                FormField::select(
                    "priority",
                    "Priority",
                    TaskPriority::ALL.iter().map(TaskPriority::label).collect(),
                    priority_index,
                ),
                FormField::text("due_date", "Due (YYYY-MM-DD)", false, &draft.due_date),
                FormField::text("project", "Project id", true, &draft.project_id),
                FormField::text("assignee", "Assignee id", false, &draft.assignee_id),
                FormField::text("tags", "Tag ids (comma separated)", false, &draft.tag_ids),
            ],
            focus: 0,
            errors: FieldErrors::default(),
            submit_error: None,
            submitting: false,
        }
    }

    pub(crate) fn create_activity() -> Self {
        Self::activity_fields(FormTarget::CreateActivity, &ActivityDraft::default())
    }

    pub(crate) fn edit_activity(activity: &Activity) -> Self {
        let draft = ActivityDraft {
            action: activity.action.clone(),
            kind: activity.kind,
            target_user_id: activity
                .target_user
                .as_ref()
                .map(|user| user.id.clone())
                .unwrap_or_default(),
            project_id: activity
                .project
                .as_ref()
                .map(|project| project.id.clone())
                .unwrap_or_default(),
            task_id: activity
                .task
                .as_ref()
                .map(|task| task.id.clone())
                .unwrap_or_default(),
        };
        Self::activity_fields(FormTarget::EditActivity(activity.id.clone()), &draft)
    }

    fn activity_fields(target: FormTarget, draft: &ActivityDraft) -> Self {
        let kind_index = ActivityKind::ALL
            .iter()
            .position(|kind| *kind == draft.kind)
            .unwrap_or(0);

        Self {
            target,
            fields: vec![
                FormField::text("action", "Action", true, &draft.action),
                FormField::select(
                    "kind",
                    "Kind",
                    ActivityKind::ALL.iter().map(ActivityKind::label).collect(),
                    kind_index,
                ),
                FormField::text("target_user", "Target user id", false, &draft.target_user_id),
                FormField::text("project", "Project id", false, &draft.project_id),
                FormField::text("task", "Task id", false, &draft.task_id),
            ],
            focus: 0,
            errors: FieldErrors::default(),
            submit_error: None,
            submitting: false,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.target {
            FormTarget::CreateTask => "New Task",
            FormTarget::EditTask(_) => "Edit Task",
            FormTarget::CreateActivity => "New Activity",
            FormTarget::EditActivity(_) => "Edit Activity",
        }
    }

    pub(crate) fn is_task_form(&self) -> bool {
        matches!(
            self.target,
            FormTarget::CreateTask | FormTarget::EditTask(_)
        )
    }

    pub(crate) fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub(crate) fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.focus == 0 {
            self.focus = self.fields.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Editing a field clears that field's error immediately; the submit-level
    /// error clears on any edit.
    pub(crate) fn insert_char(&mut self, ch: char) {
        let key = self.fields[self.focus].key;
        if let FieldWidget::Text(buffer) = &mut self.fields[self.focus].widget {
            buffer.insert_char(ch);
            self.errors.clear(key);
            self.submit_error = None;
        }
    }

    pub(crate) fn backspace(&mut self) {
        let key = self.fields[self.focus].key;
        if let FieldWidget::Text(buffer) = &mut self.fields[self.focus].widget {
            buffer.backspace();
            self.errors.clear(key);
            self.submit_error = None;
        }
    }

    pub(crate) fn delete_char(&mut self) {
        let key = self.fields[self.focus].key;
        if let FieldWidget::Text(buffer) = &mut self.fields[self.focus].widget {
            buffer.delete_char();
            self.errors.clear(key);
            self.submit_error = None;
        }
    }

    /// Left/right on a select cycles choices; on a text field it moves the
    /// cursor.
    pub(crate) fn horizontal(&mut self, delta: i32) {
        let key = self.fields[self.focus].key;
        match &mut self.fields[self.focus].widget {
            FieldWidget::Text(buffer) => {
                if delta < 0 {
                    buffer.move_left();
                } else {
                    buffer.move_right();
                }
            }
            FieldWidget::Select { options, index } => {
                if options.is_empty() {
                    return;
                }
                let len = options.len() as i32;
                let next = (*index as i32 + delta).rem_euclid(len);
                *index = next as usize;
                self.errors.clear(key);
                self.submit_error = None;
            }
        }
    }

    fn text_value(&self, key: &str) -> String {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| match &field.widget {
                FieldWidget::Text(buffer) => buffer.as_str().to_string(),
                FieldWidget::Select { .. } => String::new(),
            })
            .unwrap_or_default()
    }

    fn select_index(&self, key: &str) -> usize {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .and_then(|field| match &field.widget {
                FieldWidget::Select { index, .. } => Some(*index),
                FieldWidget::Text(_) => None,
            })
            .unwrap_or(0)
    }

    pub(crate) fn task_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.text_value("title"),
            description: self.text_value("description"),
            status: TaskStatus::ALL[self.select_index("status").min(TaskStatus::ALL.len() - 1)],
            priority: TaskPriority::ALL
                [self.select_index("priority").min(TaskPriority::ALL.len() - 1)],
            due_date: self.text_value("due_date"),
            project_id: self.text_value("project"),
            assignee_id: self.text_value("assignee"),
            tag_ids: self.text_value("tags"),
        }
    }

    pub(crate) fn activity_draft(&self) -> ActivityDraft {
        ActivityDraft {
            action: self.text_value("action"),
            kind: ActivityKind::ALL[self.select_index("kind").min(ActivityKind::ALL.len() - 1)],
            target_user_id: self.text_value("target_user"),
            project_id: self.text_value("project"),
            task_id: self.text_value("task"),
        }
    }

    /// Run validation for the current draft. Returns true when submittable.
    pub(crate) fn validate(&mut self) -> bool {
        self.errors = if self.is_task_form() {
            self.task_draft().validate()
        } else {
            self.activity_draft().validate()
        };
        self.errors.is_empty()
    }
}

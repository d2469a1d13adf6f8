//! Async bridge between the event loop and the dashboard service: fetches and
//! mutations run as tokio tasks and report back over the outcome channel.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use taskdeck_core::flow::FetchTicket;
use taskdeck_core::model::{
    Activity, ActivityInput, Page, Project, Tag, Task, TaskInput, User,
};
use taskdeck_core::{DashboardService, ListQuery};

use super::Tab;

#[derive(Debug)]
pub(crate) enum ListPayload {
    Activities(Page<Activity>),
    Tasks(Page<Task>),
    Users(Page<User>),
    Projects(Page<Project>),
    Tags(Page<Tag>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MutationAction {
    CreateTask,
    UpdateTask,
    DeleteTask,
    CreateActivity,
    UpdateActivity,
    DeleteActivity,
}

impl MutationAction {
    pub(crate) fn failure_message(&self) -> &'static str {
        match self {
            MutationAction::CreateTask => "Failed to create task",
            MutationAction::UpdateTask => "Failed to update task",
            MutationAction::DeleteTask => "Failed to delete task",
            MutationAction::CreateActivity => "Failed to create activity",
            MutationAction::UpdateActivity => "Failed to update activity",
            MutationAction::DeleteActivity => "Failed to delete activity",
        }
    }
}

#[derive(Debug)]
pub(crate) enum MutationRequest {
    CreateTask(TaskInput),
    UpdateTask { id: String, input: TaskInput },
    DeleteTask { id: String, title: String },
    CreateActivity(ActivityInput),
    UpdateActivity { id: String, input: ActivityInput },
    DeleteActivity { id: String, action: String },
}

impl MutationRequest {
    pub(crate) fn action(&self) -> MutationAction {
        match self {
            MutationRequest::CreateTask(_) => MutationAction::CreateTask,
            MutationRequest::UpdateTask { .. } => MutationAction::UpdateTask,
            MutationRequest::DeleteTask { .. } => MutationAction::DeleteTask,
            MutationRequest::CreateActivity(_) => MutationAction::CreateActivity,
            MutationRequest::UpdateActivity { .. } => MutationAction::UpdateActivity,
            MutationRequest::DeleteActivity { .. } => MutationAction::DeleteActivity,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Outcome {
    ListLoaded {
        tab: Tab,
        ticket: FetchTicket,
        result: Result<ListPayload, String>,
    },
    MutationFinished {
        action: MutationAction,
        result: Result<String, String>,
    },
}

/// Spawn one list fetch. The returned handle lives in the caller's single
/// in-flight slot; aborting it suppresses the outcome entirely, which is how
/// a superseded request avoids surfacing a cancellation error.
pub(crate) fn spawn_list_fetch(
    runtime: &Handle,
    outcomes: Sender<Outcome>,
    service: DashboardService,
    tab: Tab,
    query: ListQuery,
    ticket: FetchTicket,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let result = match tab {
            Tab::Activities => service
                .activities(&query)
                .await
                .map(ListPayload::Activities),
            Tab::Tasks => service.tasks(&query).await.map(ListPayload::Tasks),
            Tab::Users => service.users(&query).await.map(ListPayload::Users),
            Tab::Projects => service.projects(&query).await.map(ListPayload::Projects),
            Tab::Tags => service.tags(&query).await.map(ListPayload::Tags),
        }
        .map_err(|err| err.to_string());

        let _ = outcomes.send(Outcome::ListLoaded {
            tab,
            ticket,
            result,
        });
    })
}

pub(crate) fn spawn_mutation(
    runtime: &Handle,
    outcomes: Sender<Outcome>,
    service: DashboardService,
    request: MutationRequest,
) {
    let action = request.action();
    runtime.spawn(async move {
        let result = match request {
            MutationRequest::CreateTask(input) => service
                .create_task(&input)
                .await
                .map(|task| format!("Created task '{}'", task.title)),
            MutationRequest::UpdateTask { id, input } => service
                .update_task(&id, &input)
                .await
                .map(|task| format!("Updated task '{}'", task.title)),
            MutationRequest::DeleteTask { id, title } => {
                service.delete_task(&id).await.map(|deleted| {
                    if deleted {
                        format!("Deleted task '{}'", title)
                    } else {
                        format!("Task '{}' was already gone", title)
                    }
                })
            }
            MutationRequest::CreateActivity(input) => service
                .create_activity(&input)
                .await
                .map(|activity| format!("Logged activity '{}'", activity.action)),
            MutationRequest::UpdateActivity { id, input } => service
                .update_activity(&id, &input)
                .await
                .map(|activity| format!("Updated activity '{}'", activity.action)),
            MutationRequest::DeleteActivity { id, action } => {
                service.delete_activity(&id).await.map(|deleted| {
                    if deleted {
                        format!("Deleted activity '{}'", action)
                    } else {
                        format!("Activity '{}' was already gone", action)
                    }
                })
            }
        }
        .map_err(|err| err.to_string());

        let _ = outcomes.send(Outcome::MutationFinished { action, result });
    });
}

use serde_json::json;
use tracing::debug;

use crate::client::{ApiError, GraphqlClient};
use crate::config::ApiConfig;
use crate::listing::ListQuery;
use crate::model::{
    Activity, ActivityInput, Page, Project, Tag, Task, TaskInput, User,
};
use crate::queries;

/// Typed facade over the dashboard GraphQL API: one method per query and
/// mutation the views consume. Pagination metadata is sanitized on the way
/// in so callers never see malformed server values.
#[derive(Debug, Clone)]
pub struct DashboardService {
    client: GraphqlClient,
}

impl DashboardService {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: GraphqlClient::new(config)?,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        self.client.config()
    }

    pub async fn activities(&self, query: &ListQuery) -> Result<Page<Activity>, ApiError> {
        self.list(queries::ACTIVITIES, queries::ACTIVITIES_FIELD, query)
            .await
    }

    pub async fn tasks(&self, query: &ListQuery) -> Result<Page<Task>, ApiError> {
        self.list(queries::TASKS, queries::TASKS_FIELD, query).await
    }

    pub async fn users(&self, query: &ListQuery) -> Result<Page<User>, ApiError> {
        self.list(queries::USERS, queries::USERS_FIELD, query).await
    }

    pub async fn projects(&self, query: &ListQuery) -> Result<Page<Project>, ApiError> {
        self.list(queries::PROJECTS, queries::PROJECTS_FIELD, query)
            .await
    }

    pub async fn tags(&self, query: &ListQuery) -> Result<Page<Tag>, ApiError> {
        self.list(queries::TAGS, queries::TAGS_FIELD, query).await
    }

    pub async fn create_task(&self, input: &TaskInput) -> Result<Task, ApiError> {
        self.client
            .execute(
                queries::CREATE_TASK,
                queries::CREATE_TASK_FIELD,
                json!({ "input": input }),
            )
            .await
    }

    pub async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task, ApiError> {
        self.client
            .execute(
                queries::UPDATE_TASK,
                queries::UPDATE_TASK_FIELD,
                json!({ "id": id, "input": input }),
            )
            .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<bool, ApiError> {
        self.client
            .execute(
                queries::DELETE_TASK,
                queries::DELETE_TASK_FIELD,
                json!({ "id": id }),
            )
            .await
    }

    pub async fn create_activity(&self, input: &ActivityInput) -> Result<Activity, ApiError> {
        self.client
            .execute(
                queries::CREATE_ACTIVITY,
                queries::CREATE_ACTIVITY_FIELD,
                json!({ "input": input }),
            )
            .await
    }

    pub async fn update_activity(
        &self,
        id: &str,
        input: &ActivityInput,
    ) -> Result<Activity, ApiError> {
        self.client
            .execute(
                queries::UPDATE_ACTIVITY,
                queries::UPDATE_ACTIVITY_FIELD,
                json!({ "id": id, "input": input }),
            )
            .await
    }

    pub async fn delete_activity(&self, id: &str) -> Result<bool, ApiError> {
        self.client
            .execute(
                queries::DELETE_ACTIVITY,
                queries::DELETE_ACTIVITY_FIELD,
                json!({ "id": id }),
            )
            .await
    }

    async fn list<T>(
        &self,
        document: &'static str,
        field: &'static str,
        query: &ListQuery,
    ) -> Result<Page<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let page: Page<T> = self
            .client
            .execute(document, field, query.variables())
            .await?;
        let page = page.sanitized();
        debug!(
            field,
            count = page.items.len(),
            total = page.pagination_info.total_count,
            "dashboard list loaded"
        );
        Ok(page)
    }
}

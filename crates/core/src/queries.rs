//! GraphQL operation documents consumed by the dashboard service. Each
//! document is paired with the response field it unwraps under.

pub const ACTIVITIES_FIELD: &str = "dashboardActivities";
pub const ACTIVITIES: &str = "\
query DashboardActivities($limit: Int!, $offset: Int!, $search: String, $sortBy: String, $sortOrder: String) {
  dashboardActivities(limit: $limit, offset: $offset, search: $search, sortBy: $sortBy, sortOrder: $sortOrder) {
    items {
      id
      action
      type
      user { id name }
      targetUser { id name }
      project { id name }
      task { id title }
      createdAt
      updatedAt
    }
    paginationInfo { hasNextPage hasPreviousPage totalCount currentPage totalPages }
  }
}";

pub const TASKS_FIELD: &str = "dashboardTasks";
pub const TASKS: &str = "\
query DashboardTasks($limit: Int!, $offset: Int!, $search: String, $sortBy: String, $sortOrder: String) {
  dashboardTasks(limit: $limit, offset: $offset, search: $search, sortBy: $sortBy, sortOrder: $sortOrder) {
    items {
      id
      title
      description
      status
      priority
      dueDate
      project { id name }
      assignee { id name }
      tags { id name }
      createdAt
      updatedAt
    }
    paginationInfo { hasNextPage hasPreviousPage totalCount currentPage totalPages }
  }
}";

pub const USERS_FIELD: &str = "users";
pub const USERS: &str = "\
query Users($limit: Int!, $offset: Int!, $search: String, $sortBy: String, $sortOrder: String) {
  users(limit: $limit, offset: $offset, search: $search, sortBy: $sortBy, sortOrder: $sortOrder) {
    items { id name email createdAt }
    paginationInfo { hasNextPage hasPreviousPage totalCount currentPage totalPages }
  }
}";

pub const PROJECTS_FIELD: &str = "dashboardProjects";
pub const PROJECTS: &str = "\
query DashboardProjects($limit: Int!, $offset: Int!, $search: String, $sortBy: String, $sortOrder: String) {
  dashboardProjects(limit: $limit, offset: $offset, search: $search, sortBy: $sortBy, sortOrder: $sortOrder) {
    items { id name description createdAt }
    paginationInfo { hasNextPage hasPreviousPage totalCount currentPage totalPages }
  }
}";

pub const TAGS_FIELD: &str = "dashboardTags";
pub const TAGS: &str = "\
query DashboardTags($limit: Int!, $offset: Int!, $search: String, $sortBy: String, $sortOrder: String) {
  dashboardTags(limit: $limit, offset: $offset, search: $search, sortBy: $sortBy, sortOrder: $sortOrder) {
    items { id name color createdAt }
    paginationInfo { hasNextPage hasPreviousPage totalCount currentPage totalPages }
  }
}";

pub const CREATE_TASK_FIELD: &str = "createTask";
pub const CREATE_TASK: &str = "\
mutation CreateTask($input: TaskInput!) {
  createTask(input: $input) {
    id
    title
    description
    status
    priority
    dueDate
    project { id name }
    assignee { id name }
    tags { id name }
    createdAt
    updatedAt
  }
}";

pub const UPDATE_TASK_FIELD: &str = "updateTask";
pub const UPDATE_TASK: &str = "\
mutation UpdateTask($id: ID!, $input: TaskInput!) {
  updateTask(id: $id, input: $input) {
    id
    title
    description
    status
    priority
    dueDate
    project { id name }
    assignee { id name }
    tags { id name }
    createdAt
    updatedAt
  }
}";

pub const DELETE_TASK_FIELD: &str = "deleteTask";
pub const DELETE_TASK: &str = "\
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id)
}";

pub const CREATE_ACTIVITY_FIELD: &str = "createActivity";
pub const CREATE_ACTIVITY: &str = "\
mutation CreateActivity($input: ActivityInput!) {
  createActivity(input: $input) {
    id
    action
    type
    user { id name }
    targetUser { id name }
    project { id name }
    task { id title }
    createdAt
    updatedAt
  }
}";

pub const UPDATE_ACTIVITY_FIELD: &str = "updateActivity";
pub const UPDATE_ACTIVITY: &str = "\
mutation UpdateActivity($id: ID!, $input: ActivityInput!) {
  updateActivity(id: $id, input: $input) {
    id
    action
    type
    user { id name }
    targetUser { id name }
    project { id name }
    task { id title }
    createdAt
    updatedAt
  }
}";

pub const DELETE_ACTIVITY_FIELD: &str = "deleteActivity";
pub const DELETE_ACTIVITY: &str = "\
mutation DeleteActivity($id: ID!) {
  deleteActivity(id: $id)
}";

pub mod client;
pub mod config;
pub mod flow;
pub mod listing;
pub mod model;
pub mod queries;
pub mod services;
pub mod validate;

pub use client::ApiError;
pub use config::ApiConfig;
pub use flow::{Debouncer, FetchGate, FetchTicket};
pub use listing::{display_range, ListQuery, SortColumn, SortOrder, SortSelection};
pub use model::*;
pub use services::DashboardService;
pub use validate::{ActivityDraft, FieldErrors, TaskDraft};

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::widgets::TableState;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use taskdeck_core::flow::{Debouncer, FetchGate, FetchTicket};
use taskdeck_core::model::{Activity, PageInfo, Project, Tag, Task, User};
use taskdeck_core::{DashboardService, ListQuery, SortColumn};

use super::buffer::FieldBuffer;
use super::constants::*;
use super::helpers::{format_datetime, format_opt_date};

mod fetch;
mod forms;
mod input;
mod render;
#[cfg(test)]
mod tests;

use fetch::{
    spawn_list_fetch, spawn_mutation, ListPayload, MutationAction, MutationRequest, Outcome,
};
use forms::{FormTarget, ModalForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Tab {
    Activities,
    Tasks,
    Users,
    Projects,
    Tags,
}

impl Tab {
    pub(crate) const ALL: [Tab; 5] = [
        Tab::Activities,
        Tab::Tasks,
        Tab::Users,
        Tab::Projects,
        Tab::Tags,
    ];

    fn index(self) -> usize {
        match self {
            Tab::Activities => 0,
            Tab::Tasks => 1,
            Tab::Users => 2,
            Tab::Projects => 3,
            Tab::Tags => 4,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Activities => "Activity",
            Tab::Tasks => "Tasks",
            Tab::Users => "Users",
            Tab::Projects => "Projects",
            Tab::Tags => "Tags",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            Tab::Activities => "Latest actions across the workspace",
            Tab::Tasks => "Every task with status, priority, and owners",
            Tab::Users => "People with access to the workspace",
            Tab::Projects => "Projects grouping the work",
            Tab::Tags => "Labels available for tasks",
        }
    }

    /// Column headers with their sort mapping; `None` marks an unsortable
    /// column.
    pub(crate) fn columns(self) -> &'static [(&'static str, Option<SortColumn>)] {
        match self {
            Tab::Activities => &[
                ("Action", Some(SortColumn::Action)),
                ("Kind", Some(SortColumn::Kind)),
                ("User", Some(SortColumn::User)),
                ("Target", Some(SortColumn::Target)),
                ("Created", Some(SortColumn::Created)),
            ],
            Tab::Tasks => &[
                ("Title", Some(SortColumn::Title)),
                ("Status", Some(SortColumn::Status)),
                ("Pri", Some(SortColumn::Priority)),
                ("Due", Some(SortColumn::Due)),
                ("Project", Some(SortColumn::Project)),
                ("Assignee", Some(SortColumn::Assignee)),
                ("Created", Some(SortColumn::Created)),
            ],
            Tab::Users => &[
                ("Name", Some(SortColumn::Name)),
                ("Email", Some(SortColumn::Email)),
                ("Created", Some(SortColumn::Created)),
            ],
            Tab::Projects => &[
                ("Name", Some(SortColumn::Name)),
                ("Description", None),
                ("Created", Some(SortColumn::Created)),
            ],
            Tab::Tags => &[
                ("Name", Some(SortColumn::Name)),
                ("Color", Some(SortColumn::Color)),
                ("Created", Some(SortColumn::Created)),
            ],
        }
    }

    pub(crate) fn supports_crud(self) -> bool {
        matches!(self, Tab::Activities | Tab::Tasks)
    }
}

#[derive(Debug)]
pub(crate) enum Listing {
    Activities(Vec<Activity>),
    Tasks(Vec<Task>),
    Users(Vec<User>),
    Projects(Vec<Project>),
    Tags(Vec<Tag>),
}

impl Listing {
    fn empty_for(tab: Tab) -> Self {
        match tab {
            Tab::Activities => Listing::Activities(Vec::new()),
            Tab::Tasks => Listing::Tasks(Vec::new()),
            Tab::Users => Listing::Users(Vec::new()),
            Tab::Projects => Listing::Projects(Vec::new()),
            Tab::Tags => Listing::Tags(Vec::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Listing::Activities(items) => items.len(),
            Listing::Tasks(items) => items.len(),
            Listing::Users(items) => items.len(),
            Listing::Projects(items) => items.len(),
            Listing::Tags(items) => items.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadState {
    Idle,
    Loading,
    Error(String),
}

/// Per-view cache of the last successful server response plus the query that
/// produced it.
#[derive(Debug)]
pub(crate) struct ListStore {
    pub(crate) query: ListQuery,
    pub(crate) listing: Listing,
    pub(crate) page_info: Option<PageInfo>,
    pub(crate) load: LoadState,
}

impl ListStore {
    fn new(tab: Tab, page_size: u32) -> Self {
        Self {
            query: ListQuery::new(page_size),
            listing: Listing::empty_for(tab),
            page_info: None,
            load: LoadState::Idle,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Skeleton rows are a first-load affordance only; refetches keep the
    /// stale rows on screen.
    pub(crate) fn shows_skeleton(&self) -> bool {
        self.is_loading() && self.listing.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Normal,
    Search,
    Form,
    ConfirmDelete,
    Inspect,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    service: DashboardService,
    runtime: Handle,
    outcomes_tx: Sender<Outcome>,
    outcomes_rx: Receiver<Outcome>,
    active: Tab,
    stores: [ListStore; 5],
    selected: usize,
    table_state: TableState,
    mode: Mode,
    search_input: FieldBuffer,
    form: Option<ModalForm>,
    confirm_choice: ConfirmChoice,
    confirm_target: Option<(String, String)>,
    inspect_entries: Option<Vec<(String, String)>>,
    status: Option<StatusMessage>,
    search_debounce: Debouncer,
    page_debounce: Debouncer,
    gate: FetchGate,
    inflight: Option<JoinHandle<()>>,
    pending_mutations: usize,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(service: DashboardService, runtime: Handle) -> Self {
        let (outcomes_tx, outcomes_rx) = std::sync::mpsc::channel();
        let page_size = service.config().page_size();
        let stores = Tab::ALL.map(|tab| ListStore::new(tab, page_size));

        Self {
            service,
            runtime,
            outcomes_tx,
            outcomes_rx,
            active: Tab::Activities,
            stores,
            selected: 0,
            table_state: TableState::default(),
            mode: Mode::Normal,
            search_input: FieldBuffer::new(),
            form: None,
            confirm_choice: ConfirmChoice::No,
            confirm_target: None,
            inspect_entries: None,
            status: None,
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            page_debounce: Debouncer::new(PAGE_DEBOUNCE),
            gate: FetchGate::new(),
            inflight: None,
            pending_mutations: 0,
            should_quit: false,
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn store(&self, tab: Tab) -> &ListStore {
        &self.stores[tab.index()]
    }

    fn store_mut(&mut self, tab: Tab) -> &mut ListStore {
        &mut self.stores[tab.index()]
    }

    pub(crate) fn active_store(&self) -> &ListStore {
        self.store(self.active)
    }

    // --- fetch plumbing -----------------------------------------------------

    /// Invalidate earlier tickets, cancel the in-flight request if any, and
    /// flip the store to loading. Spawning is separate so tests can drive the
    /// bookkeeping without a live server.
    fn begin_fetch(&mut self, tab: Tab) -> FetchTicket {
        let ticket = self.gate.issue();
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
        self.store_mut(tab).load = LoadState::Loading;
        ticket
    }

    pub(crate) fn request_fetch(&mut self, tab: Tab) {
        let ticket = self.begin_fetch(tab);
        let query = self.store(tab).query.clone();
        debug!(tab = tab.title(), page = query.page, "list fetch issued");
        let handle = spawn_list_fetch(
            &self.runtime,
            self.outcomes_tx.clone(),
            self.service.clone(),
            tab,
            query,
            ticket,
        );
        self.inflight = Some(handle);
    }

    pub(crate) fn refresh_active(&mut self) {
        self.request_fetch(self.active);
    }

    pub(crate) fn drain_outcomes(&mut self) {
        loop {
            match self.outcomes_rx.try_recv() {
                Ok(outcome) => self.on_outcome(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::ListLoaded {
                tab,
                ticket,
                result,
            } => self.apply_list_outcome(tab, ticket, result),
            Outcome::MutationFinished { action, result } => {
                self.finish_mutation(action, result)
            }
        }
    }

    /// Only the most recently issued request may update state; anything else
    /// lost the race and is dropped.
    fn apply_list_outcome(
        &mut self,
        tab: Tab,
        ticket: FetchTicket,
        result: Result<ListPayload, String>,
    ) {
        if !self.gate.admits(ticket) {
            debug!(tab = tab.title(), "stale list response discarded");
            return;
        }
        self.inflight = None;

        let store = self.store_mut(tab);
        match result {
            Ok(payload) => {
                let (listing, info) = match payload {
                    ListPayload::Activities(page) => {
                        (Listing::Activities(page.items), page.pagination_info)
                    }
                    ListPayload::Tasks(page) => (Listing::Tasks(page.items), page.pagination_info),
                    ListPayload::Users(page) => (Listing::Users(page.items), page.pagination_info),
                    ListPayload::Projects(page) => {
                        (Listing::Projects(page.items), page.pagination_info)
                    }
                    ListPayload::Tags(page) => (Listing::Tags(page.items), page.pagination_info),
                };
                store.listing = listing;
                store.page_info = Some(info);
                store.load = LoadState::Idle;
                self.clamp_selection();
            }
            Err(message) => {
                // Stale rows stay visible; only the load state carries the
                // failure.
                store.load = LoadState::Error(message.clone());
                self.set_status_error(message);
            }
        }
    }

    fn finish_mutation(&mut self, action: MutationAction, result: Result<String, String>) {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
        match result {
            Ok(summary) => {
                self.form = None;
                self.confirm_target = None;
                if matches!(self.mode, Mode::Form | Mode::ConfirmDelete) {
                    self.mode = Mode::Normal;
                }
                self.set_status_info(summary);
                // Refetch with page/search/sort untouched.
                self.refresh_active();
            }
            Err(message) => {
                let failure = format!("{}: {}", action.failure_message(), message);
                match self.mode {
                    Mode::Form => {
                        if let Some(form) = &mut self.form {
                            form.submitting = false;
                            form.submit_error = Some(failure.clone());
                        }
                    }
                    Mode::ConfirmDelete => {
                        self.confirm_target = None;
                        self.mode = Mode::Normal;
                    }
                    _ => {}
                }
                self.set_status_error(failure);
            }
        }
    }

    // --- timers -------------------------------------------------------------

    pub(crate) fn on_tick(&mut self) {
        let now = Instant::now();
        self.drive_debounce(now);
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > TOAST_TTL {
                self.status = None;
            }
        }
    }

    /// Fire due debouncers. Split out from `on_tick` so tests can pass a
    /// synthetic clock.
    pub(crate) fn drive_debounce(&mut self, now: Instant) {
        if self.search_debounce.fire(now) {
            self.request_fetch(self.active);
        }
        if self.page_debounce.fire(now) {
            self.request_fetch(self.active);
        }
    }

    // --- navigation ---------------------------------------------------------

    fn switch_tab(&mut self, delta: i32) {
        let tabs = Tab::ALL;
        let len = tabs.len() as i32;
        let current = tabs.iter().position(|tab| *tab == self.active).unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len);
        self.active = tabs[next as usize];
        self.selected = 0;
        self.table_state.select(None);
        self.search_debounce.cancel();
        self.page_debounce.cancel();
        self.request_fetch(self.active);
    }

    fn clamp_selection(&mut self) {
        let len = self.active_store().listing.len();
        if len == 0 {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            if self.selected >= len {
                self.selected = len - 1;
            }
            self.table_state.select(Some(self.selected));
        }
    }

    fn select_next(&mut self) {
        let len = self.active_store().listing.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.table_state.select(Some(self.selected));
    }

    fn select_prev(&mut self) {
        if self.active_store().listing.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
        self.table_state.select(Some(self.selected));
    }

    fn select_first(&mut self) {
        if !self.active_store().listing.is_empty() {
            self.selected = 0;
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.active_store().listing.len();
        if len > 0 {
            self.selected = len - 1;
            self.table_state.select(Some(self.selected));
        }
    }

    // --- pagination / sorting / search --------------------------------------

    /// Page flips apply to the query immediately but the fetch is coalesced
    /// through a short debounce so rapid clicks produce one request.
    pub(crate) fn change_page(&mut self, delta: i32, now: Instant) {
        let store = self.store_mut(self.active);
        let info = store.page_info.unwrap_or_default();
        let page = store.query.page as i64 + delta as i64;
        let max_page = info.total_pages.max(1);
        let clamped = page.clamp(1, max_page) as u32;
        if clamped == store.query.page {
            return;
        }
        store.query.page = clamped;
        store.load = LoadState::Loading;
        self.page_debounce.poke(now);
    }

    pub(crate) fn cycle_page_size(&mut self, delta: i32, now: Instant) {
        let store = self.store_mut(self.active);
        let current = store.query.page_size;
        let index = PAGE_SIZES
            .iter()
            .position(|size| *size == current)
            .unwrap_or(0) as i32;
        let next = (index + delta).rem_euclid(PAGE_SIZES.len() as i32) as usize;
        store.query.set_page_size(PAGE_SIZES[next]);
        store.load = LoadState::Loading;
        self.page_debounce.poke(now);
    }

    pub(crate) fn sort_by_column(&mut self, index: usize) {
        let columns = self.active.columns();
        let Some((_, Some(column))) = columns.get(index) else {
            return;
        };
        let column = *column;
        self.store_mut(self.active).query.toggle_sort(column);
        self.request_fetch(self.active);
    }

    pub(crate) fn enter_search(&mut self) {
        let existing = self.active_store().query.search.clone();
        self.search_input.set(existing);
        self.mode = Mode::Search;
        self.set_status_info(STATUS_SEARCH);
    }

    /// Every keystroke lands in local state at once; the fetch itself waits
    /// for the debounce window.
    pub(crate) fn search_changed(&mut self, now: Instant) {
        let text = self.search_input.as_str().to_string();
        if self.store_mut(self.active).query.set_search(text) {
            self.search_debounce.poke(now);
        }
    }

    pub(crate) fn apply_search_now(&mut self) {
        self.search_debounce.cancel();
        self.mode = Mode::Normal;
        self.status = None;
        self.request_fetch(self.active);
    }

    pub(crate) fn leave_search(&mut self) {
        // A pending debounce keeps ticking; leaving the prompt does not lose
        // the typed filter.
        self.mode = Mode::Normal;
        self.status = None;
    }

    // --- forms / mutations --------------------------------------------------

    fn open_create_form(&mut self) {
        let form = match self.active {
            Tab::Tasks => ModalForm::create_task(),
            Tab::Activities => ModalForm::create_activity(),
            _ => {
                self.set_status_info(STATUS_READ_ONLY);
                return;
            }
        };
        self.form = Some(form);
        self.mode = Mode::Form;
        self.set_status_info(STATUS_FORM);
    }

    fn open_edit_form(&mut self) {
        if self.active_store().listing.is_empty() {
            self.set_status_info("Nothing to edit");
            return;
        }
        let form = match &self.active_store().listing {
            Listing::Tasks(items) => items.get(self.selected).map(ModalForm::edit_task),
            Listing::Activities(items) => items.get(self.selected).map(ModalForm::edit_activity),
            _ => {
                self.set_status_info(STATUS_READ_ONLY);
                return;
            }
        };
        if let Some(form) = form {
            self.form = Some(form);
            self.mode = Mode::Form;
            self.set_status_info(STATUS_FORM);
        }
    }

    pub(crate) fn cancel_form(&mut self) {
        self.form = None;
        self.mode = Mode::Normal;
        self.status = None;
    }

    /// Validate and, only when clean, hand the draft to the mutation layer.
    /// A draft with field errors never reaches the network.
    pub(crate) fn submit_form(&mut self) {
        let Some(form) = &mut self.form else {
            return;
        };
        if form.submitting {
            return;
        }
        if !form.validate() {
            return;
        }
        form.submitting = true;

        let request = if form.is_task_form() {
            let input = form.task_draft().into_input();
            match &form.target {
                FormTarget::EditTask(id) => MutationRequest::UpdateTask {
                    id: id.clone(),
                    input,
                },
                _ => MutationRequest::CreateTask(input),
            }
        } else {
            let input = form.activity_draft().into_input();
            match &form.target {
                FormTarget::EditActivity(id) => MutationRequest::UpdateActivity {
                    id: id.clone(),
                    input,
                },
                _ => MutationRequest::CreateActivity(input),
            }
        };

        self.pending_mutations += 1;
        spawn_mutation(
            &self.runtime,
            self.outcomes_tx.clone(),
            self.service.clone(),
            request,
        );
    }

    fn prompt_delete(&mut self) {
        if self.active_store().listing.is_empty() {
            self.set_status_info("Nothing to delete");
            return;
        }
        let target = match &self.active_store().listing {
            Listing::Tasks(items) => items
                .get(self.selected)
                .map(|task| (task.id.clone(), task.title.clone())),
            Listing::Activities(items) => items
                .get(self.selected)
                .map(|activity| (activity.id.clone(), activity.action.clone())),
            _ => {
                self.set_status_info(STATUS_READ_ONLY);
                return;
            }
        };
        if let Some(target) = target {
            self.confirm_target = Some(target);
            self.confirm_choice = ConfirmChoice::No;
            self.mode = Mode::ConfirmDelete;
            self.set_status_info(STATUS_CONFIRM_DELETE);
        }
    }

    pub(crate) fn confirm_delete(&mut self) {
        if self.confirm_choice != ConfirmChoice::Yes {
            self.cancel_confirm();
            return;
        }
        let Some((id, label)) = self.confirm_target.clone() else {
            self.cancel_confirm();
            return;
        };

        let request = match self.active {
            Tab::Tasks => MutationRequest::DeleteTask { id, title: label },
            Tab::Activities => MutationRequest::DeleteActivity { id, action: label },
            _ => {
                self.cancel_confirm();
                return;
            }
        };

        self.pending_mutations += 1;
        spawn_mutation(
            &self.runtime,
            self.outcomes_tx.clone(),
            self.service.clone(),
            request,
        );
    }

    pub(crate) fn cancel_confirm(&mut self) {
        self.confirm_target = None;
        self.mode = Mode::Normal;
        self.status = None;
    }

    // --- overlays -----------------------------------------------------------

    fn show_details(&mut self) {
        if self.active_store().listing.is_empty() {
            self.set_status_info("Nothing to inspect");
            return;
        }
        let entries = self.detail_entries();
        if let Some(entries) = entries {
            self.inspect_entries = Some(entries);
            self.mode = Mode::Inspect;
            self.set_status_info(STATUS_VIEW_DETAILS);
        }
    }

    fn detail_entries(&self) -> Option<Vec<(String, String)>> {
        match &self.active_store().listing {
            Listing::Activities(items) => items.get(self.selected).map(|activity| {
                let mut entries = vec![
                    ("Action".into(), activity.action.clone()),
                    ("Kind".into(), activity.kind.label().to_string()),
                    ("User".into(), activity.user.name.clone()),
                    ("Id".into(), activity.id.clone()),
                ];
                if let Some(target) = &activity.target_user {
                    entries.push(("Target user".into(), target.name.clone()));
                }
                if let Some(project) = &activity.project {
                    entries.push(("Project".into(), project.name.clone()));
                }
                if let Some(task) = &activity.task {
                    entries.push(("Task".into(), task.title.clone()));
                }
                entries.push(("Created".into(), format_datetime(&activity.created_at)));
                entries.push(("Updated".into(), format_datetime(&activity.updated_at)));
                entries
            }),
            Listing::Tasks(items) => items.get(self.selected).map(|task| {
                let mut entries = vec![
                    ("Title".into(), task.title.clone()),
                    ("Status".into(), task.status.label().to_string()),
                    ("Priority".into(), task.priority.label().to_string()),
                    ("Project".into(), task.project.name.clone()),
                    ("Id".into(), task.id.clone()),
                ];
                if let Some(description) = &task.description {
                    if !description.trim().is_empty() {
                        entries.push(("Description".into(), description.clone()));
                    }
                }
                let due = format_opt_date(task.due_date.as_ref());
                if !due.is_empty() {
                    entries.push(("Due".into(), due));
                }
                if let Some(assignee) = &task.assignee {
                    entries.push(("Assignee".into(), assignee.name.clone()));
                }
                if !task.tags.is_empty() {
                    let tags: Vec<&str> = task.tags.iter().map(|tag| tag.name.as_str()).collect();
                    entries.push(("Tags".into(), tags.join(", ")));
                }
                entries.push(("Created".into(), format_datetime(&task.created_at)));
                entries.push(("Updated".into(), format_datetime(&task.updated_at)));
                entries
            }),
            Listing::Users(items) => items.get(self.selected).map(|user| {
                vec![
                    ("Name".into(), user.name.clone()),
                    ("Email".into(), user.email.clone()),
                    ("Id".into(), user.id.clone()),
                    ("Created".into(), format_datetime(&user.created_at)),
                ]
            }),
            Listing::Projects(items) => items.get(self.selected).map(|project| {
                let mut entries = vec![
                    ("Name".into(), project.name.clone()),
                    ("Id".into(), project.id.clone()),
                ];
                if let Some(description) = &project.description {
                    if !description.trim().is_empty() {
                        entries.push(("Description".into(), description.clone()));
                    }
                }
                entries.push(("Created".into(), format_datetime(&project.created_at)));
                entries
            }),
            Listing::Tags(items) => items.get(self.selected).map(|tag| {
                let mut entries = vec![
                    ("Name".into(), tag.name.clone()),
                    ("Id".into(), tag.id.clone()),
                ];
                if let Some(color) = &tag.color {
                    entries.push(("Color".into(), color.clone()));
                }
                entries.push(("Created".into(), format_datetime(&tag.created_at)));
                entries
            }),
        }
    }

    fn show_help(&mut self) {
        self.inspect_entries = None;
        self.mode = Mode::Help;
        self.set_status_info(STATUS_HELP);
    }

    pub(crate) fn close_overlay(&mut self) {
        self.inspect_entries = None;
        self.mode = Mode::Normal;
        self.status = None;
    }

    // --- status -------------------------------------------------------------

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Error));
    }
}

use std::time::{Duration, Instant};

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;

use taskdeck_core::model::{
    Page, PageInfo, ProjectRef, Task, TaskPriority, TaskStatus,
};
use taskdeck_core::{ApiConfig, DashboardService, SortColumn, SortOrder};

use super::fetch::{ListPayload, MutationAction, Outcome};
use super::forms::ModalForm;
use super::{App, Listing, LoadState, Mode, StatusKind, Tab};

fn test_app() -> (App, tokio::runtime::Runtime) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let config = ApiConfig::discover(Some("http://127.0.0.1:9/graphql".into()), None).unwrap();
    let service = DashboardService::new(config).unwrap();
    let app = App::new(service, runtime.handle().clone());
    (app, runtime)
}

fn sample_task(id: &str, title: &str) -> Task {
    let now = Utc::now();
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        due_date: None,
        project: ProjectRef {
            id: "p-1".into(),
            name: "Platform".into(),
        },
        assignee: None,
        tags: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

fn task_page(tasks: Vec<Task>, info: PageInfo) -> ListPayload {
    ListPayload::Tasks(Page {
        items: tasks,
        pagination_info: info,
    })
}

fn info_for(total_count: i64, current_page: i64, total_pages: i64) -> PageInfo {
    PageInfo {
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
        total_count,
        current_page,
        total_pages,
    }
}

#[test]
fn stale_list_response_is_discarded() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;

    let first = app.begin_fetch(Tab::Tasks);
    let second = app.begin_fetch(Tab::Tasks);

    // The older response arrives late and must not touch state.
    app.on_outcome(Outcome::ListLoaded {
        tab: Tab::Tasks,
        ticket: first,
        result: Ok(task_page(
            vec![sample_task("t-1", "Old page")],
            info_for(1, 1, 1),
        )),
    });
    assert!(app.store(Tab::Tasks).listing.is_empty());
    assert_eq!(app.store(Tab::Tasks).load, LoadState::Loading);

    app.on_outcome(Outcome::ListLoaded {
        tab: Tab::Tasks,
        ticket: second,
        result: Ok(task_page(
            vec![sample_task("t-2", "Fresh page")],
            info_for(1, 1, 1),
        )),
    });
    assert_eq!(app.store(Tab::Tasks).listing.len(), 1);
    assert_eq!(app.store(Tab::Tasks).load, LoadState::Idle);
    match &app.store(Tab::Tasks).listing {
        Listing::Tasks(items) => assert_eq!(items[0].id, "t-2"),
        other => panic!("unexpected listing {:?}", other),
    }
}

#[test]
fn rapid_page_flips_coalesce_into_one_fetch() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;
    app.store_mut(Tab::Tasks).page_info = Some(info_for(50, 1, 5));

    let start = Instant::now();
    let generation = app.gate.generation();

    app.change_page(1, start);
    app.change_page(1, start + Duration::from_millis(20));
    app.change_page(1, start + Duration::from_millis(40));
    assert_eq!(app.store(Tab::Tasks).query.page, 4);
    assert_eq!(app.gate.generation(), generation);

    // Nothing due inside the coalescing window.
    app.drive_debounce(start + Duration::from_millis(60));
    assert_eq!(app.gate.generation(), generation);

    // One fetch fires once the window elapses, for the final page only.
    app.drive_debounce(start + Duration::from_millis(200));
    assert_eq!(app.gate.generation(), generation + 1);

    app.drive_debounce(start + Duration::from_millis(400));
    assert_eq!(app.gate.generation(), generation + 1);
}

#[test]
fn page_changes_clamp_to_known_bounds() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;
    app.store_mut(Tab::Tasks).page_info = Some(info_for(25, 1, 3));

    let start = Instant::now();
    app.change_page(-1, start);
    assert_eq!(app.store(Tab::Tasks).query.page, 1);

    app.change_page(10, start);
    assert_eq!(app.store(Tab::Tasks).query.page, 3);
}

#[test]
fn debounced_search_issues_single_fetch_with_final_text() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;

    let start = Instant::now();
    let generation = app.gate.generation();

    app.enter_search();
    for (idx, ch) in "api".chars().enumerate() {
        app.search_input.insert_char(ch);
        app.search_changed(start + Duration::from_millis(50 * idx as u64));
    }

    // Still inside the idle window: no fetch yet.
    assert_eq!(app.gate.generation(), generation);
    app.drive_debounce(start + Duration::from_millis(300));
    assert_eq!(app.gate.generation(), generation);

    // The window elapses: exactly one fetch, carrying the final text.
    app.drive_debounce(start + Duration::from_millis(600));
    assert_eq!(app.gate.generation(), generation + 1);
    assert_eq!(app.store(Tab::Tasks).query.search, "api");
    assert_eq!(app.store(Tab::Tasks).query.page, 1);

    app.drive_debounce(start + Duration::from_millis(900));
    assert_eq!(app.gate.generation(), generation + 1);
}

#[test]
fn sort_key_toggles_order_and_resets_on_new_column() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;

    app.sort_by_column(0);
    let sort = app.store(Tab::Tasks).query.sort.unwrap();
    assert_eq!(sort.column, SortColumn::Title);
    assert_eq!(sort.order, SortOrder::Asc);

    app.sort_by_column(0);
    assert_eq!(app.store(Tab::Tasks).query.sort.unwrap().order, SortOrder::Desc);

    app.sort_by_column(0);
    assert_eq!(app.store(Tab::Tasks).query.sort.unwrap().order, SortOrder::Asc);

    app.sort_by_column(1);
    let sort = app.store(Tab::Tasks).query.sort.unwrap();
    assert_eq!(sort.column, SortColumn::Status);
    assert_eq!(sort.order, SortOrder::Asc);
}

#[rstest]
#[case(Tab::Activities, 2, SortColumn::User)]
#[case(Tab::Activities, 3, SortColumn::Target)]
#[case(Tab::Tasks, 4, SortColumn::Project)]
#[case(Tab::Tasks, 5, SortColumn::Assignee)]
fn joined_entity_columns_sort_by_the_created_proxy(
    #[case] tab: Tab,
    #[case] index: usize,
    #[case] column: SortColumn,
) {
    let (mut app, _runtime) = test_app();
    app.active = tab;

    app.sort_by_column(index);

    let sort = app.store(tab).query.sort.unwrap();
    assert_eq!(sort.column, column);
    assert_eq!(sort.column.backend_field(), "createdAt");
}

#[test]
fn unsortable_column_is_ignored() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Projects;

    let generation = app.gate.generation();
    app.sort_by_column(1);

    assert!(app.store(Tab::Projects).query.sort.is_none());
    assert_eq!(app.gate.generation(), generation);
}

#[test]
fn invalid_submit_issues_no_mutation() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;
    app.form = Some(ModalForm::create_task());
    app.mode = Mode::Form;

    app.submit_form();

    assert_eq!(app.pending_mutations, 0);
    assert_eq!(app.mode, Mode::Form);
    let form = app.form.as_ref().unwrap();
    assert!(!form.submitting);
    assert_eq!(form.errors.get("title"), Some("Title is required"));
    assert_eq!(form.errors.get("project"), Some("Project is required"));
}

#[test]
fn successful_delete_closes_dialog_toasts_and_refetches_unchanged() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;

    {
        let store = app.store_mut(Tab::Tasks);
        store.listing = Listing::Tasks(vec![sample_task("t-1", "Ship it")]);
        store.page_info = Some(info_for(25, 3, 3));
        store.query.page = 3;
        store.query.set_search("deploy".into());
        store.query.page = 3;
        store.query.toggle_sort(SortColumn::Due);
    }
    app.mode = Mode::ConfirmDelete;
    app.confirm_target = Some(("t-1".into(), "Ship it".into()));
    app.pending_mutations = 1;

    let generation = app.gate.generation();
    app.on_outcome(Outcome::MutationFinished {
        action: MutationAction::DeleteTask,
        result: Ok("Deleted task 'Ship it'".into()),
    });

    assert_eq!(app.mode, Mode::Normal);
    assert!(app.confirm_target.is_none());
    assert_eq!(app.pending_mutations, 0);

    let status = app.status.as_ref().expect("success toast");
    assert_eq!(status.kind, StatusKind::Info);
    assert!(status.text().contains("Deleted task"));

    // Refetch issued with page/search/sort untouched.
    assert_eq!(app.gate.generation(), generation + 1);
    let query = &app.store(Tab::Tasks).query;
    assert_eq!(query.page, 3);
    assert_eq!(query.search, "deploy");
    assert_eq!(query.sort.unwrap().column, SortColumn::Due);
    assert!(app.store(Tab::Tasks).is_loading());
}

#[test]
fn failed_mutation_keeps_form_open_with_submit_error() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;
    app.form = Some(ModalForm::create_task());
    app.mode = Mode::Form;
    app.pending_mutations = 1;

    app.on_outcome(Outcome::MutationFinished {
        action: MutationAction::CreateTask,
        result: Err("http 500: internal".into()),
    });

    assert_eq!(app.mode, Mode::Form);
    let form = app.form.as_ref().unwrap();
    let error = form.submit_error.as_ref().unwrap();
    assert!(error.starts_with("Failed to create task"));
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
}

#[test]
fn fetch_failure_keeps_stale_rows_visible() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;
    app.store_mut(Tab::Tasks).listing = Listing::Tasks(vec![sample_task("t-1", "Keep me")]);

    let ticket = app.begin_fetch(Tab::Tasks);
    app.on_outcome(Outcome::ListLoaded {
        tab: Tab::Tasks,
        ticket,
        result: Err("network error: connection refused".into()),
    });

    assert_eq!(app.store(Tab::Tasks).listing.len(), 1);
    assert!(matches!(app.store(Tab::Tasks).load, LoadState::Error(_)));
    assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
}

#[test]
fn skeleton_is_a_first_load_affordance_only() {
    let (mut app, _runtime) = test_app();
    app.active = Tab::Tasks;

    app.store_mut(Tab::Tasks).load = LoadState::Loading;
    assert!(app.store(Tab::Tasks).shows_skeleton());

    let store = app.store_mut(Tab::Tasks);
    store.listing = Listing::Tasks(vec![sample_task("t-1", "Visible")]);
    assert!(!app.store(Tab::Tasks).shows_skeleton());
}

#[test]
fn switching_tabs_refetches_and_resets_selection() {
    let (mut app, _runtime) = test_app();
    let generation = app.gate.generation();

    app.switch_tab(1);
    assert_eq!(app.active, Tab::Tasks);
    assert_eq!(app.gate.generation(), generation + 1);
    assert!(app.store(Tab::Tasks).is_loading());

    app.switch_tab(-1);
    assert_eq!(app.active, Tab::Activities);
}

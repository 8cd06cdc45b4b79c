//! Integration tests for the Diesel board and task repositories against
//! embedded PostgreSQL.
//!
//! Each test starts its own cluster, recreates the database and applies the
//! embedded migrations through `run_pending_migrations`.

use kanban_backend::domain::ports::{BoardRepository, TaskRepository, TaskRepositoryError};
use kanban_backend::domain::{Board, BoardDraft, BoardId, TaskDraft, TaskStatus};
use kanban_backend::outbound::persistence::{
    DbPool, DieselBoardRepository, DieselTaskRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{count_tasks, handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "diesel_board_repo_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    boards: DieselBoardRepository,
    tasks: DieselTaskRepository,
}

impl TestContext {
    fn create_board(&self, title: &str) -> Board {
        self.runtime
            .block_on(self.boards.insert(&BoardDraft::new(title)))
            .expect("insert board")
    }

    fn add_task(&self, board_id: BoardId, title: &str, status: TaskStatus) {
        let draft = TaskDraft {
            title: title.to_owned(),
            description: Some(format!("{title} details")),
            color: None,
            status,
        };
        self.runtime
            .block_on(self.tasks.insert(board_id, &draft))
            .expect("insert task");
    }

    fn find(&self, id: BoardId) -> Option<Board> {
        self.runtime
            .block_on(self.boards.find_by_id(id))
            .expect("find board")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = reset_database(&cluster, TEST_DB)?;
    let applied = run_pending_migrations(&database_url).map_err(|err| err.to_string())?;
    if applied == 0 {
        return Err("fresh database reported no pending migrations".to_owned());
    }

    let config = PoolConfig::new(database_url.as_str()).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        boards: DieselBoardRepository::new(pool.clone()),
        tasks: DieselTaskRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn created_board_round_trips_with_assigned_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: created_board_round_trips_with_assigned_ids skipped");
        return;
    };

    let first = context.create_board("Sprint 1");
    let second = context.create_board("Sprint 2");
    assert!(first.id().get() > 0);
    assert!(second.id().get() > first.id().get());
    assert!(first.tasks().is_empty());

    context.add_task(first.id(), "Fix bug", TaskStatus::Todo);

    let fetched = context.find(first.id()).expect("board exists");
    assert_eq!(fetched.title(), "Sprint 1");
    let [task] = fetched.tasks() else {
        panic!("expected one task, got {:?}", fetched.tasks());
    };
    assert!(task.id().get() > 0);
    assert_eq!(task.title(), "Fix bug");
    assert_eq!(task.description(), Some("Fix bug details"));
    assert_eq!(task.color(), None);
    assert_eq!(task.status(), TaskStatus::Todo);
}

#[rstest]
fn every_status_satisfies_the_column_check(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: every_status_satisfies_the_column_check skipped");
        return;
    };
    let board = context.create_board("Statuses");

    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        context.add_task(board.id(), status.as_str(), status);
    }

    let fetched = context.find(board.id()).expect("board exists");
    let statuses: Vec<_> = fetched.tasks().iter().map(|task| task.status()).collect();
    assert_eq!(
        statuses,
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    );
}

#[rstest]
fn delete_cascades_to_tasks(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_cascades_to_tasks skipped");
        return;
    };
    let board = context.create_board("Doomed");
    context.add_task(board.id(), "first", TaskStatus::Todo);
    context.add_task(board.id(), "second", TaskStatus::Done);
    assert_eq!(
        count_tasks(&context.database_url, board.id().get()).expect("count tasks"),
        2
    );

    let removed = context
        .runtime
        .block_on(context.boards.delete(board.id()))
        .expect("delete board");
    assert!(removed);

    assert!(context.find(board.id()).is_none());
    assert_eq!(
        count_tasks(&context.database_url, board.id().get()).expect("count tasks"),
        0
    );
    let removed_again = context
        .runtime
        .block_on(context.boards.delete(board.id()))
        .expect("second delete");
    assert!(!removed_again);
}

#[rstest]
fn duplicate_titles_resolve_to_lowest_id(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_titles_resolve_to_lowest_id skipped");
        return;
    };
    context.create_board("Other");
    let first = context.create_board("Same");
    context.create_board("Same");

    let found = context
        .runtime
        .block_on(context.boards.find_first_by_title("Same"))
        .expect("title lookup")
        .expect("board exists");
    assert_eq!(found.id(), first.id());

    let missing = context
        .runtime
        .block_on(context.boards.find_first_by_title("same"))
        .expect("title lookup");
    assert!(missing.is_none(), "title match is exact");
}

#[rstest]
fn list_groups_tasks_under_their_boards(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_groups_tasks_under_their_boards skipped");
        return;
    };
    let alpha = context.create_board("Alpha");
    let empty = context.create_board("Empty");
    let beta = context.create_board("Beta");
    context.add_task(beta.id(), "b1", TaskStatus::Todo);
    context.add_task(alpha.id(), "a1", TaskStatus::Todo);
    context.add_task(beta.id(), "b2", TaskStatus::InProgress);
    context.add_task(alpha.id(), "a2", TaskStatus::Done);

    let boards = context
        .runtime
        .block_on(context.boards.list())
        .expect("list boards");

    let summary: Vec<(BoardId, Vec<&str>)> = boards
        .iter()
        .map(|board| {
            (
                board.id(),
                board.tasks().iter().map(|task| task.title()).collect(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            (alpha.id(), vec!["a1", "a2"]),
            (empty.id(), vec![]),
            (beta.id(), vec!["b1", "b2"]),
        ]
    );
}

#[rstest]
fn update_title_keeps_tasks(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: update_title_keeps_tasks skipped");
        return;
    };
    let board = context.create_board("Old");
    context.add_task(board.id(), "kept", TaskStatus::Todo);

    let updated = context
        .runtime
        .block_on(context.boards.update_title(board.id(), "New"))
        .expect("update title")
        .expect("board exists");
    assert_eq!(updated.title(), "New");
    assert_eq!(updated.tasks().len(), 1);

    let missing = context
        .runtime
        .block_on(context.boards.update_title(BoardId::new(i64::MAX), "New"))
        .expect("update title");
    assert!(missing.is_none());
}

#[rstest]
fn task_under_missing_board_is_a_query_error(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: task_under_missing_board_is_a_query_error skipped");
        return;
    };
    let draft = TaskDraft {
        title: "Orphan".to_owned(),
        description: None,
        color: None,
        status: TaskStatus::Todo,
    };

    let err = context
        .runtime
        .block_on(context.tasks.insert(BoardId::new(i64::MAX), &draft))
        .expect_err("foreign key rejects the insert");

    assert!(
        matches!(err, TaskRepositoryError::Query { .. }),
        "unexpected error: {err:?}"
    );
}

//! Tests for the board service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockBoardRepository, MockTaskRepository};
use crate::domain::{ErrorCode, TaskId, TaskStatus};

fn board(id: i64, title: &str) -> Board {
    Board::new(BoardId::new(id), title, Vec::new()).expect("valid board")
}

fn fix_bug_draft() -> TaskDraft {
    TaskDraft {
        title: "Fix bug".to_owned(),
        description: Some("Crash when saving".to_owned()),
        color: Some("red".to_owned()),
        status: TaskStatus::Todo,
    }
}

#[fixture]
fn tasks() -> MockTaskRepository {
    MockTaskRepository::new()
}

fn service(
    boards: MockBoardRepository,
    tasks: MockTaskRepository,
) -> BoardService<MockBoardRepository, MockTaskRepository> {
    BoardService::new(Arc::new(boards), Arc::new(tasks))
}

#[rstest]
#[tokio::test]
async fn get_board_returns_stored_board(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_by_id()
        .with(eq(BoardId::new(1)))
        .times(1)
        .return_once(|_| Ok(Some(board(1, "Sprint 1"))));

    let found = service(boards, tasks)
        .get_board(BoardId::new(1))
        .await
        .expect("board exists");

    assert_eq!(found.title(), "Sprint 1");
}

#[rstest]
#[tokio::test]
async fn get_board_reports_missing_id(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().return_once(|_| Ok(None));

    let err = service(boards, tasks)
        .get_board(BoardId::new(42))
        .await
        .expect_err("board is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No kanban found with id: 42");
}

#[rstest]
#[tokio::test]
async fn find_by_title_reports_missing_title(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_first_by_title()
        .withf(|title| title == "Backlog")
        .return_once(|_| Ok(None));

    let err = service(boards, tasks)
        .find_board_by_title("Backlog")
        .await
        .expect_err("no board titled Backlog");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No kanban found with a title: Backlog");
}

#[rstest]
#[tokio::test]
async fn update_missing_board_performs_no_mutation(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().return_once(|_| Ok(None));
    boards.expect_update_title().times(0);

    let err = service(boards, tasks)
        .update_board(BoardId::new(7), "Renamed".to_owned())
        .await
        .expect_err("board is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No kanban found with id: 7");
}

#[rstest]
#[tokio::test]
async fn update_existing_board_changes_title(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_by_id()
        .return_once(|_| Ok(Some(board(3, "Old"))));
    boards
        .expect_update_title()
        .withf(|id, title| *id == BoardId::new(3) && title == "New")
        .times(1)
        .return_once(|_, _| Ok(Some(board(3, "New"))));

    let updated = service(boards, tasks)
        .update_board(BoardId::new(3), "New".to_owned())
        .await
        .expect("update succeeds");

    assert_eq!(updated.title(), "New");
}

#[rstest]
#[tokio::test]
async fn delete_missing_board_performs_no_mutation(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().return_once(|_| Ok(None));
    boards.expect_delete().times(0);

    let err = service(boards, tasks)
        .delete_board(BoardId::new(5))
        .await
        .expect_err("board is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_tasks_of_missing_board_is_not_found(tasks: MockTaskRepository) {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().return_once(|_| Ok(None));

    let err = service(boards, tasks)
        .list_tasks(BoardId::new(8))
        .await
        .expect_err("board is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No kanban found with id: 8");
}

#[rstest]
#[tokio::test]
async fn create_task_appends_stored_task() {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_by_id()
        .return_once(|_| Ok(Some(board(1, "Sprint 1"))));
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_insert()
        .withf(|board_id, draft| *board_id == BoardId::new(1) && draft.title == "Fix bug")
        .times(1)
        .return_once(|board_id, draft| Ok(Task::new(TaskId::new(10), board_id, draft.clone())));

    let updated = service(boards, tasks)
        .create_task(BoardId::new(1), fix_bug_draft())
        .await
        .expect("task stored");

    let [task] = updated.tasks() else {
        panic!("expected exactly one task, got {:?}", updated.tasks());
    };
    assert_eq!(task.id(), TaskId::new(10));
    assert_eq!(task.title(), "Fix bug");
    assert_eq!(task.color(), Some("red"));
}

#[rstest]
#[tokio::test]
async fn create_task_under_missing_board_is_internal_failure() {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().return_once(|_| Ok(None));
    let mut tasks = MockTaskRepository::new();
    tasks.expect_insert().times(0);

    let err = service(boards, tasks)
        .create_task(BoardId::new(99), fix_bug_draft())
        .await
        .expect_err("board is missing");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(BoardRepositoryError::connection("refused"))]
#[case(BoardRepositoryError::query("syntax error"))]
#[tokio::test]
async fn repository_failures_become_internal_errors(
    #[case] failure: BoardRepositoryError,
    tasks: MockTaskRepository,
) {
    let mut boards = MockBoardRepository::new();
    boards.expect_list().return_once(move || Err(failure));

    let err = service(boards, tasks)
        .list_boards()
        .await
        .expect_err("repository failed");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn task_repository_failure_becomes_internal_error() {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_by_id()
        .return_once(|_| Ok(Some(board(1, "Sprint 1"))));
    let mut tasks = MockTaskRepository::new();
    tasks
        .expect_insert()
        .return_once(|_, _| Err(TaskRepositoryError::query("foreign key violation")));

    let err = service(boards, tasks)
        .create_task(BoardId::new(1), fix_bug_draft())
        .await
        .expect_err("insert failed");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("foreign key violation"));
}

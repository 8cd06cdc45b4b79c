//! Kanban board HTTP handlers.
//!
//! ```text
//! GET    /kanbans/
//! GET    /kanbans?title={title}
//! GET    /kanbans/{id}
//! POST   /kanbans/
//! PUT    /kanbans/{id}
//! DELETE /kanbans/{id}
//! GET    /kanbans/{kanbanId}/tasks/
//! POST   /kanbans/{kanbanId}/tasks/
//! ```

use std::str::FromStr;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Board, BoardDraft, BoardId, Error, Task, TaskDraft, TaskStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or renaming a board.
///
/// Any `id` or `tasks` sent by the client is ignored. A missing or null
/// `title` is rejected with 400.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequestBody {
    #[schema(example = "Sprint 1")]
    pub title: String,
}

/// Request payload for creating a task.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequestBody {
    #[schema(example = "Fix bug")]
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    /// `TODO`, `INPROGRESS` or `DONE`. Defaults to `TODO`.
    #[schema(example = "TODO")]
    pub status: Option<String>,
}

/// Task as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    #[schema(example = "TODO")]
    pub status: String,
}

/// Board as returned to clients, with its tasks in creation order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardBody {
    pub id: i64,
    pub title: String,
    pub tasks: Vec<TaskBody>,
}

/// Query string for title lookups.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Exact board title.
    pub title: String,
}

impl From<&Task> for TaskBody {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().get(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            color: task.color().map(str::to_owned),
            status: task.status().to_string(),
        }
    }
}

impl From<Board> for BoardBody {
    fn from(board: Board) -> Self {
        Self {
            id: board.id().get(),
            title: board.title().to_owned(),
            tasks: board.tasks().iter().map(TaskBody::from).collect(),
        }
    }
}

fn parse_task_request(payload: TaskRequestBody) -> Result<TaskDraft, Error> {
    let status = match payload.status {
        None => TaskStatus::default(),
        Some(value) => TaskStatus::from_str(&value).map_err(|_| {
            Error::invalid_request("status must be TODO, INPROGRESS or DONE").with_details(json!({
                "field": "status",
                "value": value,
                "code": "invalid_task_status",
            }))
        })?,
    };
    Ok(TaskDraft {
        title: payload.title,
        description: payload.description,
        color: payload.color,
        status,
    })
}

/// Mount the `/kanbans` scope with JSON error envelopes for extractor
/// failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/kanbans")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(list_kanbans)
            .service(find_kanban_by_title)
            .service(create_kanban)
            .service(list_tasks)
            .service(create_task)
            .service(get_kanban)
            .service(update_kanban)
            .service(delete_kanban),
    );
}

/// List every board with its tasks.
#[utoipa::path(
    get,
    path = "/kanbans/",
    responses(
        (status = 200, description = "All boards", body = [BoardBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "listKanbans"
)]
#[get("/")]
pub async fn list_kanbans(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BoardBody>>> {
    let boards = state.boards_query.list_boards().await?;
    Ok(web::Json(boards.into_iter().map(BoardBody::from).collect()))
}

/// Find the first board with an exact title.
#[utoipa::path(
    get,
    path = "/kanbans",
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching board", body = BoardBody),
        (status = 400, description = "Missing title", body = ErrorSchema),
        (status = 404, description = "No board has this title", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "findKanbanByTitle"
)]
#[get("")]
pub async fn find_kanban_by_title(
    state: web::Data<HttpState>,
    query: web::Query<TitleQuery>,
) -> ApiResult<web::Json<BoardBody>> {
    let board = state
        .boards_query
        .find_board_by_title(&query.into_inner().title)
        .await?;
    Ok(web::Json(BoardBody::from(board)))
}

/// Fetch one board.
#[utoipa::path(
    get,
    path = "/kanbans/{id}",
    params(("id" = i64, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Board", body = BoardBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Board not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "getKanban"
)]
#[get("/{id}")]
pub async fn get_kanban(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BoardBody>> {
    let board = state
        .boards_query
        .get_board(BoardId::new(path.into_inner()))
        .await?;
    Ok(web::Json(BoardBody::from(board)))
}

/// Create an empty board.
#[utoipa::path(
    post,
    path = "/kanbans/",
    request_body = BoardRequestBody,
    responses(
        (status = 201, description = "Board created", body = BoardBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "createKanban"
)]
#[post("/")]
pub async fn create_kanban(
    state: web::Data<HttpState>,
    payload: web::Json<BoardRequestBody>,
) -> ApiResult<HttpResponse> {
    let board = state
        .boards
        .create_board(BoardDraft::new(payload.into_inner().title))
        .await?;
    Ok(HttpResponse::Created().json(BoardBody::from(board)))
}

/// Rename a board. Tasks are untouched.
#[utoipa::path(
    put,
    path = "/kanbans/{id}",
    params(("id" = i64, Path, description = "Board identifier")),
    request_body = BoardRequestBody,
    responses(
        (status = 200, description = "Board updated", body = BoardBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Board not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "updateKanban"
)]
#[put("/{id}")]
pub async fn update_kanban(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<BoardRequestBody>,
) -> ApiResult<web::Json<BoardBody>> {
    let board = state
        .boards
        .update_board(BoardId::new(path.into_inner()), payload.into_inner().title)
        .await?;
    Ok(web::Json(BoardBody::from(board)))
}

/// Delete a board and its tasks.
#[utoipa::path(
    delete,
    path = "/kanbans/{id}",
    params(("id" = i64, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Confirmation message", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Board not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["kanbans"],
    operation_id = "deleteKanban"
)]
#[delete("/{id}")]
pub async fn delete_kanban(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = BoardId::new(path.into_inner());
    state.boards.delete_board(id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Kanban with id: {id} was deleted")))
}

/// List the tasks of a board.
#[utoipa::path(
    get,
    path = "/kanbans/{kanbanId}/tasks/",
    params(("kanbanId" = i64, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Tasks of the board", body = [TaskBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Board not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/{kanban_id}/tasks/")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<TaskBody>>> {
    let tasks = state
        .boards_query
        .list_tasks(BoardId::new(path.into_inner()))
        .await?;
    Ok(web::Json(tasks.iter().map(TaskBody::from).collect()))
}

/// Create a task and return the board it was added to.
///
/// A missing board is reported as an internal failure.
#[utoipa::path(
    post,
    path = "/kanbans/{kanbanId}/tasks/",
    params(("kanbanId" = i64, Path, description = "Board identifier")),
    request_body = TaskRequestBody,
    responses(
        (status = 201, description = "Task created; the owning board is returned", body = BoardBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/{kanban_id}/tasks/")]
pub async fn create_task(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<TaskRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_task_request(payload.into_inner())?;
    let board = state
        .boards
        .create_task(BoardId::new(path.into_inner()), draft)
        .await?;
    Ok(HttpResponse::Created().json(BoardBody::from(board)))
}

#[cfg(test)]
#[path = "kanbans_tests.rs"]
mod tests;

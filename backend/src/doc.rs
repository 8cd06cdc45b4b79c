//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/kanbans` endpoint together with the request,
//! response and error schemas. The document is served by Swagger UI in debug
//! builds and printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::kanbans::{BoardBody, BoardRequestBody, TaskBody, TaskRequestBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kanban backend API",
        description = "CRUD operations on kanban boards and the tasks they own."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::kanbans::list_kanbans,
        crate::inbound::http::kanbans::find_kanban_by_title,
        crate::inbound::http::kanbans::get_kanban,
        crate::inbound::http::kanbans::create_kanban,
        crate::inbound::http::kanbans::update_kanban,
        crate::inbound::http::kanbans::delete_kanban,
        crate::inbound::http::kanbans::list_tasks,
        crate::inbound::http::kanbans::create_task,
    ),
    components(schemas(
        BoardBody,
        BoardRequestBody,
        TaskBody,
        TaskRequestBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "kanbans", description = "Board operations"),
        (name = "tasks", description = "Task operations nested under a board")
    )
)]
pub struct ApiDoc;

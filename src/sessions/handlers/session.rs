use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::handlers::responses::{CreateSessionResponse, SessionViewResponse};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CreateSessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn view(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionViewResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .view()
        .await;
    Json(response)
}

use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::ViewFlowHttpHandler;
use crate::sessions::handlers::requests::{GenerateLocationsRequest, SelectLocationRequest};
use crate::sessions::handlers::responses::{
    CloseOverlayResponse, GenerateLocationsResponse, SelectLocationResponse,
    ShowAllLocationsResponse,
};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn generate(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(request): Json<GenerateLocationsRequest>,
) -> Json<GenerateLocationsResponse> {
    let request_context = RequestContext { session_id };
    let response = ViewFlowHttpHandler::new(app_context, &request_context)
        .generate(request.quantity)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn select(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(request): Json<SelectLocationRequest>,
) -> Json<SelectLocationResponse> {
    let request_context = RequestContext { session_id };
    let response = ViewFlowHttpHandler::new(app_context, &request_context)
        .select(request.index)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn close_detail(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CloseOverlayResponse> {
    let request_context = RequestContext { session_id };
    let response = ViewFlowHttpHandler::new(app_context, &request_context)
        .close_detail()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn show_all(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<ShowAllLocationsResponse> {
    let request_context = RequestContext { session_id };
    let response = ViewFlowHttpHandler::new(app_context, &request_context)
        .show_all()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn close_all(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CloseOverlayResponse> {
    let request_context = RequestContext { session_id };
    let response = ViewFlowHttpHandler::new(app_context, &request_context)
        .close_all()
        .await;
    Json(response)
}

use crate::map;
use crate::map::consts::{MAX_ZOOM, MIN_ZOOM, WORLD_BOUNDS};
use crate::map::responses::{MapConfigResponse, MapConfigResponseError};
use axum::response::Json;

pub struct MapConfigHttpHandler<'a> {
    api_key: Option<&'a str>,
}

impl<'a> MapConfigHttpHandler<'a> {
    pub fn new(api_key: Option<&'a str>) -> Self {
        Self { api_key }
    }

    pub fn config(&self) -> MapConfigResponse {
        match self.api_key {
            Some(api_key) => MapConfigResponse {
                error: false,
                error_code: None,
                api_key: Some(api_key.to_string()),
                restriction: Some(WORLD_BOUNDS),
                min_zoom: Some(MIN_ZOOM),
                max_zoom: Some(MAX_ZOOM),
            },
            None => MapConfigResponse {
                error: true,
                error_code: Some(MapConfigResponseError::MapKeyMissing),
                api_key: None,
                restriction: None,
                min_zoom: None,
                max_zoom: None,
            },
        }
    }
}

#[axum::debug_handler]
pub async fn map_config() -> Json<MapConfigResponse> {
    Json(MapConfigHttpHandler::new(map::api_key()).config())
}

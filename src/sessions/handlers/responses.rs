use crate::map::links;
use crate::map::models::{LatLng, MapMarker, MapViewport};
use crate::sessions::models::{ViewState, ViewStateError};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ViewActionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LatLng>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLocationsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ViewActionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LatLng>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ViewActionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<LocationDetail>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowAllLocationsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ViewActionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<LocationsOverview>,
}

/// Shared by `close-detail` and `close-all`: both restore the list view.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseOverlayResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ViewActionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LatLng>>,
}

/// All possible reasons a view action may be refused.
#[derive(Copy, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewActionResponseError {
    SessionNotFound,
    NothingGenerated,
    OverlayAlreadyOpen,
    DetailNotOpen,
    OverviewNotOpen,
    NoSuchLocation,
}

impl From<ViewStateError> for ViewActionResponseError {
    fn from(reason: ViewStateError) -> Self {
        match reason {
            ViewStateError::NothingGenerated => ViewActionResponseError::NothingGenerated,
            ViewStateError::OverlayAlreadyOpen => ViewActionResponseError::OverlayAlreadyOpen,
            ViewStateError::DetailNotOpen => ViewActionResponseError::DetailNotOpen,
            ViewStateError::OverviewNotOpen => ViewActionResponseError::OverviewNotOpen,
            ViewStateError::NoSuchLocation => ViewActionResponseError::NoSuchLocation,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    pub location: LatLng,
    /// Exactly what the UI prints under the header, 6 digits after the point.
    pub display: String,
    pub viewport: MapViewport,
    pub marker: MapMarker,
    pub external_url: String,
}

impl LocationDetail {
    pub fn new(location: LatLng) -> Self {
        LocationDetail {
            location,
            display: location.to_string(),
            viewport: MapViewport::detail(location),
            marker: MapMarker::unlabeled(location),
            external_url: links::external_viewer_url(location),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsOverview {
    pub count: usize,
    pub viewport: MapViewport,
    pub markers: Vec<MapMarker>,
}

impl LocationsOverview {
    /// The overview is only reachable with a non-empty list (`show_all`
    /// rejects `Idle`), so there is always a first location to center on.
    pub fn new(locations: &[LatLng]) -> Self {
        LocationsOverview {
            count: locations.len(),
            viewport: MapViewport::overview(locations[0]),
            markers: locations
                .iter()
                .enumerate()
                .map(|(index, &position)| MapMarker::labeled(position, (index + 1).to_string()))
                .collect(),
        }
    }
}

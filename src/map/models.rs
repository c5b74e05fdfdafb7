use crate::map::consts::{
    COORDINATE_DECIMAL_DIGITS, DETAIL_ZOOM, MAX_ZOOM, MIN_ZOOM, OVERVIEW_ZOOM, WORLD_BOUNDS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Both components rounded to the display precision, so every surface
    /// (list, markers, outbound links) carries the same value.
    pub fn rounded(lat: f64, lng: f64) -> Self {
        LatLng {
            lat: round_component(lat),
            lng: round_component(lng),
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{:.digits$}, {:.digits$}",
            self.lat,
            self.lng,
            digits = COORDINATE_DECIMAL_DIGITS as usize,
        )
    }
}

fn round_component(value: f64) -> f64 {
    let factor = 10_f64.powi(COORDINATE_DECIMAL_DIGITS);
    (value * factor).round() / factor
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

/// Everything the external map surface needs to render itself: a center, a
/// zoom level and the panning restriction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub restriction: MapBounds,
    pub strict_bounds: bool,
}

impl MapViewport {
    /// Close-up view on a single selected location.
    pub fn detail(center: LatLng) -> Self {
        MapViewport::with_zoom(center, DETAIL_ZOOM)
    }

    /// Whole-world view for the "all locations" overlay.
    pub fn overview(center: LatLng) -> Self {
        MapViewport::with_zoom(center, OVERVIEW_ZOOM)
    }

    fn with_zoom(center: LatLng, zoom: u8) -> Self {
        MapViewport {
            center,
            zoom,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            restriction: WORLD_BOUNDS,
            strict_bounds: true,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MapMarker {
    pub fn unlabeled(position: LatLng) -> Self {
        MapMarker {
            position,
            label: None,
        }
    }

    pub fn labeled(position: LatLng, label: String) -> Self {
        MapMarker {
            position,
            label: Some(label),
        }
    }
}

use crate::map::models::LatLng;

/// Link for opening a location in the external Google Maps viewer.
pub fn external_viewer_url(location: LatLng) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        location.lat, location.lng,
    )
}

use crate::map::consts::{MAX_ABS_LAT, MAX_ABS_LNG};
use crate::map::models::LatLng;
use rand::Rng;

/// Draws `quantity` points uniformly over the map's usable surface. There is
/// no uniqueness guarantee; duplicates are permitted. A non-positive quantity
/// produces an empty batch.
pub fn random_locations(quantity: i64) -> Vec<LatLng> {
    if quantity <= 0 {
        return Vec::new();
    }
    let mut rng = rand::thread_rng();
    (0..quantity)
        .map(|_| {
            let lat = rng.gen_range(-MAX_ABS_LAT..MAX_ABS_LAT);
            let lng = rng.gen_range(-MAX_ABS_LNG..MAX_ABS_LNG);
            LatLng::rounded(lat, lng)
        })
        .collect()
}

use crate::map::models::MapBounds;

/// Latitude is clipped at ±85° so generated points stay inside the Mercator
/// projection's usable range. The map renderer restricts panning the same way.
pub const MAX_ABS_LAT: f64 = 85.0;
pub const MAX_ABS_LNG: f64 = 180.0;
pub const COORDINATE_DECIMAL_DIGITS: i32 = 6;

pub const DETAIL_ZOOM: u8 = 8;
pub const OVERVIEW_ZOOM: u8 = 2;
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 18;

pub const WORLD_BOUNDS: MapBounds = MapBounds {
    north: MAX_ABS_LAT,
    south: -MAX_ABS_LAT,
    west: -MAX_ABS_LNG,
    east: MAX_ABS_LNG,
};

use crate::cli::Args;
use std::sync::OnceLock;

pub mod consts;
pub mod generator;
pub mod handlers;
pub mod links;
pub mod models;
pub mod responses;

static MAPS_API_KEY: OnceLock<Option<String>> = OnceLock::new();

/// Captures the map provider key for the lifetime of the process. Absence is
/// not fatal: `/map/config` degrades to an error payload and the frontend
/// renders a static error instead of a map.
pub fn init(args: &Args) {
    let api_key = MAPS_API_KEY.get_or_init(|| args.maps_api_key.clone());
    if api_key.is_none() {
        tracing::warn!(
            "The `--maps-api-key` argument wasn't provided. \
            Clients will be served an error instead of a map."
        );
    }
}

pub fn api_key() -> Option<&'static str> {
    MAPS_API_KEY.get().and_then(|api_key| api_key.as_deref())
}

use crate::map::models::LatLng;
use crate::sessions::models::{ViewState, ViewStateError};

pub trait ISessionStorage: SessionRepo + ViewFlowRepo {}

/// Creation and read access to per-tab sessions.
pub trait SessionRepo {
    async fn exists(&self, session_id: &str) -> bool;

    async fn create(&self) -> String;

    async fn locations(&self, session_id: &str) -> Vec<LatLng>;

    async fn view(&self, session_id: &str) -> ViewState;
}

/// The view transitions a client can trigger. Callers must check
/// `SessionRepo::exists` first; these methods assume the session is present.
pub trait ViewFlowRepo {
    async fn regenerate(&self, session_id: &str, quantity: i64) -> Vec<LatLng>;

    async fn select(&self, session_id: &str, index: usize) -> Result<LatLng, ViewStateError>;

    async fn close_detail(&self, session_id: &str) -> Result<(), ViewStateError>;

    async fn show_all(&self, session_id: &str) -> Result<Vec<LatLng>, ViewStateError>;

    async fn close_all(&self, session_id: &str) -> Result<(), ViewStateError>;
}

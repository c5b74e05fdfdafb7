use crate::map::models::LatLng;
use crate::sessions::models::{Session, ViewState, ViewStateError};
use crate::storage::consts::SESSION_ID_LENGTH;
use crate::storage::interface::{ISessionStorage, SessionRepo, ViewFlowRepo};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, Session>>>,
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn create(&self) -> String {
        let session_id = generate_session_id();
        self.storage
            .write()
            .await
            .insert(session_id.clone(), Session::new());
        session_id
    }

    async fn locations(&self, session_id: &str) -> Vec<LatLng> {
        self.storage
            .read()
            .await
            .get(session_id)
            .unwrap()
            .locations
            .clone()
    }

    async fn view(&self, session_id: &str) -> ViewState {
        self.storage.read().await.get(session_id).unwrap().view
    }
}

impl ViewFlowRepo for HashMapSessionsStorage {
    async fn regenerate(&self, session_id: &str, quantity: i64) -> Vec<LatLng> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard.get_mut(session_id).unwrap();
        session.regenerate(quantity);
        session.locations.clone()
    }

    async fn select(&self, session_id: &str, index: usize) -> Result<LatLng, ViewStateError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .select(index)
    }

    async fn close_detail(&self, session_id: &str) -> Result<(), ViewStateError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .close_detail()
    }

    async fn show_all(&self, session_id: &str) -> Result<Vec<LatLng>, ViewStateError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard.get_mut(session_id).unwrap();
        session.show_all()?;
        Ok(session.locations.clone())
    }

    async fn close_all(&self, session_id: &str) -> Result<(), ViewStateError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .close_all()
    }
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;

#[derive(Clone, Default)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init() -> AppContext<HashMapSessionsStorage> {
    AppContext::default()
}

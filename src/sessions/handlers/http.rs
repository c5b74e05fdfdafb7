use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::responses::{
    CloseOverlayResponse, CreateSessionResponse, GenerateLocationsResponse, LocationDetail,
    LocationsOverview, SelectLocationResponse, SessionViewResponse, ShowAllLocationsResponse,
    ViewActionResponseError,
};
use crate::storage::interface::ISessionStorage;

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        CreateSessionResponse {
            session_id: self.app_context.sessions.create().await,
        }
    }
}

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn view(&self) -> SessionViewResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return SessionViewResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                view: None,
                locations: None,
            };
        }
        SessionViewResponse {
            error: false,
            error_code: None,
            view: Some(
                self.app_context
                    .sessions
                    .view(&self.request_context.session_id)
                    .await,
            ),
            locations: Some(
                self.app_context
                    .sessions
                    .locations(&self.request_context.session_id)
                    .await,
            ),
        }
    }
}

pub struct ViewFlowHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> ViewFlowHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn generate(&self, quantity: i64) -> GenerateLocationsResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return GenerateLocationsResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                view: None,
                locations: None,
            };
        }
        let locations = self
            .app_context
            .sessions
            .regenerate(&self.request_context.session_id, quantity)
            .await;
        tracing::info!(
            task = "locations_generated",
            session_id = %self.request_context.session_id,
            quantity,
            produced = locations.len(),
        );
        GenerateLocationsResponse {
            error: false,
            error_code: None,
            view: Some(
                self.app_context
                    .sessions
                    .view(&self.request_context.session_id)
                    .await,
            ),
            locations: Some(locations),
        }
    }

    pub async fn select(&self, index: usize) -> SelectLocationResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return SelectLocationResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                detail: None,
            };
        }
        match self
            .app_context
            .sessions
            .select(&self.request_context.session_id, index)
            .await
        {
            Ok(location) => SelectLocationResponse {
                error: false,
                error_code: None,
                detail: Some(LocationDetail::new(location)),
            },
            Err(reason) => SelectLocationResponse {
                error: true,
                error_code: Some(reason.into()),
                detail: None,
            },
        }
    }

    pub async fn close_detail(&self) -> CloseOverlayResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return CloseOverlayResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                view: None,
                locations: None,
            };
        }
        match self
            .app_context
            .sessions
            .close_detail(&self.request_context.session_id)
            .await
        {
            Ok(()) => self.restored_list_view().await,
            Err(reason) => CloseOverlayResponse {
                error: true,
                error_code: Some(reason.into()),
                view: None,
                locations: None,
            },
        }
    }

    pub async fn show_all(&self) -> ShowAllLocationsResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return ShowAllLocationsResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                overview: None,
            };
        }
        match self
            .app_context
            .sessions
            .show_all(&self.request_context.session_id)
            .await
        {
            Ok(locations) => ShowAllLocationsResponse {
                error: false,
                error_code: None,
                overview: Some(LocationsOverview::new(&locations)),
            },
            Err(reason) => ShowAllLocationsResponse {
                error: true,
                error_code: Some(reason.into()),
                overview: None,
            },
        }
    }

    pub async fn close_all(&self) -> CloseOverlayResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return CloseOverlayResponse {
                error: true,
                error_code: Some(ViewActionResponseError::SessionNotFound),
                view: None,
                locations: None,
            };
        }
        match self
            .app_context
            .sessions
            .close_all(&self.request_context.session_id)
            .await
        {
            Ok(()) => self.restored_list_view().await,
            Err(reason) => CloseOverlayResponse {
                error: true,
                error_code: Some(reason.into()),
                view: None,
                locations: None,
            },
        }
    }

    async fn restored_list_view(&self) -> CloseOverlayResponse {
        CloseOverlayResponse {
            error: false,
            error_code: None,
            view: Some(
                self.app_context
                    .sessions
                    .view(&self.request_context.session_id)
                    .await,
            ),
            locations: Some(
                self.app_context
                    .sessions
                    .locations(&self.request_context.session_id)
                    .await,
            ),
        }
    }
}

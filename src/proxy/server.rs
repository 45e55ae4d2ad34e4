//! Authorization proxy HTTP server
//!
//! Forwards engine API calls of an endpoint and rewrites the responses of
//! reads under access control for the requesting user.

use crate::access_control::OperationContext;
use crate::config::ServerConfig;
use crate::error::{EngineError, ProxyError, StoreError};
use crate::model::{EndpointId, UserId};
use crate::proxy::engine::{EngineClient, USER_HEADER, engine_url};
use crate::proxy::routes::ResponseRoutes;
use crate::store::{EndpointStore, ResourceControlStore, TeamMembershipStore, UserStore};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use reqwest::Url;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared state for proxy handlers
#[derive(Clone)]
pub struct ProxyState {
    pub engine: EngineClient,
    pub routes: ResponseRoutes,
    pub users: Arc<dyn UserStore>,
    pub team_memberships: Arc<dyn TeamMembershipStore>,
    pub endpoints: Arc<dyn EndpointStore>,
    pub resource_controls: Arc<dyn ResourceControlStore>,
}

impl ProxyState {
    /// Build the state over a single store backing every collection
    pub fn from_store<S>(engine: EngineClient, store: Arc<S>) -> Result<Self, ProxyError>
    where
        S: UserStore + TeamMembershipStore + EndpointStore + ResourceControlStore + 'static,
    {
        Ok(Self {
            engine,
            routes: ResponseRoutes::new()?,
            users: store.clone(),
            team_memberships: store.clone(),
            endpoints: store.clone(),
            resource_controls: store,
        })
    }
}

/// Error returned to proxy clients as `{"message": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn store(err: StoreError) -> Self {
        error!(error = %err, "Store failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "store failure")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        warn!(error = %err, "Engine request failed");
        Self::new(StatusCode::BAD_GATEWAY, err.to_string())
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        warn!(error = %err, "Engine response rejected");
        Self::new(StatusCode::BAD_GATEWAY, err.to_string())
    }
}

/// Build the proxy router
pub fn build_router(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/endpoints/{endpoint_id}/docker/{*path}", any(proxy_request))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Run the proxy server until it fails
pub async fn run_server(config: &ServerConfig, state: ProxyState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Proxy listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn proxy_request(
    State(state): State<ProxyState>,
    Path((endpoint_id, _)): Path<(u64, String)>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let user_id = requesting_user(&headers)?;
    let user = match state.users.user(user_id).await {
        Ok(user) => user,
        Err(StoreError::NotFound { .. }) => {
            return Err(ApiError::new(StatusCode::UNAUTHORIZED, "unknown user"));
        }
        Err(e) => return Err(ApiError::store(e)),
    };

    let endpoint_id = EndpointId(endpoint_id);
    let endpoint = match state.endpoints.endpoint(endpoint_id).await {
        Ok(endpoint) => endpoint,
        Err(StoreError::NotFound { .. }) => {
            return Err(ApiError::new(StatusCode::NOT_FOUND, "endpoint not found"));
        }
        Err(e) => return Err(ApiError::store(e)),
    };

    let engine_path = engine_path(uri.path())?;
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", engine_path, query),
        None => engine_path,
    };
    let url = engine_url(&endpoint.url, &path_and_query)?;
    let operation = state.routes.resolve(&method, &routed_path(&url)?);

    let mut response = state.engine.forward(url, method, &headers, body).await?;

    if let Some(operation) = operation.filter(|_| response.status == StatusCode::OK) {
        let memberships = state
            .team_memberships
            .team_memberships_by_user(user.id)
            .await
            .map_err(ApiError::store)?;
        let controls = state
            .resource_controls
            .resource_controls()
            .await
            .map_err(ApiError::store)?;

        let context = OperationContext::for_user(&user, endpoint_id, &memberships, controls);
        operation.apply(&mut response, &context)?;
    }

    Ok((response.status, response.headers, response.body).into_response())
}

/// Engine part of the raw request path, still percent-encoded
fn engine_path(raw: &str) -> Result<String, ApiError> {
    // "", "endpoints", "{id}", "docker", rest
    match raw.splitn(5, '/').nth(4) {
        Some(rest) => Ok(format!("/{}", rest)),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "not found")),
    }
}

/// Path the engine routes on: the forwarded URL path, decoded once
///
/// A decoded `?` or `#` is refused.
fn routed_path(url: &Url) -> Result<String, ApiError> {
    let invalid = || ApiError::new(StatusCode::BAD_REQUEST, "invalid request path");

    let decoded = urlencoding::decode(url.path()).map_err(|_| invalid())?;
    if decoded.contains(['?', '#']) {
        return Err(invalid());
    }
    Ok(decoded.into_owned())
}

fn requesting_user(headers: &HeaderMap) -> Result<UserId, ApiError> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(UserId)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "missing or invalid user"))
}

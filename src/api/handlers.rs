//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{debug, info, warn};

use crate::actor::{ActorLifecycle, RuntimeConfig};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::metrics;

/// Application state shared with handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Actor type hosted by this app.
    pub actor_type: Arc<str>,
    /// Document served on `/dapr/config`.
    pub runtime_config: Arc<RuntimeConfig>,
    /// `runtime_config` pre-serialized, so every response is byte-identical.
    config_body: Bytes,
    /// Prometheus handle when metrics are exported.
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state for the configured actor type.
    pub fn new(config: &Config) -> Result<Self> {
        let runtime_config = RuntimeConfig::for_actor_type(config.actor_type());
        let config_body = Bytes::from(serde_json::to_vec(&runtime_config)?);

        Ok(Self {
            actor_type: Arc::from(config.actor_type()),
            runtime_config: Arc::new(runtime_config),
            config_body,
            metrics: None,
        })
    }

    /// Attach a Prometheus handle; enables `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Check if metrics are exported.
    pub fn metrics_enabled(&self) -> bool {
        self.metrics.is_some()
    }

    /// Serialized runtime config document.
    pub fn config_body(&self) -> &Bytes {
        &self.config_body
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("actor_type", &self.actor_type)
            .field("runtime_config", &self.runtime_config)
            .field("metrics_enabled", &self.metrics_enabled())
            .finish()
    }
}

fn json_ok() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")])
}

/// Root handler - always returns 200 with an empty body.
pub async fn index() -> StatusCode {
    info!("index handler called");
    StatusCode::OK
}

/// Runtime config handler - returns the actor registration document.
pub async fn dapr_config(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    info!(
        uri = %uri,
        document = ?state.runtime_config,
        "Processing runtime config request"
    );
    metrics::inc_config_requests();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.config_body.clone(),
    )
}

/// Actor method handler - accepts any actor type, id and method.
pub async fn actor_method(
    Path((actor_type, actor_id, method)): Path<(String, String, String)>,
) -> impl IntoResponse {
    debug!(%actor_type, %actor_id, %method, "Processing actor method request");
    metrics::inc_actor_method_calls();
    json_ok()
}

/// Actor pub/sub handler - acknowledges a topic message delivered to an actor.
pub async fn actor_pubsub(
    Path((actor_type, actor_id, pubsub_name, topic)): Path<(String, String, String, String)>,
) -> impl IntoResponse {
    debug!(%actor_type, %actor_id, %pubsub_name, %topic, "Processing actor pubsub request");
    metrics::inc_actor_pubsub_deliveries(&topic);
    json_ok()
}

/// Activation handler - 400 unless the actor type is the hosted one.
pub async fn activate_actor(
    State(state): State<AppState>,
    Path((actor_type, actor_id)): Path<(String, String)>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    lifecycle(&state, ActorLifecycle::Activate, actor_type, &actor_id)
}

/// Deactivation handler - 400 unless the actor type is the hosted one.
pub async fn deactivate_actor(
    State(state): State<AppState>,
    Path((actor_type, actor_id)): Path<(String, String)>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    lifecycle(&state, ActorLifecycle::Deactivate, actor_type, &actor_id)
}

fn lifecycle(
    state: &AppState,
    kind: ActorLifecycle,
    actor_type: String,
    actor_id: &str,
) -> std::result::Result<impl IntoResponse, ApiError> {
    debug!(%kind, %actor_type, %actor_id, "Processing actor lifecycle request");

    if actor_type != *state.actor_type {
        warn!(%kind, %actor_type, "Unknown actor type");
        metrics::inc_actor_rejected("unknown_actor_type");
        return Err(ApiError::UnknownActorType(actor_type));
    }

    metrics::inc_actor_lifecycle(kind);
    Ok(json_ok())
}

/// Health check handler - always returns 200 with an empty body.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Prometheus scrape handler; 404 when metrics are not exported.
pub async fn prometheus(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

//! HTTP API route definitions.

use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use super::handlers::{
    activate_actor, actor_method, actor_pubsub, dapr_config, deactivate_actor, healthz, index,
    prometheus, AppState,
};

/// Router wrapped so `/healthz/` is served like `/healthz`.
pub type App = NormalizePath<Router>;

/// Create the API router.
///
/// Trailing slashes are trimmed before routing, so the normalization wraps
/// the whole router instead of being added with `Router::layer`.
pub fn create_router(state: AppState) -> App {
    let mut router = Router::new()
        .route("/", get(index))
        // Actor runtime callbacks
        .route("/dapr/config", get(dapr_config))
        .route("/actors/:actor_type/:id/method/:method", put(actor_method))
        .route(
            "/actors/:actor_type/:actor_id/publish/:pubsub_name/:topic",
            post(actor_pubsub),
        )
        .route(
            "/actors/:actor_type/:id",
            post(activate_actor).delete(deactivate_actor),
        )
        // Health endpoint
        .route("/healthz", get(healthz));

    if state.metrics_enabled() {
        router = router.route("/metrics", get(prometheus));
    }

    let router = router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Advertise the methods the actor routes accept.
fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_methods([
        Method::GET,
        Method::PUT,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{Config, DEFAULT_ACTOR_TYPE};

    fn app() -> App {
        create_router(AppState::new(&Config::default()).unwrap())
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn index_returns_ok_with_empty_body() {
        let response = app().oneshot(request(Method::GET, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let response = app()
            .oneshot(request(Method::GET, "/healthz"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn config_lists_default_actor_type() {
        let response = app()
            .oneshot(request(Method::GET, "/dapr/config"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["entities"], serde_json::json!([DEFAULT_ACTOR_TYPE]));
        assert_eq!(value["pubsub"][0]["actorType"], DEFAULT_ACTOR_TYPE);
    }

    #[tokio::test]
    async fn actor_method_accepts_anything() {
        let response = app()
            .oneshot(request(Method::PUT, "/actors/whatever/xyz/method/nope"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn activation_checks_actor_type() {
        let ok = app()
            .oneshot(request(Method::POST, "/actors/testActorPubsubTypePerf/abc"))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let rejected = app()
            .oneshot(request(Method::POST, "/actors/otherType/abc"))
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn trailing_slash_is_trimmed() {
        let response = app()
            .oneshot(request(Method::GET, "/healthz/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(request(Method::DELETE, "/actors/testActorPubsubTypePerf/abc/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_route_absent_without_recorder() {
        let response = app()
            .oneshot(request(Method::GET, "/metrics"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected_by_router() {
        let response = app()
            .oneshot(request(Method::GET, "/actors/testActorPubsubTypePerf/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

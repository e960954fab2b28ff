//! Prometheus metrics for the actor endpoints.
//!
//! Counters only: every handler does constant work, so there is no latency
//! worth tracking beyond what `TraceLayer` logs.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::actor::ActorLifecycle;

// === Metric Name Constants ===

/// Config document requests counter metric name.
pub const METRIC_CONFIG_REQUESTS: &str = "config_requests_total";
/// Actor method invocations counter metric name.
pub const METRIC_ACTOR_METHOD_CALLS: &str = "actor_method_calls_total";
/// Pub/sub deliveries to actors counter metric name.
pub const METRIC_ACTOR_PUBSUB_DELIVERIES: &str = "actor_pubsub_deliveries_total";
/// Actor activations counter metric name.
pub const METRIC_ACTOR_ACTIVATIONS: &str = "actor_activations_total";
/// Actor deactivations counter metric name.
pub const METRIC_ACTOR_DEACTIVATIONS: &str = "actor_deactivations_total";
/// Rejected lifecycle requests counter metric name.
pub const METRIC_ACTOR_REJECTED: &str = "actor_requests_rejected_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_CONFIG_REQUESTS,
        "Total number of runtime config document requests"
    );
    describe_counter!(
        METRIC_ACTOR_METHOD_CALLS,
        "Total number of actor method invocations"
    );
    describe_counter!(
        METRIC_ACTOR_PUBSUB_DELIVERIES,
        "Total number of pub/sub messages delivered to actors"
    );
    describe_counter!(
        METRIC_ACTOR_ACTIVATIONS,
        "Total number of actor activations"
    );
    describe_counter!(
        METRIC_ACTOR_DEACTIVATIONS,
        "Total number of actor deactivations"
    );
    describe_counter!(
        METRIC_ACTOR_REJECTED,
        "Total number of actor lifecycle requests rejected"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return a handle for rendering.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Increment config requests counter.
pub fn inc_config_requests() {
    counter!(METRIC_CONFIG_REQUESTS).increment(1);
}

/// Increment actor method calls counter.
pub fn inc_actor_method_calls() {
    counter!(METRIC_ACTOR_METHOD_CALLS).increment(1);
}

/// Increment pub/sub deliveries counter.
pub fn inc_actor_pubsub_deliveries(topic: &str) {
    counter!(METRIC_ACTOR_PUBSUB_DELIVERIES, "topic" => topic.to_string()).increment(1);
}

/// Increment the counter matching a lifecycle request.
pub fn inc_actor_lifecycle(kind: ActorLifecycle) {
    match kind {
        ActorLifecycle::Activate => counter!(METRIC_ACTOR_ACTIVATIONS).increment(1),
        ActorLifecycle::Deactivate => counter!(METRIC_ACTOR_DEACTIVATIONS).increment(1),
    }
}

/// Increment rejected lifecycle requests counter.
pub fn inc_actor_rejected(reason: &'static str) {
    counter!(METRIC_ACTOR_REJECTED, "reason" => reason).increment(1);
}

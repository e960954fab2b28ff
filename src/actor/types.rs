//! Actor runtime configuration types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Idle time after which the runtime deactivates an actor.
pub const ACTOR_IDLE_TIMEOUT: &str = "1h";
/// How often the runtime scans for idle actors.
pub const ACTOR_SCAN_INTERVAL: &str = "30s";
/// How long in-flight calls may run while actors are drained.
pub const DRAIN_ONGOING_CALL_TIMEOUT: &str = "30s";
/// Drain actors that are rebalanced to another host.
pub const DRAIN_REBALANCED_ACTORS: bool = true;
/// Pub/sub component the perf test publishes through.
pub const DEFAULT_PUBSUB_NAME: &str = "messagebus";
/// Topic the perf test publishes to.
pub const DEFAULT_TOPIC_NAME: &str = "topicActorPubsubPerf";
/// Actor method invoked for each delivered message.
pub const SUBSCRIBER_METHOD: &str = "mymethod";

/// Binds a pub/sub topic to an actor method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubSubRegistration {
    /// Pub/sub component name.
    pub pubsub_name: String,
    /// Topic name.
    pub topic: String,
    /// Actor type receiving the messages.
    pub actor_type: String,
    /// Actor method invoked per message.
    pub method: String,
    /// Message data attribute carrying the target actor ID.
    #[serde(
        rename = "actorIDDataAttribute",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actor_id_data_attribute: Option<String>,
}

impl PubSubRegistration {
    /// Subscription used by the perf scenario for `actor_type`.
    pub fn perf_default(actor_type: &str) -> Self {
        Self {
            pubsub_name: DEFAULT_PUBSUB_NAME.to_string(),
            topic: DEFAULT_TOPIC_NAME.to_string(),
            actor_type: actor_type.to_string(),
            method: SUBSCRIBER_METHOD.to_string(),
            actor_id_data_attribute: None,
        }
    }
}

/// Document returned to the actor runtime on `/dapr/config`.
///
/// Empty or unset fields are left out of the JSON so the runtime applies
/// its own defaults for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Actor types hosted by this app.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub actor_idle_timeout: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub actor_scan_interval: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub drain_ongoing_call_timeout: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub drain_rebalanced_actors: bool,
    /// Topic subscriptions delivered to actors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pubsub: Vec<PubSubRegistration>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RuntimeConfig {
    /// Build the document for a single hosted actor type.
    pub fn for_actor_type(actor_type: &str) -> Self {
        Self {
            entities: vec![actor_type.to_string()],
            actor_idle_timeout: ACTOR_IDLE_TIMEOUT.to_string(),
            actor_scan_interval: ACTOR_SCAN_INTERVAL.to_string(),
            drain_ongoing_call_timeout: DRAIN_ONGOING_CALL_TIMEOUT.to_string(),
            drain_rebalanced_actors: DRAIN_REBALANCED_ACTORS,
            pubsub: vec![PubSubRegistration::perf_default(actor_type)],
        }
    }

    /// Check whether `actor_type` is one of the hosted entities.
    pub fn hosts(&self, actor_type: &str) -> bool {
        self.entities.iter().any(|e| e == actor_type)
    }
}

/// Lifecycle request the runtime sends on `/actors/{actorType}/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ActorLifecycle {
    /// POST: actor activated on this host.
    Activate,
    /// DELETE: actor deactivated.
    Deactivate,
}

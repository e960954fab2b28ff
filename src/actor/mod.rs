//! Actor registration module.
//!
//! This module handles:
//! - The runtime configuration document served on `/dapr/config`
//! - Pub/sub subscriptions that route topic messages to actor methods
//! - Actor lifecycle request kinds

pub mod types;

pub use types::{
    ActorLifecycle, PubSubRegistration, RuntimeConfig, ACTOR_IDLE_TIMEOUT, ACTOR_SCAN_INTERVAL,
    DEFAULT_PUBSUB_NAME, DEFAULT_TOPIC_NAME, DRAIN_ONGOING_CALL_TIMEOUT, DRAIN_REBALANCED_ACTORS,
    SUBSCRIBER_METHOD,
};

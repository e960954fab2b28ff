//! Actor pub/sub performance test app.
//!
//! Registers a single actor type with the actor runtime and answers its
//! callbacks with canned responses. The runtime delivers messages published
//! to `topicActorPubsubPerf` on the `messagebus` component to the actor's
//! `mymethod` method; the app acknowledges every call.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`actor`]: Runtime configuration document and pub/sub registration
//! - [`api`]: HTTP routes the runtime calls into
//! - [`metrics`]: Prometheus counters
//! - [`utils`]: Utility functions

pub mod actor;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};

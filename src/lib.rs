//! Health-monitoring push channel for the jukebox kiosk.
//!
//! A single `/health` endpoint reports the state of the kiosk deployment
//! (the jukebox process plus its sidecar services) in one of two ways:
//!
//! - a plain GET returns one fresh [`health::HealthSnapshot`] as JSON;
//! - a WebSocket upgrade opens a push channel that emits a snapshot
//!   immediately, then every 30 seconds, and on demand when the client
//!   sends a `refresh` signal. A `ping` probe is answered with `pong`.
//!
//! Each channel owns its own timer; closing the channel cancels it. No
//! state is shared between connections and no snapshot is ever persisted.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`health`]: Snapshot wire types and simulated generation
//! - [`api`]: HTTP/WebSocket endpoint and router
//! - [`metrics`]: Prometheus counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{HealthError, Result};

//! Health snapshot types and simulated generation.

pub mod simulate;
pub mod snapshot;

pub use simulate::generate_snapshot;
pub use snapshot::{Alert, GaugeSet, HealthSnapshot, ServiceStatus, Severity};

//! Application layer - Use cases and port interfaces

pub mod capture;
pub mod ports;
pub mod reconcile;
pub mod record;
pub mod relay;

// Re-export common types
pub use capture::{CaptureController, CaptureError};
pub use reconcile::{ReconcileError, SessionReconciler, SessionView, ViewStatus};
pub use record::RecordAndRelay;
pub use relay::{RelayError, RelayService};

//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod device;
pub mod processor;
pub mod relay_client;
pub mod store;

// Re-export common types
pub use device::{AudioInput, DeviceError, InputSession};
pub use processor::{ProcessingBackend, ProcessingError};
pub use relay_client::{RelayClient, UploadError};
pub use store::{AudioStore, StoreError};

//! EchoAudit - audio relay with transcript and task extraction
//!
//! This crate provides the upload-and-result-reconciliation pipeline for a
//! voice note system: a capture controller producing one finalized blob per
//! recording, a relay service that persists uploads and forwards them to an
//! external processing service, and a result reconciler keeping task
//! completion state consistent with the remote source of truth.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (filesystem store, HTTP
//!   processing client, relay server, channel-backed capture input)
//! - **CLI**: Argument parsing and relay server wire-up

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

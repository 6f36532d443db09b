//! Relay client infrastructure module

mod http;

pub use http::HttpRelayClient;

//! Processing service infrastructure module

mod http;

pub use http::HttpProcessingClient;

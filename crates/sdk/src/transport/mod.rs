//! Transport layer for the App Store Connect client.

pub mod http;

pub use http::HttpTransport;

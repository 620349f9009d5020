//! # asc-sdk
//!
//! Client layer for the App Store Connect REST API: ES256 bearer tokens,
//! request execution with JSON:API error normalization, and `links.next`
//! pagination.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asc_sdk::{ApiExecutor, ApiRequest, AscClient, ClientResult, Credentials, PrivateKeySource};
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let client = AscClient::builder()
//!         .credentials(Credentials::new(
//!             "69a6de70-03db-47e3-e053-5b8c7c11a4d1",
//!             "2X9R4HXF34",
//!             PrivateKeySource::File("AuthKey_2X9R4HXF34.p8".into()),
//!         ))
//!         .build()?;
//!
//!     let apps = client
//!         .execute_all_pages(ApiRequest::get("/v1/apps").with_query("limit", "200"))
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&apps)?);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod request;
pub mod transport;

pub use auth::{Clock, JwtTokenProvider, StaticToken, SystemClock, TokenProvider};
pub use client::{AscClient, AscClientBuilder};
pub use config::{ClientConfig, Credentials, PrivateKeySource, TokenPolicy};
pub use error::{ApiErrorEntry, ClientError, ClientResult};
pub use request::{ApiExecutor, ApiRequest, HttpMethod, QueryParams};

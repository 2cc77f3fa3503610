//! Client library for the Untappd v4 REST API.
//!
//! Provides an async client that authenticates either with app-level
//! credentials (client id + secret) or a per-user access token, and exposes
//! one method per documented endpoint. Responses are returned as raw
//! [`serde_json::Value`] in the API's envelope format; no typed response
//! model is imposed.
//!
//! ```no_run
//! use untappd_client::UntappdClient;
//!
//! # async fn run() -> Result<(), untappd_client::UntappdError> {
//! let mut client = UntappdClient::new("my-client-id", "my-client-secret")?;
//! let beer = client.beer_info("3839").await?;
//! println!("{beer}");
//!
//! // After the user completes the OAuth flow:
//! client.set_auth("user-access-token");
//! let feed = client.friend_feed(None, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use api::{CheckinOptions, PubFeedOptions, UntappdClient, UntappdClientBuilder};

/// Unified error type for the untappd-client crate.
#[derive(Debug, thiserror::Error)]
pub enum UntappdError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication required: no access token set")]
    AuthRequired,

    #[error("Untappd API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

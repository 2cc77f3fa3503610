//! Untappd v4 REST API client.
//!
//! Every endpoint method funnels through the shared GET/POST executors in
//! [`request`], which attach the auth parameters resolved from the
//! endpoint's [`AuthMode`].

mod actions;
mod feeds;
mod friends;
mod info;
mod request;
mod search;
mod user;

pub use actions::CheckinOptions;
pub use feeds::PubFeedOptions;

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::UntappdError;
use request::{AuthMode, Params};

const API_BASE: &str = "https://api.untappd.com/v4";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Untappd API client.
///
/// Holds app credentials and, once [`UntappdClient::set_auth`] has been
/// called, a user access token. Setting the token takes `&mut self`, so a
/// single instance cannot have its auth changed while calls are in flight;
/// wrap the client in external synchronization if that is needed.
pub struct UntappdClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
}

impl UntappdClient {
    /// Create a client with the default base URL and request timeout.
    ///
    /// # Errors
    ///
    /// If building the underlying [`reqwest::Client`] fails.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, UntappdError> {
        Self::builder(client_id, client_secret).build()
    }

    /// Start building a client with a custom base URL, timeout or user agent.
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> UntappdClientBuilder {
        UntappdClientBuilder {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: API_BASE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Store the access token obtained from Untappd's OAuth flow.
    ///
    /// All subsequent calls authenticate as that user instead of with the
    /// app credentials.
    pub fn set_auth(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }
}

/// Builder for [`UntappdClient`].
#[derive(Debug)]
pub struct UntappdClientBuilder {
    client_id: String,
    client_secret: String,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl UntappdClientBuilder {
    /// Override the API base URL, e.g. to point at a test server or proxy.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom `User-Agent` header for all requests.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// If the base URL is not a valid URL, or building the underlying
    /// [`reqwest::Client`] fails.
    pub fn build(self) -> Result<UntappdClient, UntappdError> {
        let base = Url::parse(&self.base_url)?;

        let mut http = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = &self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(UntappdClient {
            http: http.build()?,
            base_url: base.as_str().trim_end_matches('/').to_owned(),
            client_id: self.client_id,
            client_secret: self.client_secret,
            access_token: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_untappd_v4() {
        let client = UntappdClient::new("id", "secret").unwrap();
        assert_eq!(client.base_url, "https://api.untappd.com/v4");
    }

    #[test]
    fn builder_trims_trailing_slash_from_base_url() {
        let client = UntappdClient::builder("id", "secret")
            .base_url("http://localhost:8080/v4/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/v4");
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let result = UntappdClient::builder("id", "secret")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(UntappdError::UrlParse(_))));
    }

    #[test]
    fn set_auth_switches_to_user_token() {
        let mut client = UntappdClient::new("id", "secret").unwrap();
        assert!(client.access_token.is_none());

        client.set_auth("token123");
        assert_eq!(client.access_token.as_deref(), Some("token123"));
    }
}

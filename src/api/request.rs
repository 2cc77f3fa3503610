use serde::{Serialize, Serializer};

use super::*;

/// How an endpoint authenticates.
///
/// Attached statically to each endpoint call and resolved against the
/// client's state by [`UntappdClient::auth_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Uses the access token when set, app credentials otherwise.
    AppOrUser,
    /// Requires an access token; fails before any network I/O without one.
    UserOnly,
}

/// Ordered request parameters, built per call and discarded after use.
///
/// Absent optional parameters are never pushed, so they are omitted from
/// the encoded query string or form body entirely.
#[derive(Debug, Default)]
pub(crate) struct Params(Vec<(&'static str, String)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    pub(crate) fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

// Serializes as a sequence of pairs, the shape reqwest's query/form
// encoders expect.
impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl UntappdClient {
    /// Resolve the auth query parameters for an endpoint.
    fn auth_params(&self, mode: AuthMode) -> Result<Vec<(&'static str, &str)>, UntappdError> {
        match (&self.access_token, mode) {
            (Some(token), _) => Ok(vec![("access_token", token.as_str())]),
            (None, AuthMode::AppOrUser) => Ok(vec![
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ]),
            (None, AuthMode::UserOnly) => Err(UntappdError::AuthRequired),
        }
    }

    /// Execute a GET request. Auth and call parameters go in the query string.
    pub(crate) async fn get(
        &self,
        mode: AuthMode,
        path: &str,
        params: Params,
    ) -> Result<Value, UntappdError> {
        let auth = self.auth_params(mode)?;
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(url, "GET");

        let resp = self
            .http
            .get(&url)
            .query(&auth)
            .query(&params)
            .send()
            .await?;

        self.parse_response(resp).await
    }

    /// Execute a POST request. Auth parameters stay in the query string;
    /// call parameters are form-encoded in the body, even when empty.
    pub(crate) async fn post(
        &self,
        mode: AuthMode,
        path: &str,
        params: Params,
    ) -> Result<Value, UntappdError> {
        let auth = self.auth_params(mode)?;
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(url, "POST");

        let resp = self
            .http
            .post(&url)
            .query(&auth)
            .form(&params)
            .send()
            .await?;

        self.parse_response(resp).await
    }

    /// Check the status and parse the body as JSON, returned verbatim.
    async fn parse_response(&self, resp: reqwest::Response) -> Result<Value, UntappdError> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Untappd API returned an error");
            return Err(UntappdError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

use super::*;

impl UntappdClient {
    /// Full details for a brewery.
    pub async fn brewery_info(&self, brewery_id: &str) -> Result<Value, UntappdError> {
        self.get(
            AuthMode::AppOrUser,
            &format!("brewery/info/{brewery_id}"),
            Params::new(),
        )
        .await
    }

    /// Full details for a beer.
    pub async fn beer_info(&self, beer_id: &str) -> Result<Value, UntappdError> {
        self.get(AuthMode::AppOrUser, &format!("beer/info/{beer_id}"), Params::new())
            .await
    }

    /// Full details for a venue.
    pub async fn venue_info(&self, venue_id: &str) -> Result<Value, UntappdError> {
        self.get(AuthMode::AppOrUser, &format!("venue/info/{venue_id}"), Params::new())
            .await
    }

    /// Full details for a single check-in.
    pub async fn checkin_info(&self, checkin_id: &str) -> Result<Value, UntappdError> {
        self.get(
            AuthMode::AppOrUser,
            &format!("checkin/view/{checkin_id}"),
            Params::new(),
        )
        .await
    }

    /// Profile details for a user.
    pub async fn user_info(&self, username: &str) -> Result<Value, UntappdError> {
        self.get(AuthMode::AppOrUser, &format!("user/info/{username}"), Params::new())
            .await
    }

    /// Resolve a Foursquare venue id to the matching Untappd venue.
    pub async fn foursquare_venue_lookup(&self, venue_id: &str) -> Result<Value, UntappdError> {
        self.get(
            AuthMode::AppOrUser,
            &format!("venue/foursquare_lookup/{venue_id}"),
            Params::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn beer_info_is_a_bodyless_get_with_query_auth() {
        let server = MockServer::start().await;
        let envelope = json!({
            "meta": { "code": 200 },
            "response": { "beer": { "bid": 1 } }
        });

        Mock::given(method("GET"))
            .and(path("/beer/info/3839"))
            .and(query_param("client_id", "id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
            .expect(1)
            .mount(&server)
            .await;

        let client = UntappdClient::builder("id", "secret")
            .base_url(server.uri())
            .build()
            .unwrap();
        let value = client.beer_info("3839").await.unwrap();

        assert_eq!(value, envelope);
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }
}

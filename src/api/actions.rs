use super::*;

/// Optional attributes for [`UntappdClient::checkin`].
///
/// `facebook`, `twitter` and `foursquare` take `"on"` to cross-post the
/// check-in to that network.
#[derive(Debug, Default, Clone)]
pub struct CheckinOptions {
    pub foursquare_id: Option<String>,
    pub geolat: Option<f64>,
    pub geolng: Option<f64>,
    pub shout: Option<String>,
    pub rating: Option<f32>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub foursquare: Option<String>,
}

impl CheckinOptions {
    fn fill(&self, params: &mut Params) {
        params.push_opt("foursquare_id", self.foursquare_id.as_deref());
        params.push_opt("geolat", self.geolat);
        params.push_opt("geolng", self.geolng);
        params.push_opt("shout", self.shout.as_deref());
        params.push_opt("rating", self.rating);
        params.push_opt("facebook", self.facebook.as_deref());
        params.push_opt("twitter", self.twitter.as_deref());
        params.push_opt("foursquare", self.foursquare.as_deref());
    }
}

impl UntappdClient {
    /// Check in to a beer as the authenticated user.
    ///
    /// `gmt_offset` is the user's offset from GMT in hours, `timezone` the
    /// matching timezone name.
    pub async fn checkin(
        &self,
        bid: &str,
        gmt_offset: i32,
        timezone: &str,
        options: &CheckinOptions,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("gmt_offset", gmt_offset);
        params.push("timezone", timezone);
        params.push("bid", bid);
        options.fill(&mut params);
        self.post(AuthMode::UserOnly, "checkin/add", params).await
    }

    /// Comment on a check-in.
    pub async fn add_comment(
        &self,
        checkin_id: &str,
        comment: &str,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("comment", comment);
        self.post(
            AuthMode::UserOnly,
            &format!("checkin/addcomment/{checkin_id}"),
            params,
        )
        .await
    }

    /// Delete one of the authenticated user's comments.
    pub async fn remove_comment(&self, comment_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("checkin/deletecomment/{comment_id}"),
            Params::new(),
        )
        .await
    }

    /// Toast (or untoast) a check-in.
    pub async fn toast(&self, checkin_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("checkin/toast/{checkin_id}"),
            Params::new(),
        )
        .await
    }

    // The wishlist endpoints mutate state but the service only accepts them
    // as GET; kept as GET for wire compatibility.

    /// Add a beer to the authenticated user's wishlist.
    pub async fn add_to_wishlist(&self, bid: &str) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("bid", bid);
        self.get(AuthMode::UserOnly, "user/wishlist/add", params).await
    }

    /// Remove a beer from the authenticated user's wishlist.
    pub async fn remove_from_wishlist(&self, bid: &str) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("bid", bid);
        self.get(AuthMode::UserOnly, "user/wishlist/delete", params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn authed_client(server: &MockServer) -> UntappdClient {
        let mut client = UntappdClient::builder("id", "secret")
            .base_url(server.uri())
            .build()
            .unwrap();
        client.set_auth("T");
        client
    }

    #[tokio::test]
    async fn checkin_sends_required_and_set_optionals_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkin/add"))
            .and(query_param("access_token", "T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server).await;
        let options = CheckinOptions {
            shout: Some("cheers!".into()),
            rating: Some(4.5),
            ..Default::default()
        };
        client
            .checkin("3839", -5, "EST", &options)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8(requests[0].body.clone()).unwrap();

        assert_eq!(body, "gmt_offset=-5&timezone=EST&bid=3839&shout=cheers%21&rating=4.5");
        assert!(requests[0].url.query_pairs().all(|(k, _)| k != "bid"));
    }

    #[tokio::test]
    async fn toast_posts_an_empty_form_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkin/toast/99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server).await;
        client.toast("99").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
        let content_type = requests[0]
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(content_type, "application/x-www-form-urlencoded");
    }

    #[tokio::test]
    async fn wishlist_add_stays_a_get_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/wishlist/add"))
            .and(query_param("bid", "3839"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server).await;
        client.add_to_wishlist("3839").await.unwrap();
    }
}

use super::*;

/// Optional filters for [`UntappdClient::pub_feed`].
///
/// Each field is sent only when set; absent fields are omitted from the
/// query string entirely.
#[derive(Debug, Default, Clone)]
pub struct PubFeedOptions {
    pub min_id: Option<u64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<u32>,
    pub max_id: Option<u64>,
    pub limit: Option<u32>,
}

impl PubFeedOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("min_id", self.min_id);
        params.push_opt("lng", self.lng);
        params.push_opt("lat", self.lat);
        params.push_opt("radius", self.radius);
        params.push_opt("max_id", self.max_id);
        params.push_opt("limit", self.limit);
        params
    }
}

impl UntappdClient {
    /// Recent check-ins of the authenticated user and their friends.
    pub async fn friend_feed(
        &self,
        max_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("max_id", max_id);
        params.push_opt("limit", limit);
        self.get(AuthMode::UserOnly, "checkin/recent", params).await
    }

    /// Recent check-ins of a single user.
    pub async fn user_feed(
        &self,
        username: &str,
        max_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("max_id", max_id);
        params.push_opt("limit", limit);
        self.get(AuthMode::AppOrUser, &format!("user/checkin/{username}"), params)
            .await
    }

    /// Public feed of check-ins, optionally filtered by location.
    pub async fn pub_feed(&self, options: &PubFeedOptions) -> Result<Value, UntappdError> {
        self.get(AuthMode::AppOrUser, "thepub/local", options.params())
            .await
    }

    /// Recent check-ins at a venue.
    pub async fn venue_feed(
        &self,
        venue_id: &str,
        min_id: Option<u64>,
        max_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("min_id", min_id);
        params.push_opt("max_id", max_id);
        params.push_opt("limit", limit);
        self.get(AuthMode::AppOrUser, &format!("venue/checkins/{venue_id}"), params)
            .await
    }

    /// Recent check-ins for a beer.
    pub async fn beer_feed(
        &self,
        beer_id: &str,
        min_id: Option<u64>,
        max_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("min_id", min_id);
        params.push_opt("max_id", max_id);
        params.push_opt("limit", limit);
        self.get(AuthMode::AppOrUser, &format!("beer/checkins/{beer_id}"), params)
            .await
    }

    /// Recent check-ins for a brewery's beers.
    pub async fn brewery_feed(
        &self,
        brewery_id: &str,
        min_id: Option<u64>,
        max_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("min_id", min_id);
        params.push_opt("max_id", max_id);
        params.push_opt("limit", limit);
        self.get(
            AuthMode::AppOrUser,
            &format!("brewery/checkins/{brewery_id}"),
            params,
        )
        .await
    }
}

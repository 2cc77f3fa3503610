use super::*;

impl UntappdClient {
    /// Search breweries by name.
    pub async fn brewery_search(&self, query: &str) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("q", query);
        self.get(AuthMode::AppOrUser, "search/brewery", params).await
    }

    /// Search beers by name, optionally sorted (`checkin`, `name`, ...).
    pub async fn beer_search(&self, query: &str, sort: Option<&str>) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push("q", query);
        params.push_opt("sort", sort);
        self.get(AuthMode::AppOrUser, "search/beer", params).await
    }

    /// Beers currently trending on the service.
    pub async fn beer_trending(&self) -> Result<Value, UntappdError> {
        self.get(AuthMode::AppOrUser, "beer/trending", Params::new())
            .await
    }
}

use super::*;

impl UntappdClient {
    /// Badges earned by the authenticated user.
    pub async fn user_badges(
        &self,
        username: &str,
        offset: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("offset", offset);
        self.get(AuthMode::UserOnly, &format!("user/badges/{username}"), params)
            .await
    }

    /// Friend list of a user.
    pub async fn user_friends(
        &self,
        username: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("offset", offset);
        params.push_opt("limit", limit);
        self.get(AuthMode::AppOrUser, &format!("user/friends/{username}"), params)
            .await
    }

    /// Wishlist of a user, optionally sorted.
    pub async fn user_wishlist(
        &self,
        username: &str,
        sort: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("sort", sort);
        params.push_opt("offset", offset);
        self.get(AuthMode::AppOrUser, &format!("user/wishlist/{username}"), params)
            .await
    }

    /// Distinct beers a user has checked in, optionally sorted.
    pub async fn user_distinct_beers(
        &self,
        username: &str,
        sort: Option<&str>,
        offset: Option<u32>,
    ) -> Result<Value, UntappdError> {
        let mut params = Params::new();
        params.push_opt("sort", sort);
        params.push_opt("offset", offset);
        self.get(AuthMode::AppOrUser, &format!("user/beers/{username}"), params)
            .await
    }

    /// Unread notifications for the authenticated user.
    pub async fn notifications(&self) -> Result<Value, UntappdError> {
        self.get(AuthMode::UserOnly, "notifications", Params::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn user_badges_requires_user_auth() {
        let client = UntappdClient::new("id", "secret").unwrap();
        let result = client.user_badges("alice", None).await;
        assert!(matches!(result, Err(UntappdError::AuthRequired)));
    }
}

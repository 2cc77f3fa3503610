use super::*;

impl UntappdClient {
    /// Friend requests waiting on the authenticated user.
    pub async fn pending_friends(&self) -> Result<Value, UntappdError> {
        self.get(AuthMode::UserOnly, "user/pending", Params::new())
            .await
    }

    /// Accept a pending friend request.
    pub async fn accept_friend(&self, target_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("friend/accept/{target_id}"),
            Params::new(),
        )
        .await
    }

    /// Reject a pending friend request.
    pub async fn reject_friend(&self, target_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("friend/reject/{target_id}"),
            Params::new(),
        )
        .await
    }

    /// Remove an existing friend.
    pub async fn remove_friend(&self, target_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("friend/remove/{target_id}"),
            Params::new(),
        )
        .await
    }

    /// Send a friend request to another user.
    pub async fn request_friend(&self, target_id: &str) -> Result<Value, UntappdError> {
        self.post(
            AuthMode::UserOnly,
            &format!("friend/request/{target_id}"),
            Params::new(),
        )
        .await
    }
}

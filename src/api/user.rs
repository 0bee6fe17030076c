//! User-info endpoint and session profile refresh.

use anyhow::Result;

use crate::models::UserProfile;

use super::ApiClient;

impl ApiClient {
    /// Fetch the signed-in user's profile. The server may omit `role`.
    pub async fn fetch_user_info(&self) -> Result<UserProfile> {
        self.get("/my/userinfo").await
    }

    /// Fetch the profile and store it in the session, backfilling a missing
    /// role to `"user"`. Returns the profile as stored. A fetch failure
    /// propagates and leaves the stored profile untouched.
    pub async fn refresh_user_info(&self) -> Result<UserProfile> {
        let profile = self.fetch_user_info().await?;
        let mut session = self.context().session().write().await;
        session.store_user_info(profile)?;
        Ok(session.profile().cloned().unwrap_or_default())
    }
}

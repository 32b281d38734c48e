use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Profile;

impl ApiClient {
    pub async fn profile(&self) -> Result<Profile> {
        self.get("/api/profile").await
    }

    pub async fn update_profile(&self, data: &Profile) -> Result<Profile> {
        self.put("/api/profile", data).await
    }
}

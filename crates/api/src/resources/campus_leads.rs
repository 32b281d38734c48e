use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CampusLead, NewCampusLead};

impl ApiClient {
    pub async fn campus_leads(&self) -> Result<Vec<CampusLead>> {
        self.get("/api/campus-leads").await
    }

    pub async fn campus_lead(&self, id: &str) -> Result<CampusLead> {
        self.get(&format!("/api/campus-leads/{id}")).await
    }

    pub async fn create_campus_lead(&self, data: &NewCampusLead) -> Result<CampusLead> {
        self.post("/api/campus-leads", data).await
    }

    pub async fn update_campus_lead(&self, id: &str, data: &NewCampusLead) -> Result<CampusLead> {
        self.put(&format!("/api/campus-leads/{id}"), data).await
    }
}

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Cohort, NewCohort};

impl ApiClient {
    pub async fn cohorts(&self) -> Result<Vec<Cohort>> {
        self.get("/api/cohorts").await
    }

    pub async fn cohort(&self, id: &str) -> Result<Cohort> {
        self.get(&format!("/api/cohorts/{id}")).await
    }

    pub async fn create_cohort(&self, data: &NewCohort) -> Result<Cohort> {
        self.post("/api/cohorts", data).await
    }

    pub async fn update_cohort(&self, id: &str, data: &NewCohort) -> Result<Cohort> {
        self.put(&format!("/api/cohorts/{id}"), data).await
    }

    // No UI flow wires deletion in, but the endpoint exists.
    pub async fn delete_cohort(&self, id: &str) -> Result<()> {
        self.delete(&format!("/api/cohorts/{id}")).await
    }
}

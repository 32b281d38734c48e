use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CalendarEvent, NewEvent};

impl ApiClient {
    pub async fn events(&self) -> Result<Vec<CalendarEvent>> {
        self.get("/api/events").await
    }

    pub async fn create_event(&self, data: &NewEvent) -> Result<CalendarEvent> {
        self.post("/api/events", data).await
    }

    pub async fn update_event(&self, id: &str, data: &NewEvent) -> Result<CalendarEvent> {
        self.put(&format!("/api/events/{id}"), data).await
    }

    pub async fn delete_event(&self, id: &str) -> Result<()> {
        self.delete(&format!("/api/events/{id}")).await
    }
}

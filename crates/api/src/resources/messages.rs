use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Channel, Message, NewChannel, NewMessage};

impl ApiClient {
    pub async fn channels(&self) -> Result<Vec<Channel>> {
        self.get("/api/messages/channels").await
    }

    pub async fn create_channel(&self, data: &NewChannel) -> Result<Channel> {
        self.post("/api/messages/channels", data).await
    }

    pub async fn messages(&self, channel_id: &str) -> Result<Vec<Message>> {
        self.get(&format!("/api/messages/{channel_id}")).await
    }

    pub async fn send_message(&self, channel_id: &str, data: &NewMessage) -> Result<Message> {
        self.post(&format!("/api/messages/{channel_id}"), data).await
    }

    /// Flips the starred flag; returns the updated message.
    pub async fn toggle_star(&self, channel_id: &str, message_id: &str) -> Result<Message> {
        self.put_bare(&format!("/api/messages/{channel_id}/{message_id}/star"))
            .await
    }

    pub async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        self.delete(&format!("/api/messages/{channel_id}/{message_id}"))
            .await
    }
}

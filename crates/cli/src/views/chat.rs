//! Chat panel: channel list plus the transcript of one selected channel.

use chrono::{Local, NaiveDate};

use api::models::{Channel, ChannelKind, FileKind, Message, NewChannel, NewMessage, ReplyRef, Role};
use api::ApiClient;

use crate::defaults;
use crate::render;
use crate::views::{local_id, ListState, Tracked};

pub struct ChatPanel {
    role: Role,
    pub channels: ListState<Channel>,
    pub messages: ListState<Message>,
    pub selected: Option<String>,
    pub search: String,
}

impl ChatPanel {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            channels: ListState::new(),
            messages: ListState::new(),
            selected: None,
            search: String::new(),
        }
    }

    pub async fn load_channels(&mut self, api: &ApiClient) {
        self.channels.begin_load();
        self.channels
            .finish_load(api.channels().await, defaults::channels());
    }

    /// Select a channel and fetch its transcript.
    pub async fn open(&mut self, api: &ApiClient, channel_id: &str) {
        self.selected = Some(channel_id.to_string());
        self.messages.begin_load();
        self.messages
            .finish_load(api.messages(channel_id).await, defaults::messages(channel_id));
    }

    /// Channels the current viewer may see, filtered by the search query.
    /// Campus leads never see team-only channels.
    pub fn visible_channels(&self) -> Vec<&Tracked<Channel>> {
        let query = self.search.to_lowercase();
        self.channels
            .items()
            .iter()
            .filter(|t| self.role == Role::Team || t.record.kind != ChannelKind::Team)
            .filter(|t| query.is_empty() || t.record.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Optimistic send into the selected channel.
    pub async fn send(
        &mut self,
        api: &ApiClient,
        content: &str,
        reply_to: Option<&str>,
        file: Option<(String, FileKind)>,
    ) {
        let Some(channel_id) = self.selected.clone() else {
            return;
        };

        let reply_ref = reply_to.and_then(|id| {
            self.messages.records().find(|m| m.id == id).map(|m| ReplyRef {
                id: m.id.clone(),
                sender: m.sender.clone(),
                content: m.content.clone(),
            })
        });

        let (file_name, file_type) = match file {
            Some((name, kind)) => (Some(name), Some(kind)),
            None => (None, None),
        };

        let draft = NewMessage {
            channel_id: channel_id.clone(),
            sender: "You".to_string(),
            role: self.role,
            content: content.to_string(),
            file_name: file_name.clone(),
            file_type,
            file_url: None,
            reply_to_id: reply_ref.as_ref().map(|r| r.id.clone()),
        };

        let now = Local::now();
        let local = Message {
            id: local_id(),
            channel_id: channel_id.clone(),
            sender: draft.sender.clone(),
            role: self.role,
            content: draft.content.clone(),
            timestamp: now.format("%I:%M %p").to_string(),
            time: now.format("%H:%M").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            read: false,
            starred: false,
            file_name,
            file_type,
            file_url: None,
            reply_to: reply_ref,
        };

        self.messages
            .apply_create(api.send_message(&channel_id, &draft).await, local);
    }

    /// Optimistic star flip, in place.
    pub async fn toggle_star(&mut self, api: &ApiClient, message_id: &str) {
        let Some(channel_id) = self.selected.clone() else {
            return;
        };
        let Some(mut flipped) = self
            .messages
            .records()
            .find(|m| m.id == message_id)
            .cloned()
        else {
            return;
        };
        flipped.starred = !flipped.starred;

        self.messages.apply_update(
            api.toggle_star(&channel_id, message_id).await,
            flipped,
            |m| m.id == message_id,
        );
    }

    /// Optimistic delete; the message disappears locally either way.
    pub async fn delete_message(&mut self, api: &ApiClient, message_id: &str) {
        let Some(channel_id) = self.selected.clone() else {
            return;
        };
        self.messages.apply_remove(
            api.delete_message(&channel_id, message_id).await,
            |m| m.id == message_id,
        );
    }

    pub async fn create_channel(&mut self, api: &ApiClient, name: &str, kind: ChannelKind) {
        let draft = NewChannel {
            name: name.to_string(),
            kind,
        };
        let local = Channel {
            id: local_id(),
            name: draft.name.clone(),
            kind,
            unread: 0,
            last_message: String::new(),
            last_message_time: String::new(),
            online: false,
            typing: false,
            created_at: None,
        };
        self.channels
            .apply_create(api.create_channel(&draft).await, local);
    }

    /// Transcript grouped by calendar day, in first-seen order.
    pub fn grouped(&self) -> Vec<(String, Vec<&Message>)> {
        let mut groups: Vec<(String, Vec<&Message>)> = Vec::new();
        for message in self.messages.records() {
            match groups.iter_mut().find(|(date, _)| *date == message.date) {
                Some((_, bucket)) => bucket.push(message),
                None => groups.push((message.date.clone(), vec![message])),
            }
        }
        groups
    }

    /// "Today" / "Yesterday" / "October 22, 2025".
    pub fn date_label(date_str: &str, today: NaiveDate) -> String {
        match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(date) if date == today => "Today".to_string(),
            Ok(date) if date == today.pred_opt().unwrap_or(today) => "Yesterday".to_string(),
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => date_str.to_string(),
        }
    }

    pub fn render_channels(&self) -> String {
        if self.channels.loading {
            return render::skeleton("channels");
        }
        let mut out = String::new();
        for tracked in self.visible_channels() {
            let c = &tracked.record;
            let presence = if c.online { render::paint("32", "●") } else { render::dim("○") };
            let unread = if c.unread > 0 {
                render::paint("36", &format!(" ({})", c.unread))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {presence} [{}] {} {}{}{}\n      {} {}\n",
                c.id,
                render::initials(&c.name),
                render::bold(&c.name),
                unread,
                render::unconfirmed_marker(tracked.server_confirmed),
                render::truncate(&c.last_message, 40),
                render::dim(&c.last_message_time),
            ));
        }
        out
    }

    pub fn render_messages(&self, today: NaiveDate) -> String {
        if self.messages.loading {
            return render::skeleton("messages");
        }
        let mut out = String::new();
        let confirmed: std::collections::HashMap<&str, bool> = self
            .messages
            .items()
            .iter()
            .map(|t| (t.record.id.as_str(), t.server_confirmed))
            .collect();

        for (date, bucket) in self.grouped() {
            out.push_str(&format!("── {} ──\n", Self::date_label(&date, today)));
            for m in bucket {
                let star = if m.starred { " ★" } else { "" };
                let marker =
                    render::unconfirmed_marker(confirmed.get(m.id.as_str()).copied().unwrap_or(true));
                if let Some(reply) = &m.reply_to {
                    out.push_str(&render::dim(&format!(
                        "    ↪ {}: {}\n",
                        reply.sender,
                        render::truncate(&reply.content, 40)
                    )));
                }
                out.push_str(&format!(
                    "  [{}] {} {}: {}{}{}\n",
                    m.id,
                    render::dim(&m.timestamp),
                    render::bold(&m.sender),
                    m.content,
                    star,
                    marker,
                ));
                if let Some(name) = &m.file_name {
                    out.push_str(&render::dim(&format!("      📎 {name}\n")));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_api(dir: &tempfile::TempDir) -> ApiClient {
        ApiClient::new(
            "http://127.0.0.1:1",
            api::TokenStore::open(dir.path().join("credentials.toml")),
        )
    }

    #[test]
    fn test_campus_lead_channel_filter() {
        let mut panel = ChatPanel::new(Role::CampusLead);
        panel.channels.finish_load(Ok(defaults::channels()), vec![]);

        let visible = panel.visible_channels();
        assert_eq!(visible.len(), 3);
        assert!(visible
            .iter()
            .all(|t| t.record.kind != ChannelKind::Team));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut panel = ChatPanel::new(Role::Team);
        panel.channels.finish_load(Ok(defaults::channels()), vec![]);
        panel.search = "telangana".to_string();

        let visible = panel.visible_channels();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].record.name, "Campus Leads - Telangana");
    }

    #[tokio::test]
    async fn test_failed_send_still_appends_message() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut panel = ChatPanel::new(Role::Team);
        panel.open(&api, "2").await;
        let before = panel.messages.len();

        panel.send(&api, "Materials attached", Some("5"), None).await;

        assert_eq!(panel.messages.len(), before + 1);
        let sent = panel.messages.items().last().unwrap();
        assert!(!sent.server_confirmed);
        assert_eq!(sent.record.sender, "You");
        assert_eq!(sent.record.reply_to.as_ref().unwrap().sender, "Ananya");
    }

    #[tokio::test]
    async fn test_star_flip_and_delete_are_local_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut panel = ChatPanel::new(Role::Team);
        panel.open(&api, "2").await;

        panel.toggle_star(&api, "1").await;
        let starred = panel.messages.records().find(|m| m.id == "1").unwrap();
        assert!(starred.starred);

        panel.delete_message(&api, "1").await;
        assert!(panel.messages.records().all(|m| m.id != "1"));
    }

    #[test]
    fn test_grouped_preserves_first_seen_order() {
        let mut panel = ChatPanel::new(Role::Team);
        let mut transcript = defaults::messages("2");
        transcript[3].date = "2025-10-21".to_string();
        panel.messages.finish_load(Ok(transcript), vec![]);

        let groups = panel.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "2025-10-22");
        assert_eq!(groups[1].0, "2025-10-21");
        assert_eq!(groups[0].1.len(), 5);
    }

    #[test]
    fn test_date_labels() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 22).unwrap();
        assert_eq!(ChatPanel::date_label("2025-10-22", today), "Today");
        assert_eq!(ChatPanel::date_label("2025-10-21", today), "Yesterday");
        assert_eq!(
            ChatPanel::date_label("2025-10-18", today),
            "October 18, 2025"
        );
        assert_eq!(ChatPanel::date_label("garbage", today), "garbage");
    }
}

//! Campus-lead monitor: stat tiles plus the lead table.

use api::models::{CampusLead, LeadStatus, NewCampusLead, Role, StatTile};
use api::ApiClient;

use crate::defaults;
use crate::render;
use crate::views::{local_id, ListState};

#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: String,
    pub college: String,
    pub location: String,
}

pub struct LeadsBoard {
    role: Role,
    pub stats: ListState<StatTile>,
    pub leads: ListState<CampusLead>,
}

impl LeadsBoard {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            stats: ListState::new(),
            leads: ListState::new(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.stats.begin_load();
        self.stats
            .finish_load(api.stats("campus_lead").await, defaults::lead_stats());

        self.leads.begin_load();
        self.leads
            .finish_load(api.campus_leads().await, defaults::campus_leads());
    }

    /// Optimistic create: a fresh lead starts Active with zero counters.
    pub async fn add_lead(&mut self, api: &ApiClient, form: LeadForm) {
        let draft = NewCampusLead {
            name: form.name,
            college: form.college,
            location: form.location,
            status: LeadStatus::Active,
            events_organized: 0,
            students_reached: 0,
            performance: "New".to_string(),
            last_activity: "Just joined".to_string(),
            user_id: None,
        };

        let local = CampusLead {
            id: local_id(),
            name: draft.name.clone(),
            college: draft.college.clone(),
            location: draft.location.clone(),
            status: draft.status,
            events_organized: 0,
            students_reached: 0,
            performance: draft.performance.clone(),
            last_activity: draft.last_activity.clone(),
            user_id: None,
        };

        self.leads
            .apply_create(api.create_campus_lead(&draft).await, local);
    }

    pub fn render(&self) -> String {
        // Campus leads see only their own card, not the whole network.
        if self.role == Role::CampusLead {
            return match self.leads.items().first() {
                Some(tracked) => Self::render_card(&tracked.record),
                None if self.leads.loading => render::skeleton("profile"),
                None => render::dim("No campus lead profile found"),
            };
        }

        let mut out = String::new();

        out.push_str(&render::bold("Lead Distribution\n"));
        if self.stats.loading {
            out.push_str(&render::skeleton("stats"));
            out.push('\n');
        } else {
            for tracked in self.stats.items() {
                let tile = &tracked.record;
                out.push_str(&format!(
                    "  {} {}: {}{}\n",
                    tile.icon.glyph(),
                    render::paint(tile.color.ansi(), &tile.label),
                    tile.value,
                    render::unconfirmed_marker(tracked.server_confirmed),
                ));
            }
        }

        out.push_str(&render::bold("\nCampus Leads\n"));
        if self.leads.loading {
            out.push_str(&render::skeleton("leads"));
            out.push('\n');
            return out;
        }
        for tracked in self.leads.items() {
            let lead = &tracked.record;
            let status = match lead.status {
                LeadStatus::Active => render::paint("32", "Active"),
                LeadStatus::Inactive => render::dim("Inactive"),
            };
            out.push_str(&format!(
                "  {} {} — {} ({})  {}  events {}  reached {}  {}{}\n",
                render::initials(&lead.name),
                render::bold(&lead.name),
                lead.college,
                lead.location,
                status,
                lead.events_organized,
                lead.students_reached,
                render::dim(&lead.last_activity),
                render::unconfirmed_marker(tracked.server_confirmed),
            ));
        }
        out
    }

    fn render_card(lead: &CampusLead) -> String {
        format!(
            "{}\n{} — {}\nEvents organized: {}\nStudents reached: {}\nPerformance: {}\nLast active: {}\n",
            render::bold(&lead.name),
            lead.college,
            lead.location,
            lead.events_organized,
            lead.students_reached,
            lead.performance,
            lead.last_activity,
        )
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

    #[tokio::test]
    async fn test_load_failure_shows_five_default_leads() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = LeadsBoard::new(Role::Team);
        board.load(&offline_api(&dir)).await;

        assert_eq!(board.leads.len(), 5);
        assert_eq!(board.stats.len(), 4);
        assert!(!board.leads.loading);
    }

    #[tokio::test]
    async fn test_failed_add_appends_fresh_lead() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = LeadsBoard::new(Role::Team);
        board.leads.finish_load(Ok(vec![]), vec![]);

        board
            .add_lead(
                &offline_api(&dir),
                LeadForm {
                    name: "Vikram Singh".to_string(),
                    college: "IIIT Hyderabad".to_string(),
                    location: "Hyderabad, Telangana".to_string(),
                },
            )
            .await;

        assert_eq!(board.leads.len(), 1);
        let added = &board.leads.items()[0];
        assert!(!added.server_confirmed);
        assert_eq!(added.record.status, LeadStatus::Active);
        assert_eq!(added.record.events_organized, 0);
        assert_eq!(added.record.performance, "New");
        assert_eq!(added.record.last_activity, "Just joined");
    }

    #[test]
    fn test_campus_lead_sees_only_own_card() {
        let mut board = LeadsBoard::new(Role::CampusLead);
        board.leads.finish_load(Ok(defaults::campus_leads()), vec![]);

        let text = board.render();
        assert!(text.contains("Priya Sharma"));
        assert!(!text.contains("Rahul Verma"));
        assert!(!text.contains("Campus Leads"));
    }
}

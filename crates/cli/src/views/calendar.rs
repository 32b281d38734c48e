//! Calendar: month grid plus the event list.

use chrono::{Datelike, NaiveDate};

use api::models::{CalendarEvent, NewEvent, Role, Visibility};
use api::ApiClient;

use crate::defaults;
use crate::render;
use crate::views::{local_id, ListState};

const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub program: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub description: Option<String>,
    pub color: String,
    pub visibility: Visibility,
    pub location: Option<String>,
}

pub struct CalendarPage {
    role: Role,
    pub events: ListState<CalendarEvent>,
}

impl CalendarPage {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            events: ListState::new(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.events.begin_load();
        self.events
            .finish_load(api.events().await, defaults::events());
    }

    fn build(&self, form: EventForm) -> NewEvent {
        NewEvent {
            title: form.title,
            program: form.program,
            date: form.date,
            time: form.time,
            description: form.description,
            color: form.color,
            text_color: Some("text-black".to_string()),
            visibility: form.visibility,
            created_by: Some(self.role),
            location: form.location,
        }
    }

    fn to_event(draft: &NewEvent, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: draft.title.clone(),
            program: draft.program.clone(),
            date: draft.date,
            time: draft.time.clone(),
            description: draft.description.clone(),
            color: draft.color.clone(),
            text_color: draft.text_color.clone(),
            visibility: draft.visibility,
            created_by: draft.created_by,
            location: draft.location.clone(),
            attendees: None,
            span: None,
        }
    }

    pub async fn add_event(&mut self, api: &ApiClient, form: EventForm) {
        let draft = self.build(form);
        let local = Self::to_event(&draft, local_id());
        self.events
            .apply_create(api.create_event(&draft).await, local);
    }

    pub async fn update_event(&mut self, api: &ApiClient, id: &str, form: EventForm) {
        let draft = self.build(form);
        let local = Self::to_event(&draft, id.to_string());
        self.events.apply_update(
            api.update_event(id, &draft).await,
            local,
            |e| e.id == id,
        );
    }

    pub async fn remove_event(&mut self, api: &ApiClient, id: &str) {
        self.events
            .apply_remove(api.delete_event(id).await, |e| e.id == id);
    }

    /// Month grid as SUN-first weeks; leading and trailing cells outside
    /// the month are None.
    pub fn month_grid(year: i32, month: u32) -> Vec<Vec<Option<u32>>> {
        let first = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d,
            None => return Vec::new(),
        };
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let days_in_month = match next_month {
            Some(d) => d.pred_opt().map(|last| last.day()).unwrap_or(31),
            None => 31,
        };

        let mut cells: Vec<Option<u32>> = Vec::new();
        for _ in 0..first.weekday().num_days_from_sunday() {
            cells.push(None);
        }
        for day in 1..=days_in_month {
            cells.push(Some(day));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells.chunks(7).map(|week| week.to_vec()).collect()
    }

    /// Events visible to the current viewer on a given day: public events,
    /// team events for team members, and private events the viewer created.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .records()
            .filter(|e| e.date == date)
            .filter(|e| match e.visibility {
                Visibility::Everyone => true,
                Visibility::Team => self.role == Role::Team,
                Visibility::Private => e.created_by == Some(self.role),
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.records().find(|e| e.id == id)
    }

    pub fn render_month(&self, year: i32, month: u32) -> String {
        if self.events.loading {
            return render::skeleton("events");
        }

        let mut out = String::new();
        let heading = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{year}-{month:02}"));
        out.push_str(&render::bold(&format!(
            "Upcoming Events & Program Schedule — {heading}\n"
        )));
        out.push_str(&format!("  {}\n", DAYS_OF_WEEK.join("  ")));

        for week in Self::month_grid(year, month) {
            let row: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => {
                        let date = NaiveDate::from_ymd_opt(year, month, *day);
                        let busy = date.map(|d| !self.events_on(d).is_empty()).unwrap_or(false);
                        if busy {
                            render::paint("36", &format!("{day:>4}"))
                        } else {
                            format!("{day:>4}")
                        }
                    }
                    None => "    ".to_string(),
                })
                .collect();
            out.push_str(&format!(" {}\n", row.join(" ")));
        }

        out.push('\n');
        for week in Self::month_grid(year, month) {
            for day in week.into_iter().flatten() {
                let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                    continue;
                };
                for event in self.events_on(date) {
                    let confirmed = self
                        .events
                        .items()
                        .iter()
                        .find(|t| t.record.id == event.id)
                        .map(|t| t.server_confirmed)
                        .unwrap_or(true);
                    let program = if event.program.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", event.program)
                    };
                    out.push_str(&format!(
                        "  {} [{}] {}{}{}{}\n",
                        date,
                        event.id,
                        render::bold(&event.title),
                        program,
                        event
                            .time
                            .as_deref()
                            .map(|t| format!(" at {t}"))
                            .unwrap_or_default(),
                        render::unconfirmed_marker(confirmed),
                    ));
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
    fn test_october_2025_grid_shape() {
        let grid = CalendarPage::month_grid(2025, 10);
        // October 1, 2025 is a Wednesday: three leading blanks.
        assert_eq!(grid[0], vec![None, None, None, Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(grid.len(), 5);
        let last_week = grid.last().unwrap();
        assert_eq!(last_week[5], Some(31));
        assert_eq!(last_week[6], None);
    }

    #[test]
    fn test_february_leap_year_grid() {
        let grid = CalendarPage::month_grid(2024, 2);
        let days: Vec<u32> = grid.into_iter().flatten().flatten().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn test_visibility_filter_hides_team_events_from_leads() {
        let mut page = CalendarPage::new(Role::CampusLead);
        page.events.finish_load(Ok(defaults::events()), vec![]);

        let oct21 = NaiveDate::from_ymd_opt(2025, 10, 21).unwrap();
        let visible = page.events_on(oct21);
        // The team-only interview block is filtered out for leads.
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Info Session");

        let mut team_page = CalendarPage::new(Role::Team);
        team_page.events.finish_load(Ok(defaults::events()), vec![]);
        assert_eq!(team_page.events_on(oct21).len(), 2);
    }

    #[test]
    fn test_private_events_visible_only_to_creator() {
        let mut private = defaults::events();
        private[0].visibility = Visibility::Private;
        private[0].created_by = Some(Role::CampusLead);
        let day = private[0].date;

        let mut lead_page = CalendarPage::new(Role::CampusLead);
        lead_page.events.finish_load(Ok(private.clone()), vec![]);
        assert!(lead_page.events_on(day).iter().any(|e| e.id == "1"));

        let mut team_page = CalendarPage::new(Role::Team);
        team_page.events.finish_load(Ok(private), vec![]);
        assert!(!team_page.events_on(day).iter().any(|e| e.id == "1"));
    }

    #[tokio::test]
    async fn test_failed_add_keeps_event_with_creator_role() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut page = CalendarPage::new(Role::Team);
        page.events.finish_load(Ok(vec![]), vec![]);

        page.add_event(
            &api,
            EventForm {
                title: "Mentor Mixer".to_string(),
                program: "EVP A25".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
                time: Some("5:00 PM".to_string()),
                description: None,
                color: "bg-cyan-400".to_string(),
                visibility: Visibility::Everyone,
                location: None,
            },
        )
        .await;

        assert_eq!(page.events.len(), 1);
        let added = &page.events.items()[0];
        assert!(!added.server_confirmed);
        assert_eq!(added.record.created_by, Some(Role::Team));
        assert_eq!(added.record.text_color.as_deref(), Some("text-black"));
    }

    #[tokio::test]
    async fn test_remove_event_is_local_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut page = CalendarPage::new(Role::Team);
        page.events.finish_load(Ok(defaults::events()), vec![]);
        let before = page.events.len();

        page.remove_event(&api, "10").await;
        assert_eq!(page.events.len(), before - 1);
        assert!(page.find("10").is_none());
    }
}

//! Cohort dashboard: stat tiles plus the cohort list.

use chrono::NaiveDate;

use api::models::{Cohort, NewCohort, StatDraft, StatTile};
use api::ApiClient;

use crate::defaults;
use crate::render;
use crate::views::{local_id, ListState};

/// What the add-cohort form collects; everything else is defaulted.
#[derive(Debug, Clone)]
pub struct CohortForm {
    pub name: String,
    pub program: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    pub description: Option<String>,
}

/// Milestones every new cohort starts with.
const DEFAULT_MILESTONES: [&str; 4] = ["Onboarding", "Development", "Review", "Launch"];

pub struct CohortBoard {
    pub stats: ListState<StatTile>,
    pub cohorts: ListState<Cohort>,
}

impl Default for CohortBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl CohortBoard {
    pub fn new() -> Self {
        Self {
            stats: ListState::new(),
            cohorts: ListState::new(),
        }
    }

    /// Fetch both resources. Each keeps its own loading flag so the stat
    /// row and the list render their skeletons independently.
    pub async fn load(&mut self, api: &ApiClient) {
        self.stats.begin_load();
        self.stats
            .finish_load(api.stats("cohort").await, defaults::cohort_stats());

        self.cohorts.begin_load();
        self.cohorts
            .finish_load(api.cohorts().await, defaults::cohorts());
    }

    /// Optimistic create: a new cohort starts in Planning with zero
    /// progress and the default milestone track.
    pub async fn add_cohort(&mut self, api: &ApiClient, form: CohortForm) {
        let draft = NewCohort {
            name: form.name,
            program: form.program,
            status: "Planning".to_string(),
            start_date: form.start_date,
            end_date: form.end_date,
            participants: form.participants,
            progress: 0,
            milestones: DEFAULT_MILESTONES.iter().map(|m| m.to_string()).collect(),
            completed_milestones: 0,
            description: form.description,
        };

        let local = Cohort {
            id: local_id(),
            name: draft.name.clone(),
            program: draft.program.clone(),
            status: draft.status.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            participants: draft.participants,
            progress: 0,
            milestones: draft.milestones.clone(),
            completed_milestones: 0,
            description: draft.description.clone(),
            created_at: None,
        };

        self.cohorts
            .apply_create(api.create_cohort(&draft).await, local);
    }

    /// Whole-list stat replace; the server's returned list is displayed,
    /// not the proposal.
    pub async fn replace_stats(&mut self, api: &ApiClient, drafts: Vec<StatDraft>) {
        let proposed = drafts.iter().cloned().map(StatDraft::into_tile).collect();
        self.stats
            .apply_replace(api.update_stats("cohort", &drafts).await, proposed);
    }

    pub fn find(&self, id: &str) -> Option<&Cohort> {
        self.cohorts.records().find(|c| c.id == id)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&render::bold("Overview Statistics\n"));
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

        out.push_str(&render::bold("\nPre-Incubation Cohorts\n"));
        if self.cohorts.loading {
            out.push_str(&render::skeleton("cohorts"));
            out.push('\n');
            return out;
        }
        for tracked in self.cohorts.items() {
            let c = &tracked.record;
            out.push_str(&format!(
                "  [{}] {} ({}) — {}{}\n      {} students  {}  milestones {}/{}\n",
                c.id,
                render::bold(&c.name),
                c.program,
                c.status,
                render::unconfirmed_marker(tracked.server_confirmed),
                c.participants,
                render::progress_bar(c.progress, 20),
                c.completed_milestones,
                c.milestones.len(),
            ));
        }
        out
    }

    /// Detail view for one cohort: milestone track with completion marks.
    pub fn render_detail(&self, id: &str) -> Option<String> {
        let cohort = self.find(id)?;
        let mut out = format!(
            "{} — {}\n{} → {}   {} students\n{}\n\nMilestones:\n",
            render::bold(&cohort.name),
            cohort.program,
            cohort.start_date,
            cohort.end_date,
            cohort.participants,
            render::progress_bar(cohort.progress, 30),
        );
        for (i, milestone) in cohort.milestones.iter().enumerate() {
            let done = (i as u32) < cohort.completed_milestones;
            out.push_str(&format!("  [{}] {}\n", if done { "✓" } else { " " }, milestone));
        }
        if let Some(desc) = &cohort.description {
            out.push_str(&format!("\n{}\n", render::dim(desc)));
        }
        Some(out)
    }
}

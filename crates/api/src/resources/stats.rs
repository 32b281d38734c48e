use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{StatDraft, StatTile, StatsUpdate};

impl ApiClient {
    /// Known categories are "cohort" and "campus_lead"; the string passes
    /// through untouched.
    pub async fn stats(&self, category: &str) -> Result<Vec<StatTile>> {
        self.get(&format!("/api/stats/{category}")).await
    }

    /// Whole-list replace. The server may reorder tiles and assigns ids;
    /// the returned list is authoritative.
    pub async fn update_stats(&self, category: &str, stats: &[StatDraft]) -> Result<Vec<StatTile>> {
        self.put(
            &format!("/api/stats/{category}"),
            &StatsUpdate {
                stats: stats.to_vec(),
            },
        )
        .await
    }
}

//! Profile screen: a single record with role-dependent fallback.

use api::models::{Profile, Role};
use api::ApiClient;

use crate::defaults;
use crate::render;
use crate::views::RecordState;

pub struct ProfilePage {
    role: Role,
    pub profile: RecordState<Profile>,
}

impl ProfilePage {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            profile: RecordState::new(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.profile.begin_load();
        self.profile
            .finish_load(api.profile().await, defaults::profile_for(self.role));
    }

    /// Optimistic whole-record replace.
    pub async fn update(&mut self, api: &ApiClient, profile: Profile) {
        self.profile
            .apply_update(api.update_profile(&profile).await, profile);
    }

    /// Apply an edit to the currently-held record (falling back to the
    /// role default when nothing is loaded yet) and push it.
    pub async fn edit(&mut self, api: &ApiClient, apply: impl FnOnce(&mut Profile)) {
        let mut draft = self
            .profile
            .record()
            .cloned()
            .unwrap_or_else(|| defaults::profile_for(self.role));
        apply(&mut draft);
        self.update(api, draft).await;
    }

    pub async fn add_skill(&mut self, api: &ApiClient, skill: &str) {
        let skill = skill.to_string();
        self.edit(api, |p| {
            if !p.skills.contains(&skill) {
                p.skills.push(skill);
            }
        })
        .await;
    }

    pub async fn remove_skill(&mut self, api: &ApiClient, skill: &str) {
        self.edit(api, |p| p.skills.retain(|s| s != skill)).await;
    }

    pub async fn add_achievement(&mut self, api: &ApiClient, achievement: &str) {
        let achievement = achievement.to_string();
        self.edit(api, |p| p.achievements.push(achievement)).await;
    }

    pub fn render(&self) -> String {
        if self.profile.loading {
            return render::skeleton("profile");
        }
        let Some(tracked) = self.profile.get() else {
            return render::dim("No profile loaded");
        };
        let p = &tracked.record;

        let mut out = format!(
            "{}{}\n{} — {}\n",
            render::bold(&p.name),
            render::unconfirmed_marker(tracked.server_confirmed),
            p.role,
            p.email,
        );
        if let Some(college) = &p.college {
            out.push_str(&format!("College: {college}\n"));
        }
        if let Some(department) = &p.department {
            out.push_str(&format!("Department: {department}\n"));
        }
        if let Some(phone) = &p.phone {
            out.push_str(&format!("Phone: {phone}\n"));
        }
        if let Some(location) = &p.location {
            out.push_str(&format!("Location: {location}\n"));
        }
        if let Some(joined) = &p.joined_date {
            out.push_str(&format!("Joined: {joined}\n"));
        }
        if let Some(bio) = &p.bio {
            out.push_str(&format!("\n{bio}\n"));
        }
        if !p.skills.is_empty() {
            out.push_str(&format!("\nSkills: {}\n", p.skills.join(", ")));
        }
        if !p.achievements.is_empty() {
            out.push_str("\nAchievements:\n");
            for achievement in &p.achievements {
                out.push_str(&format!("  • {achievement}\n"));
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

    #[tokio::test]
    async fn test_fallback_profile_matches_role() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut team = ProfilePage::new(Role::Team);
        team.load(&api).await;
        assert_eq!(team.profile.record().unwrap().name, "Sarah Johnson");
        assert!(!team.profile.get().unwrap().server_confirmed);

        let mut lead = ProfilePage::new(Role::CampusLead);
        lead.load(&api).await;
        assert_eq!(lead.profile.record().unwrap().name, "Priya Sharma");
        assert!(!lead.profile.loading);
    }

    #[tokio::test]
    async fn test_skill_edits_apply_locally_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut page = ProfilePage::new(Role::Team);
        page.load(&api).await;

        page.add_skill(&api, "Fundraising").await;
        let profile = page.profile.record().unwrap();
        assert!(profile.skills.contains(&"Fundraising".to_string()));

        // Adding the same skill twice does not duplicate it.
        page.add_skill(&api, "Fundraising").await;
        let count = page
            .profile
            .record()
            .unwrap()
            .skills
            .iter()
            .filter(|s| *s == "Fundraising")
            .count();
        assert_eq!(count, 1);

        page.remove_skill(&api, "Fundraising").await;
        assert!(!page
            .profile
            .record()
            .unwrap()
            .skills
            .contains(&"Fundraising".to_string()));
    }

    #[tokio::test]
    async fn test_achievement_edit_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let api = offline_api(&dir);

        let mut page = ProfilePage::new(Role::CampusLead);
        page.load(&api).await;
        page.add_achievement(&api, "Hosted Demo Day").await;

        let achievements = &page.profile.record().unwrap().achievements;
        assert_eq!(achievements.last().unwrap(), "Hosted Demo Day");
    }
}

//! Code-hosting activity shown in the island

use serde::{Deserialize, Serialize};

/// Account whose activity is displayed
pub const GITHUB_USERNAME: &str = "sisodiajatin";

/// Profile page opened from the island
pub fn profile_url() -> String {
    format!("https://github.com/{}", GITHUB_USERNAME)
}

/// Category of an activity row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Commit,
    Info,
    Error,
}

/// One row of recent activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    /// Relative time label ("3 hours ago"); empty for placeholders
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl Activity {
    fn placeholder(kind: ActivityKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            time: String::new(),
            repo: None,
        }
    }
}

/// Summary of recent activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubActivity {
    pub username: String,
    pub last_commit_time: String,
    pub commit_streak: u32,
    pub today_commits: u32,
    pub total_repos: u32,
    pub is_typing: bool,
    pub is_loading: bool,
    pub recent_activity: Vec<Activity>,
}

impl Default for GithubActivity {
    fn default() -> Self {
        Self::loading()
    }
}

impl GithubActivity {
    /// Placeholder before the first fetch lands
    pub fn loading() -> Self {
        Self {
            username: GITHUB_USERNAME.to_string(),
            last_commit_time: "loading...".to_string(),
            commit_streak: 0,
            today_commits: 0,
            total_repos: 0,
            is_typing: false,
            is_loading: true,
            recent_activity: Vec::new(),
        }
    }

    /// Shown when the provider could not be reached
    pub fn unavailable() -> Self {
        Self {
            last_commit_time: "unavailable".to_string(),
            is_loading: false,
            recent_activity: vec![Activity::placeholder(ActivityKind::Error, "Failed to load")],
            ..Self::loading()
        }
    }

    /// Fill an empty activity list with a "nothing yet" row
    pub fn with_activity(mut self, recent: Vec<Activity>) -> Self {
        self.recent_activity = if recent.is_empty() {
            vec![Activity::placeholder(ActivityKind::Info, "No recent activity")]
        } else {
            recent
        };
        self.is_loading = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_placeholder() {
        let activity = GithubActivity::unavailable();
        assert_eq!(activity.last_commit_time, "unavailable");
        assert!(!activity.is_loading);
        assert_eq!(activity.recent_activity.len(), 1);
        assert_eq!(activity.recent_activity[0].kind, ActivityKind::Error);
        assert_eq!(activity.username, GITHUB_USERNAME);
    }

    #[test]
    fn test_empty_activity_gets_info_row() {
        let activity = GithubActivity::loading().with_activity(Vec::new());
        assert_eq!(activity.recent_activity[0].message, "No recent activity");
        assert!(!activity.is_loading);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let activity: GithubActivity = serde_json::from_str(
            r#"{
                "last_commit_time": "2 hours ago",
                "commit_streak": 4,
                "recent_activity": [{ "kind": "commit", "message": "Fix dock", "repo": "folio" }]
            }"#,
        )
        .unwrap();
        assert_eq!(activity.username, GITHUB_USERNAME);
        assert_eq!(activity.commit_streak, 4);
        assert_eq!(activity.recent_activity[0].repo.as_deref(), Some("folio"));
        assert!(activity.recent_activity[0].time.is_empty());
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url(), "https://github.com/sisodiajatin");
    }
}

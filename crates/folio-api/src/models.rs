// Wire types for the portfolio REST API.
//
// Field names follow the backend's camelCase JSON. Everything that the
// backend may omit carries `#[serde(default)]` so that a sparse record still
// decodes; only structurally required pieces (ids, titles, the `technical`
// block of skills) fail deserialization when missing.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ── Sections ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<AboutExperience>,
    #[serde(default)]
    pub interests: Interests,
    #[serde(default)]
    pub goals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    /// Graduation year; the backend sends either a number or a range string.
    #[serde(default)]
    pub year: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutExperience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interests {
    #[serde(default)]
    pub full_stack: String,
    #[serde(default)]
    pub cloud_computing: String,
    #[serde(default)]
    pub cybersecurity: String,
}

/// Skills payload. `technical` is required: a payload without it is
/// malformed and must surface as an error, not as an empty section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: TechnicalSkills,
    #[serde(default)]
    pub soft: Vec<SoftSkill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub cloud: Vec<String>,
    pub cybersecurity: Vec<String>,
    pub databases: Vec<String>,
    pub devops: Vec<String>,
}

impl TechnicalSkills {
    /// Display groups in their conventional order, empty ones included.
    pub fn groups(&self) -> [(&'static str, &[String]); 7] {
        [
            ("Programming Languages", self.languages.as_slice()),
            ("Frontend Technologies", self.frontend.as_slice()),
            ("Backend Technologies", self.backend.as_slice()),
            ("Cloud Computing", self.cloud.as_slice()),
            ("Cybersecurity", self.cybersecurity.as_slice()),
            ("Databases", self.databases.as_slice()),
            ("DevOps Tools", self.devops.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: serde_json::Value,
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(default)]
    pub badge_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub earning_criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ResumeExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeExperience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

// ── Projects ─────────────────────────────────────────────────────────

/// Project lifecycle state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    #[strum(to_string = "In Progress", serialize = "in-progress")]
    InProgress,
    Planned,
    #[serde(other)]
    Unknown,
}

/// Project difficulty rating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(other)]
    Unknown,
}

/// Solo or team ownership.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TeamType {
    Solo,
    Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "type")]
    pub team_type: TeamType,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Timeline {
    /// Whole days from start to end, or to `today` for ongoing work.
    ///
    /// `None` when a date cannot be read.
    pub fn duration_days(&self, today: NaiveDate) -> Option<i64> {
        let start = parse_day(&self.start_date)?;
        let end = match self.end_date.as_deref() {
            Some(raw) => parse_day(raw)?,
            None => today,
        };
        Some((end - start).num_days())
    }
}

/// Calendar day from `YYYY-MM-DD`, ignoring any time component.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    pub difficulty: Difficulty,
    pub team: Team,
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub completion: Option<u8>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The backend's two project groupings.
///
/// `categories` preserves the JSON object's key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    #[serde(default)]
    pub featured: Vec<Project>,
    #[serde(default)]
    pub categories: IndexMap<String, Vec<Project>>,
}

impl ProjectCollection {
    /// Featured projects followed by each category in order. Projects that
    /// appear in both groupings are yielded twice.
    pub fn iter_all(&self) -> impl Iterator<Item = &Project> {
        self.featured
            .iter()
            .chain(self.categories.values().flat_map(|v| v.iter()))
    }

    /// First project with the given id.
    pub fn find(&self, id: u64) -> Option<&Project> {
        self.iter_all().find(|p| p.id == id)
    }
}

// ── Blog ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    pub likes: u64,
    pub claps: u64,
    pub hearts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: serde_json::Value,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub engagement: EngagementCounts,
}

impl BlogPost {
    /// Parsed publish timestamp. Accepts RFC 3339 or a bare `YYYY-MM-DD`.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostList {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Reaction type sent to the engage endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EngagementKind {
    Liked,
    Clapped,
    Hearted,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EngagementAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngageRequest {
    #[serde(rename = "type")]
    pub kind: EngagementKind,
    pub action: EngagementAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngageResponse {
    pub counts: EngagementCounts,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_json(id: u64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Project {id}"),
            "description": "demo",
            "technologies": ["Rust"],
            "status": status,
            "difficulty": "Advanced",
            "team": { "type": "solo", "size": 1, "contributors": [] }
        })
    }

    #[test]
    fn project_status_round_trips_display_names() {
        let p: Project = serde_json::from_value(project_json(1, "In Progress")).unwrap();
        assert_eq!(p.status, ProjectStatus::InProgress);
        assert_eq!(p.status.to_string(), "In Progress");
        assert_eq!(p.team.team_type, TeamType::Solo);
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let p: Project = serde_json::from_value(project_json(1, "Archived")).unwrap();
        assert_eq!(p.status, ProjectStatus::Unknown);
    }

    #[test]
    fn collection_union_keeps_category_order_and_duplicates() {
        let raw = json!({
            "featured": [project_json(1, "Completed")],
            "categories": {
                "web": [project_json(2, "Planned"), project_json(1, "Completed")],
                "cloud": [project_json(3, "Completed")]
            }
        });
        let c: ProjectCollection = serde_json::from_value(raw).unwrap();
        let ids: Vec<u64> = c.iter_all().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 1, 3]);
        assert_eq!(c.find(3).unwrap().title, "Project 3");
        assert!(c.find(42).is_none());
    }

    #[test]
    fn skills_without_technical_is_malformed() {
        let res = serde_json::from_value::<Skills>(json!({ "soft": [] }));
        assert!(res.is_err());
    }

    #[test]
    fn skills_groups_default_to_empty() {
        let s: Skills =
            serde_json::from_value(json!({ "technical": { "languages": ["Rust"] } })).unwrap();
        assert_eq!(s.technical.languages, vec!["Rust"]);
        assert!(s.technical.devops.is_empty());
        assert!(s.soft.is_empty());
    }

    #[test]
    fn published_at_accepts_date_and_timestamp() {
        let mut post: BlogPost = serde_json::from_value(json!({
            "id": 1, "slug": "a", "title": "A", "publishedDate": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(
            post.published_at().unwrap().to_rfc3339(),
            "2024-03-01T00:00:00+00:00"
        );
        post.published_date = "2024-03-01T10:00:00Z".into();
        assert!(post.published_at().is_some());
        post.published_date = "yesterday".into();
        assert!(post.published_at().is_none());
    }

    #[test]
    fn timeline_duration_uses_today_when_open() {
        let mut t = Timeline {
            start_date: "2024-01-01".into(),
            end_date: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(t.duration_days(today), Some(30));
        t.end_date = Some("2024-01-11T12:00:00Z".into());
        assert_eq!(t.duration_days(today), Some(10));
        t.start_date = "soon".into();
        assert_eq!(t.duration_days(today), None);
    }

    #[test]
    fn engage_request_wire_shape() {
        let req = EngageRequest {
            kind: EngagementKind::Clapped,
            action: EngagementAction::Add,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({ "type": "clapped", "action": "add" })
        );
    }
}

// ── Domain model ──
//
// The wire types from folio-api are the domain types; this module adds the
// `Item` view shared by projects and blog posts so the search predicate can
// treat both the same way.

pub use folio_api::models::{
    About, BlogPost, Certification, Contributor, Difficulty, EngageRequest, EngageResponse,
    EngagementAction, EngagementCounts, EngagementKind, Hero, Project, ProjectCollection,
    ProjectStatus, Resume, Skills, Team, TeamType, Timeline,
};

/// A searchable, read-only record exposed by the backend.
pub trait Item {
    /// Stable identifier, rendered as a string.
    fn id(&self) -> String;

    fn title(&self) -> &str;

    /// Free-text body fields, in search order.
    fn body(&self) -> Vec<&str>;

    /// Tag-like classifiers (technologies, category, tags).
    fn classifiers(&self) -> Vec<&str>;

    /// Lowercased concatenation of title, body and classifiers.
    fn searchable_text(&self) -> String {
        let mut parts = vec![self.title()];
        parts.extend(self.body());
        parts.extend(self.classifiers());
        parts.join(" ").to_lowercase()
    }
}

impl Item for Project {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn classifiers(&self) -> Vec<&str> {
        self.technologies.iter().map(String::as_str).collect()
    }
}

impl Item for BlogPost {
    fn id(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Vec<&str> {
        vec![self.excerpt.as_str(), self.content.as_str()]
    }

    fn classifiers(&self) -> Vec<&str> {
        std::iter::once(self.category.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }
}

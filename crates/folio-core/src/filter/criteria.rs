// ── Filter criteria and typed updates ──

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, ProjectStatus, TeamType};

/// The user's current project filters.
///
/// Every field is independent; an empty field means "any". Instances are
/// only ever replaced wholesale by the store, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub project_type: Option<TeamType>,
    /// Matches items carrying ANY of these technologies.
    pub technologies: Vec<String>,
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    pub search_query: String,
}

impl FilterCriteria {
    /// `true` when nothing would be filtered out.
    pub fn is_empty(&self) -> bool {
        self.project_type.is_none()
            && self.technologies.is_empty()
            && self.status.is_none()
            && self.difficulty.is_none()
            && self.search_query.trim().is_empty()
    }

    /// Lowercased whitespace-separated search terms.
    pub fn search_terms(&self) -> Vec<String> {
        self.search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Copy with one field replaced.
    #[must_use]
    pub fn apply(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::ProjectType(v) => next.project_type = v,
            FilterUpdate::Technologies(v) => next.technologies = v,
            FilterUpdate::Status(v) => next.status = v,
            FilterUpdate::Difficulty(v) => next.difficulty = v,
            FilterUpdate::SearchQuery(v) => next.search_query = v,
        }
        next
    }
}

/// A single-field replacement of [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    ProjectType(Option<TeamType>),
    Technologies(Vec<String>),
    Status(Option<ProjectStatus>),
    Difficulty(Option<Difficulty>),
    SearchQuery(String),
}

impl FilterUpdate {
    /// Name of the field this update replaces.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ProjectType(_) => "project_type",
            Self::Technologies(_) => "technologies",
            Self::Status(_) => "status",
            Self::Difficulty(_) => "difficulty",
            Self::SearchQuery(_) => "search_query",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn whitespace_only_search_counts_as_empty() {
        let c = FilterCriteria::default().apply(FilterUpdate::SearchQuery("   ".into()));
        assert!(c.is_empty());
        assert!(c.search_terms().is_empty());
    }

    #[test]
    fn apply_replaces_only_the_named_field() {
        let base = FilterCriteria::default()
            .apply(FilterUpdate::Status(Some(ProjectStatus::Planned)))
            .apply(FilterUpdate::Technologies(vec!["Rust".into()]));
        let next = base.apply(FilterUpdate::Difficulty(Some(Difficulty::Advanced)));

        assert_eq!(next.status, Some(ProjectStatus::Planned));
        assert_eq!(next.technologies, vec!["Rust".to_owned()]);
        assert_eq!(next.difficulty, Some(Difficulty::Advanced));
        assert_eq!(base.difficulty, None);
    }

    #[test]
    fn search_terms_are_lowercased_tokens() {
        let c = FilterCriteria {
            search_query: "  Cloud   SECURITY ".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(c.search_terms(), vec!["cloud", "security"]);
    }
}

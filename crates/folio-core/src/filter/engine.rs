// ── Filtering engine ──
//
// Pure functions from (collection, criteria) to the ordered visible subset.
// No sorting happens here: output order is input order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::criteria::FilterCriteria;
use crate::model::{Difficulty, Item, Project, ProjectStatus};

/// How a non-empty search query interacts with the other predicates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchPolicy {
    /// Search is one more AND-ed predicate.
    #[default]
    Compose,
    /// A non-empty query alone decides inclusion; type, technology, status
    /// and difficulty are ignored while it is set.
    Override,
}

/// Whether every search term occurs in the item's searchable text.
///
/// An empty term list matches everything.
pub fn matches_search<I: Item + ?Sized>(item: &I, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = item.searchable_text();
    terms.iter().all(|term| text.contains(term.as_str()))
}

/// The four structured predicates, AND-combined.
fn matches_fields(project: &Project, criteria: &FilterCriteria) -> bool {
    if let Some(team_type) = criteria.project_type {
        if project.team.team_type != team_type {
            return false;
        }
    }

    if !criteria.technologies.is_empty()
        && !project
            .technologies
            .iter()
            .any(|t| criteria.technologies.contains(t))
    {
        return false;
    }

    if let Some(status) = criteria.status {
        if project.status != status {
            return false;
        }
    }

    if let Some(difficulty) = criteria.difficulty {
        if project.difficulty != difficulty {
            return false;
        }
    }

    true
}

/// Whether a single project is visible under `criteria`.
pub fn project_matches(project: &Project, criteria: &FilterCriteria, policy: SearchPolicy) -> bool {
    let terms = criteria.search_terms();
    if terms.is_empty() {
        return matches_fields(project, criteria);
    }
    match policy {
        SearchPolicy::Compose => {
            matches_fields(project, criteria) && matches_search(project, &terms)
        }
        SearchPolicy::Override => matches_search(project, &terms),
    }
}

/// Visible subset of `projects`, in input order.
pub fn filter_projects<'a, I>(
    projects: I,
    criteria: &FilterCriteria,
    policy: SearchPolicy,
) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|p| project_matches(p, criteria, policy))
        .collect()
}

// ── Filter options ───────────────────────────────────────────────────

/// Distinct values present in a collection, for offering valid filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub technologies: Vec<String>,
    pub statuses: Vec<ProjectStatus>,
    pub difficulties: Vec<Difficulty>,
}

impl FilterOptions {
    /// Sorted, de-duplicated technologies, statuses and difficulties.
    ///
    /// Technologies sort alphabetically; statuses and difficulties by their
    /// display names. `Unknown` values are left out.
    pub fn from_projects<'a, I>(projects: I) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut technologies = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        let mut difficulties = BTreeSet::new();

        for p in projects {
            technologies.extend(p.technologies.iter().cloned());
            if p.status != ProjectStatus::Unknown {
                statuses.insert(p.status.to_string());
            }
            if p.difficulty != Difficulty::Unknown {
                difficulties.insert(p.difficulty.to_string());
            }
        }

        Self {
            technologies: technologies.into_iter().collect(),
            statuses: statuses.iter().filter_map(|s| s.parse().ok()).collect(),
            difficulties: difficulties.iter().filter_map(|s| s.parse().ok()).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::FilterUpdate;
    use crate::model::TeamType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn project(
        id: u64,
        title: &str,
        status: &str,
        difficulty: &str,
        team: &str,
        tech: &[&str],
    ) -> Project {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "description": format!("{title} description"),
            "technologies": tech,
            "status": status,
            "difficulty": difficulty,
            "team": { "type": team }
        }))
        .unwrap()
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Portfolio Site", "Completed", "Beginner", "solo", &["React"]),
            project(2, "Cloud Storage", "Planned", "Intermediate", "team", &["Go"]),
            project(
                3,
                "Cloud Security Audit Tool",
                "In Progress",
                "Advanced",
                "team",
                &["React", "Go"],
            ),
            project(4, "Packet Sniffer", "Completed", "Advanced", "solo", &["Rust"]),
        ]
    }

    fn ids(result: &[&Project]) -> Vec<u64> {
        result.iter().map(|p| p.id).collect()
    }

    fn with(updates: impl IntoIterator<Item = FilterUpdate>) -> FilterCriteria {
        updates
            .into_iter()
            .fold(FilterCriteria::default(), |c, u| c.apply(u))
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let all = sample();
        let result = filter_projects(&all, &FilterCriteria::default(), SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn duplicates_in_input_are_preserved() {
        let all = sample();
        let doubled: Vec<&Project> = all.iter().chain(all.iter().take(1)).collect();
        let result = filter_projects(doubled, &FilterCriteria::default(), SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn status_filter_partitions_the_collection() {
        let all = sample();
        let criteria = with([FilterUpdate::Status(Some(ProjectStatus::Completed))]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);

        assert!(result.iter().all(|p| p.status == ProjectStatus::Completed));
        let included = ids(&result);
        assert!(
            all.iter()
                .filter(|p| !included.contains(&p.id))
                .all(|p| p.status != ProjectStatus::Completed)
        );
    }

    #[test]
    fn two_item_status_scenario() {
        let all = vec![
            project(1, "A", "Completed", "Beginner", "solo", &["React"]),
            project(2, "B", "Planned", "Beginner", "solo", &["Go"]),
        ];
        let criteria = with([FilterUpdate::Status(Some(ProjectStatus::Completed))]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn technologies_use_any_of_semantics() {
        let all = sample();
        let criteria = with([FilterUpdate::Technologies(vec!["Go".into(), "Rust".into()])]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        // Project 3 has React and Go; Go alone is enough.
        assert_eq!(ids(&result), vec![2, 3, 4]);
    }

    #[test]
    fn project_type_and_difficulty_combine() {
        let all = sample();
        let criteria = with([
            FilterUpdate::ProjectType(Some(TeamType::Solo)),
            FilterUpdate::Difficulty(Some(Difficulty::Advanced)),
        ]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn search_requires_every_term() {
        let all = sample();
        let criteria = with([FilterUpdate::SearchQuery("cloud security".into())]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_technologies() {
        let all = sample();
        let criteria = with([FilterUpdate::SearchQuery("RUST".into())]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn compose_policy_ands_search_with_fields() {
        let all = sample();
        let criteria = with([
            FilterUpdate::Status(Some(ProjectStatus::Planned)),
            FilterUpdate::SearchQuery("cloud".into()),
        ]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Compose);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn override_policy_ignores_fields_while_searching() {
        let all = sample();
        let criteria = with([
            FilterUpdate::Status(Some(ProjectStatus::Planned)),
            FilterUpdate::SearchQuery("cloud".into()),
        ]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Override);
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn override_policy_applies_fields_when_search_is_empty() {
        let all = sample();
        let criteria = with([FilterUpdate::Status(Some(ProjectStatus::Planned))]);
        let result = filter_projects(&all, &criteria, SearchPolicy::Override);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn cleared_criteria_match_initial_result() {
        let all = sample();
        let initial = ids(&filter_projects(
            &all,
            &FilterCriteria::default(),
            SearchPolicy::Compose,
        ));
        let store = crate::filter::FilterStore::new();
        store.update(FilterUpdate::SearchQuery("packet".into()));
        store.update(FilterUpdate::Technologies(vec!["Rust".into()]));
        store.clear();
        let after = ids(&filter_projects(
            &all,
            &store.criteria(),
            SearchPolicy::Compose,
        ));
        assert_eq!(after, initial);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let empty: Vec<Project> = Vec::new();
        let criteria = with([FilterUpdate::SearchQuery("anything".into())]);
        assert!(filter_projects(&empty, &criteria, SearchPolicy::Compose).is_empty());
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let mut all = sample();
        all.push(project(5, "X", "Archived", "Unknown", "solo", &["Go"]));
        let opts = FilterOptions::from_projects(&all);

        assert_eq!(opts.technologies, vec!["Go", "React", "Rust"]);
        assert_eq!(
            opts.statuses,
            vec![
                ProjectStatus::Completed,
                ProjectStatus::InProgress,
                ProjectStatus::Planned
            ]
        );
        assert_eq!(
            opts.difficulties,
            vec![Difficulty::Advanced, Difficulty::Beginner, Difficulty::Intermediate]
        );
    }

    #[test]
    fn search_policy_parses_from_config_strings() {
        assert_eq!("override".parse::<SearchPolicy>().unwrap(), SearchPolicy::Override);
        assert_eq!("Compose".parse::<SearchPolicy>().unwrap(), SearchPolicy::Compose);
        assert_eq!(SearchPolicy::default().to_string(), "compose");
    }
}

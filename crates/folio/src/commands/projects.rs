//! Project command handlers.

use chrono::Utc;
use tabled::Tabled;

use folio_core::model::{Difficulty, Project, ProjectStatus, TeamType};
use folio_core::{FilterUpdate, Portfolio, direct_image_url, highlight};

use crate::cli::{
    DifficultyArg, ProjectFilterArgs, ProjectsArgs, ProjectsCommand, StatusArg, TeamTypeArg,
};
use crate::error::CliError;
use crate::output::{self, RenderOpts, heading};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Technologies")]
    technologies: String,
}

impl ProjectRow {
    fn new(p: &Project, terms: &[String], color: bool) -> Self {
        let title = if color {
            highlight(&p.title, terms, output::mark)
        } else {
            p.title.clone()
        };
        Self {
            id: p.id,
            title,
            status: p.status.to_string(),
            difficulty: p.difficulty.to_string(),
            team: p.team.team_type.to_string(),
            technologies: util::truncate(&util::join_or_dash(&p.technologies), 48),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(p: &Project, color: bool) -> String {
    let team = match p.team.size {
        Some(size) => format!("{} ({size})", p.team.team_type),
        None => p.team.team_type.to_string(),
    };
    let mut lines = vec![
        format!("ID:           {}", p.id),
        format!("Title:        {}", heading(&p.title, color)),
        format!("Status:       {}", p.status),
        format!("Difficulty:   {}", p.difficulty),
        format!("Team:         {team}"),
        format!("Technologies: {}", util::join_or_dash(&p.technologies)),
    ];

    if let Some(ref t) = p.timeline {
        let end = t.end_date.as_deref().unwrap_or("present");
        let days = t
            .duration_days(Utc::now().date_naive())
            .map_or_else(String::new, |d| format!(" ({d} days)"));
        lines.push(format!("Timeline:     {} to {end}{days}", t.start_date));
    }
    if let Some(pct) = p.completion {
        lines.push(format!("Completion:   {pct}%"));
    }
    if let Some(ref url) = p.github_url {
        lines.push(format!("GitHub:       {url}"));
    }
    if let Some(ref url) = p.demo_url {
        lines.push(format!("Demo:         {url}"));
    }
    if let Some(preview) = p.preview_image.as_deref().and_then(direct_image_url) {
        lines.push(format!("Preview:      {preview}"));
    }

    if !p.description.is_empty() {
        lines.push(String::new());
        lines.push(p.description.clone());
    }
    for (label, items) in [
        ("Features", &p.features),
        ("Learning outcomes", &p.learning_outcomes),
        ("Roles", &p.roles),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("\n{}", heading(label, color)));
        lines.extend(items.iter().map(|item| format!("  - {item}")));
    }
    if !p.team.contributors.is_empty() {
        lines.push(format!("\n{}", heading("Contributors", color)));
        for c in &p.team.contributors {
            let role = c.role.as_deref().map_or_else(String::new, |r| format!(" ({r})"));
            lines.push(format!("  - {}{role}", c.name));
        }
    }
    lines.join("\n")
}

// ── Flag translation ────────────────────────────────────────────────

fn team_type(arg: TeamTypeArg) -> TeamType {
    match arg {
        TeamTypeArg::Solo => TeamType::Solo,
        TeamTypeArg::Team => TeamType::Team,
    }
}

fn status(arg: StatusArg) -> ProjectStatus {
    match arg {
        StatusArg::Completed => ProjectStatus::Completed,
        StatusArg::InProgress => ProjectStatus::InProgress,
        StatusArg::Planned => ProjectStatus::Planned,
    }
}

fn difficulty(arg: DifficultyArg) -> Difficulty {
    match arg {
        DifficultyArg::Beginner => Difficulty::Beginner,
        DifficultyArg::Intermediate => Difficulty::Intermediate,
        DifficultyArg::Advanced => Difficulty::Advanced,
    }
}

/// One update per flag that was given.
fn filter_updates(args: ProjectFilterArgs) -> Vec<FilterUpdate> {
    let mut updates = Vec::new();
    if let Some(t) = args.team_type {
        updates.push(FilterUpdate::ProjectType(Some(team_type(t))));
    }
    let technologies: Vec<String> = args
        .tech
        .into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect();
    if !technologies.is_empty() {
        updates.push(FilterUpdate::Technologies(technologies));
    }
    if let Some(s) = args.status {
        updates.push(FilterUpdate::Status(Some(status(s))));
    }
    if let Some(d) = args.difficulty {
        updates.push(FilterUpdate::Difficulty(Some(difficulty(d))));
    }
    if let Some(q) = args.search {
        updates.push(FilterUpdate::SearchQuery(q));
    }
    updates
}

// ── Handler ─────────────────────────────────────────────────────────

fn print_projects(projects: &[Project], terms: &[String], opts: RenderOpts) {
    let out = output::render_list(
        opts.format,
        projects,
        |p| ProjectRow::new(p, terms, opts.color),
        |p| p.id.to_string(),
    );
    output::print_output(&out, opts.quiet);
}

pub async fn handle(
    portfolio: &Portfolio,
    args: ProjectsArgs,
    opts: RenderOpts,
) -> Result<(), CliError> {
    match args.command {
        ProjectsCommand::List(filter) => {
            portfolio.filters().update_many(filter_updates(filter));
            let criteria = portfolio.filters().criteria();
            let projects = portfolio.visible_projects().await?;
            if projects.is_empty() && !criteria.is_empty() && !opts.quiet {
                eprintln!("No projects match the current filters");
            }
            print_projects(&projects, &criteria.search_terms(), opts);
            Ok(())
        }

        ProjectsCommand::Show { id } => {
            let project = portfolio.project(id).await?;
            let out = output::render_single(
                opts.format,
                &project,
                |p| detail(p, opts.color),
                |p| p.id.to_string(),
            );
            output::print_output(&out, opts.quiet);
            Ok(())
        }

        ProjectsCommand::Featured => {
            let projects = portfolio.featured_projects().await?;
            print_projects(&projects, &[], opts);
            Ok(())
        }

        ProjectsCommand::Category { name } => {
            let projects = portfolio.projects_in_category(&name).await?;
            print_projects(&projects, &[], opts);
            Ok(())
        }

        ProjectsCommand::ByType { team_type: t } => {
            let projects = portfolio.projects_of_type(team_type(t)).await?;
            print_projects(&projects, &[], opts);
            Ok(())
        }

        ProjectsCommand::Options => {
            let options = portfolio.filter_options().await?;
            let out = output::render_single(
                opts.format,
                &options,
                |o| {
                    let join = |items: Vec<String>| {
                        if items.is_empty() { "-".into() } else { items.join(", ") }
                    };
                    [
                        format!("Technologies: {}", join(o.technologies.clone())),
                        format!(
                            "Statuses:     {}",
                            join(o.statuses.iter().map(ToString::to_string).collect())
                        ),
                        format!(
                            "Difficulties: {}",
                            join(o.difficulties.iter().map(ToString::to_string).collect())
                        ),
                    ]
                    .join("\n")
                },
                |o| o.technologies.join("\n"),
            );
            output::print_output(&out, opts.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use folio_core::FilterCriteria;

    fn args(argv: &[&str]) -> ProjectFilterArgs {
        use clap::Parser;

        use crate::cli::{Cli, Command};

        let mut full = vec!["folio", "projects", "list"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Projects(ProjectsArgs {
                command: ProjectsCommand::List(a),
            }) => a,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn flags_become_filter_updates() {
        let updates = filter_updates(args(&[
            "--type",
            "team",
            "--tech",
            "Rust, Go",
            "--status",
            "in-progress",
            "-s",
            "cloud",
        ]));
        let criteria = updates
            .into_iter()
            .fold(FilterCriteria::default(), |c, u| c.apply(u));

        assert_eq!(criteria.project_type, Some(TeamType::Team));
        assert_eq!(criteria.technologies, vec!["Rust", "Go"]);
        assert_eq!(criteria.status, Some(ProjectStatus::InProgress));
        assert_eq!(criteria.difficulty, None);
        assert_eq!(criteria.search_query, "cloud");
    }

    #[test]
    fn no_flags_no_updates() {
        assert!(filter_updates(args(&[])).is_empty());
    }

    #[test]
    fn detail_normalizes_preview_image() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Portfolio",
            "technologies": ["React"],
            "status": "Completed",
            "difficulty": "Beginner",
            "team": { "type": "solo" },
            "previewImage": "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view"
        }))
        .unwrap();
        let out = detail(&project, false);
        assert!(out.contains(
            "Preview:      https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/preview"
        ));
        assert!(out.contains("Team:         solo"));
    }
}

// Project endpoints.

use crate::client::PortfolioClient;
use crate::error::Error;
use crate::models::{Project, ProjectCollection, TeamType};
use crate::resource::ResourceKey;

impl PortfolioClient {
    /// Full project collection (featured + categories).
    pub async fn projects(&self) -> Result<ProjectCollection, Error> {
        self.get_cached(ResourceKey::Projects).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, Error> {
        self.get_cached(ResourceKey::FeaturedProjects).await
    }

    /// Single project by id. Not cached.
    pub async fn project(&self, id: u64) -> Result<Project, Error> {
        let id = id.to_string();
        self.get(&["projects", id.as_str()]).await
    }

    /// Projects in one category. Not cached.
    pub async fn projects_by_category(&self, category: &str) -> Result<Vec<Project>, Error> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::MissingParameter("category"));
        }
        self.get(&["projects", "category", category]).await
    }

    /// Solo or team projects. Not cached.
    pub async fn projects_by_type(&self, team_type: TeamType) -> Result<Vec<Project>, Error> {
        let team_type = team_type.to_string();
        self.get(&["projects", "type", team_type.as_str()]).await
    }
}

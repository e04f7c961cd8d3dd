// ── Portfolio facade ──
//
// Single entry point for consumers: owns the API client and the filter
// store, runs the engines over fetched collections, and turns transport
// errors into user-facing `CoreError`s with resource-specific not-found
// messages.

use std::sync::Arc;

use folio_api::{PortfolioClient, ResponseCache, TransportConfig};
use tracing::debug;

use crate::blog::{BlogQuery, Page, filter_posts, paginate};
use crate::config::PortfolioConfig;
use crate::error::CoreError;
use crate::filter::{FilterCriteria, FilterOptions, FilterStore, SearchPolicy, filter_projects};
use crate::model::{
    About, BlogPost, Certification, EngagementAction, EngagementCounts, EngagementKind, Hero,
    Project, ProjectCollection, Resume, Skills, TeamType,
};

/// The portfolio as seen by a view: sections, filtered projects, and the
/// paginated blog.
pub struct Portfolio {
    client: PortfolioClient,
    filters: Arc<FilterStore>,
    search_policy: SearchPolicy,
    per_page: usize,
}

impl Portfolio {
    /// Build the client, cache and an empty filter store from `config`.
    pub fn new(config: &PortfolioConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::with_timeout(config.timeout);
        let cache = Arc::new(ResponseCache::new(config.cache_ttl));
        let client = PortfolioClient::new(config.base_url.as_str(), &transport, cache)?
            .with_retry(config.retry);
        Ok(Self::with_client(client, config))
    }

    /// Use an already-built client; policy and page size come from `config`.
    pub fn with_client(client: PortfolioClient, config: &PortfolioConfig) -> Self {
        Self {
            client,
            filters: Arc::new(FilterStore::new()),
            search_policy: config.search_policy,
            per_page: config.per_page,
        }
    }

    /// Share an existing filter store instead of the private one.
    #[must_use]
    pub fn with_filters(mut self, filters: Arc<FilterStore>) -> Self {
        self.filters = filters;
        self
    }

    pub fn client(&self) -> &PortfolioClient {
        &self.client
    }

    /// The project filter store.
    pub fn filters(&self) -> &Arc<FilterStore> {
        &self.filters
    }

    pub fn search_policy(&self) -> SearchPolicy {
        self.search_policy
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    // ── Sections ─────────────────────────────────────────────────────

    pub async fn hero(&self) -> Result<Hero, CoreError> {
        Ok(self.client.hero().await?)
    }

    pub async fn about(&self) -> Result<About, CoreError> {
        Ok(self.client.about().await?)
    }

    pub async fn skills(&self) -> Result<Skills, CoreError> {
        Ok(self.client.skills().await?)
    }

    pub async fn certifications(&self) -> Result<Vec<Certification>, CoreError> {
        Ok(self.client.certifications().await?)
    }

    pub async fn certificates(&self) -> Result<Vec<Certification>, CoreError> {
        Ok(self.client.certificates().await?)
    }

    pub async fn resume(&self) -> Result<Resume, CoreError> {
        Ok(self.client.resume().await?)
    }

    // ── Projects ─────────────────────────────────────────────────────

    pub async fn projects(&self) -> Result<ProjectCollection, CoreError> {
        self.client
            .projects()
            .await
            .map_err(|e| CoreError::from(e).on_not_found(|| "Projects not found".into()))
    }

    pub async fn project(&self, id: u64) -> Result<Project, CoreError> {
        self.client.project(id).await.map_err(|e| {
            CoreError::from(e).on_not_found(|| format!("Project with ID {id} not found"))
        })
    }

    pub async fn projects_in_category(&self, category: &str) -> Result<Vec<Project>, CoreError> {
        self.client
            .projects_by_category(category)
            .await
            .map_err(|e| {
                CoreError::from(e)
                    .on_not_found(|| format!("No projects found in category: {category}"))
            })
    }

    pub async fn projects_of_type(&self, team_type: TeamType) -> Result<Vec<Project>, CoreError> {
        self.client
            .projects_by_type(team_type)
            .await
            .map_err(|e| CoreError::from(e).on_not_found(|| format!("No {team_type} projects found")))
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, CoreError> {
        self.client
            .featured_projects()
            .await
            .map_err(|e| CoreError::from(e).on_not_found(|| "No featured projects found".into()))
    }

    /// Projects visible under the store's current criteria.
    pub async fn visible_projects(&self) -> Result<Vec<Project>, CoreError> {
        let criteria = self.filters.criteria();
        self.projects_matching(&criteria).await
    }

    /// Projects visible under explicit criteria, ignoring the store.
    pub async fn projects_matching(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Project>, CoreError> {
        let collection = self.projects().await?;
        let visible: Vec<Project> =
            filter_projects(collection.iter_all(), criteria, self.search_policy)
                .into_iter()
                .cloned()
                .collect();
        debug!(
            total = collection.iter_all().count(),
            visible = visible.len(),
            policy = %self.search_policy,
            "filtered projects"
        );
        Ok(visible)
    }

    /// Technologies, statuses and difficulties present in the collection.
    pub async fn filter_options(&self) -> Result<FilterOptions, CoreError> {
        let collection = self.projects().await?;
        Ok(FilterOptions::from_projects(collection.iter_all()))
    }

    // ── Blog ─────────────────────────────────────────────────────────

    /// One page of posts under `query`, newest first.
    pub async fn blog_page(&self, query: &BlogQuery) -> Result<Page<BlogPost>, CoreError> {
        let posts = self.client.blog_posts().await?;
        let visible: Vec<BlogPost> = filter_posts(&posts, query).into_iter().cloned().collect();
        Ok(paginate(visible, query.page, self.per_page))
    }

    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, CoreError> {
        self.client
            .blog_post(slug)
            .await
            .map_err(|e| CoreError::from(e).on_not_found(|| format!("Blog post not found: {slug}")))
    }

    pub async fn blog_categories(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.client.blog_categories().await?)
    }

    pub async fn blog_tags(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.client.blog_tags().await?)
    }

    /// Add or remove a reaction on a post.
    pub async fn engage(
        &self,
        post_id: &str,
        kind: EngagementKind,
        action: EngagementAction,
    ) -> Result<EngagementCounts, CoreError> {
        self.client
            .engage(post_id, kind, action)
            .await
            .map_err(|e| CoreError::from(e).on_not_found(|| format!("Blog post not found: {post_id}")))
    }
}

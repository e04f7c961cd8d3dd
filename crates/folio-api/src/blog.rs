// Blog endpoints.

use tracing::debug;

use crate::client::PortfolioClient;
use crate::error::Error;
use crate::models::{
    BlogPost, BlogPostList, EngageRequest, EngageResponse, EngagementAction, EngagementCounts,
    EngagementKind,
};
use crate::resource::ResourceKey;

impl PortfolioClient {
    /// Every published post, in backend order.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, Error> {
        let list: BlogPostList = self.get_cached(ResourceKey::BlogPosts).await?;
        Ok(list.posts)
    }

    /// Single post by slug. Not cached.
    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, Error> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(Error::MissingParameter("slug"));
        }
        self.get(&["blog", "posts", slug]).await
    }

    pub async fn blog_categories(&self) -> Result<Vec<String>, Error> {
        self.get_cached(ResourceKey::BlogCategories).await
    }

    pub async fn blog_tags(&self) -> Result<Vec<String>, Error> {
        self.get_cached(ResourceKey::BlogTags).await
    }

    /// Add or remove a reaction on a post and return the new counts.
    ///
    /// The cached post list is invalidated so the next listing shows the
    /// updated engagement.
    pub async fn engage(
        &self,
        post_id: &str,
        kind: EngagementKind,
        action: EngagementAction,
    ) -> Result<EngagementCounts, Error> {
        let post_id = post_id.trim();
        if post_id.is_empty() {
            return Err(Error::MissingParameter("post id"));
        }
        let body = EngageRequest { kind, action };
        let resp: EngageResponse = self
            .post(&["blog", "posts", post_id, "engage"], &body)
            .await?;
        debug!(post_id, %kind, %action, "engagement recorded");
        self.cache().invalidate(ResourceKey::BlogPosts);
        Ok(resp.counts)
    }
}

// ── Cacheable resource keys ──
//
// The closed set of collection endpoints whose payloads are shared across
// views. Parameterized lookups (single project, single post, category
// listings) are never cached and therefore have no key.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A named resource collection served by the portfolio API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKey {
    Hero,
    About,
    Skills,
    Projects,
    FeaturedProjects,
    Certifications,
    Certificates,
    Resume,
    BlogPosts,
    BlogCategories,
    BlogTags,
}

impl ResourceKey {
    /// Path segments below the API base URL.
    pub fn segments(self) -> &'static [&'static str] {
        match self {
            Self::Hero => &["hero"],
            Self::About => &["about"],
            Self::Skills => &["skills"],
            Self::Projects => &["projects"],
            Self::FeaturedProjects => &["projects", "featured"],
            Self::Certifications => &["certifications"],
            Self::Certificates => &["certificates"],
            Self::Resume => &["resume"],
            Self::BlogPosts => &["blog", "posts"],
            Self::BlogCategories => &["blog", "categories"],
            Self::BlogTags => &["blog", "tags"],
        }
    }

    /// Relative path, e.g. `"blog/posts"`.
    pub fn path(self) -> String {
        self.segments().join("/")
    }
}

// folio-core: domain layer between folio-api and the CLI.
//
// Owns the project filter state, the filtering and blog listing engines,
// media URL normalization, and the `Portfolio` facade that ties them to the
// API client.

pub mod blog;
pub mod config;
pub mod error;
pub mod filter;
pub mod media;
pub mod model;
pub mod portfolio;

// ── Primary re-exports ──────────────────────────────────────────────
pub use blog::{BlogQuery, DEFAULT_PER_PAGE, Page, filter_posts, highlight, paginate};
pub use config::PortfolioConfig;
pub use error::CoreError;
pub use filter::{
    FilterCriteria, FilterOptions, FilterStore, FilterSubscription, FilterUpdate, SearchPolicy,
    filter_projects,
};
pub use media::{direct_image_url, is_valid_url, secure_url};
pub use model::Item;
pub use portfolio::Portfolio;

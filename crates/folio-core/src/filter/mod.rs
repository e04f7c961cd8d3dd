// ── Project filtering ──
//
// `FilterStore` owns the criteria, `engine` turns (collection, criteria)
// into the visible subset.

mod criteria;
pub mod engine;
mod store;

pub use criteria::{FilterCriteria, FilterUpdate};
pub use engine::{FilterOptions, SearchPolicy, filter_projects, matches_search, project_matches};
pub use store::{FilterStore, FilterStream, FilterSubscription};

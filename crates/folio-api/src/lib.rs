//! Async client for the portfolio and blog REST API.
//!
//! - **[`PortfolioClient`]**: `reqwest`-backed client. Collection endpoints
//!   (hero, about, skills, projects, certifications, resume, blog listings)
//!   are served through a shared [`ResponseCache`]; parameterized lookups go
//!   straight to the network.
//! - **[`ResponseCache`]**: TTL cache keyed by the closed [`ResourceKey`]
//!   enum, with an injectable [`Clock`].
//! - **[`RetryPolicy`]**: bounded exponential backoff for reads, off by
//!   default.
//! - **[`Error`]**: transport/status/payload taxonomy with
//!   [`Error::user_message`] as the single user-facing translator.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod resource;
pub mod retry;
pub mod transport;

mod blog;
mod projects;
mod sections;

pub use cache::{Clock, DEFAULT_TTL, ManualClock, ResponseCache, SystemClock};
pub use client::{DEFAULT_BASE_URL, PortfolioClient};
pub use error::Error;
pub use resource::ResourceKey;
pub use retry::RetryPolicy;
pub use transport::TransportConfig;

//! CLI configuration: thin wrapper around `folio_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-url, --timeout, etc.).

use folio_core::{PortfolioConfig, SearchPolicy};

use crate::cli::{GlobalOpts, SearchPolicyArg};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use folio_config::{
    Config, DEFAULT_API_URL, Profile, config_path, load_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `PortfolioConfig` from the config file, the active profile and
/// flag overrides.
///
/// A profile named explicitly with `--profile` must exist. Otherwise a
/// missing profile falls back to `--api-url` or the local default origin.
pub fn resolve_portfolio_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<PortfolioConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let mut resolved = match config.profile(&profile_name) {
        Some(profile) => folio_config::profile_to_portfolio_config(profile, &config.defaults)?,
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(config),
            });
        }
        None => folio_config::defaults_to_portfolio_config(
            global.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
            &config.defaults,
        )?,
    };

    // Flags (and their env vars) beat the profile.
    if let Some(ref url) = global.api_url {
        resolved.base_url = folio_config::parse_api_url(url)?;
    }
    if let Some(secs) = global.timeout {
        resolved.timeout = folio_config::parse_timeout(secs)?;
    }
    if let Some(retries) = global.retries {
        resolved.retry = folio_config::parse_retries(retries)?;
    }
    if let Some(policy) = global.search_policy {
        resolved.search_policy = match policy {
            SearchPolicyArg::Compose => SearchPolicy::Compose,
            SearchPolicyArg::Override => SearchPolicy::Override,
        };
    }

    tracing::debug!(
        profile = %profile_name,
        api_url = %resolved.base_url,
        policy = %resolved.search_policy,
        "resolved portfolio config"
    );
    Ok(resolved)
}

/// Comma-separated profile names, or `(none)`.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config
            .profiles
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

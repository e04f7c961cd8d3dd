//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output::{self, RenderOpts};

// ── Helpers ─────────────────────────────────────────────────────────

fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# failed to render config: {e}"))
}

fn invalid(field: &str, reason: &str) -> CliError {
    CliError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Validate and store one profile value.
fn set_value(profile: &mut Profile, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "api_url" | "api-url" => {
            folio_config::parse_api_url(&value)?;
            profile.api_url = value;
        }
        "timeout" => {
            let secs = value
                .parse()
                .map_err(|_| invalid("timeout", "must be a number (seconds)"))?;
            folio_config::parse_timeout(secs)?;
            profile.timeout = Some(secs);
        }
        "cache_ttl" | "cache-ttl" => {
            folio_config::parse_ttl(&value)?;
            profile.cache_ttl = Some(value);
        }
        "retries" => {
            let retries = value
                .parse()
                .map_err(|_| invalid("retries", "must be a non-negative number"))?;
            folio_config::parse_retries(retries)?;
            profile.retries = Some(retries);
        }
        "search_policy" | "search-policy" => {
            folio_config::parse_search_policy(&value)?;
            profile.search_policy = Some(value.trim().to_lowercase());
        }
        "per_page" | "per-page" => {
            let per_page: usize = value
                .parse()
                .map_err(|_| invalid("per_page", "must be a positive number"))?;
            if per_page == 0 {
                return Err(invalid("per_page", "must be a positive number"));
            }
            profile.per_page = Some(per_page);
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: api_url, timeout, cache_ttl, \
                     retries, search_policy, per_page"
                ),
            });
        }
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts, opts: RenderOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { name, url, force } => {
            folio_config::parse_api_url(&url)?;
            let path = config::config_path();
            let mut cfg = config::load_config()?;
            if cfg.profiles.contains_key(&name) && !force {
                return Err(CliError::ProfileExists {
                    name,
                    path: path.display().to_string(),
                });
            }
            cfg.profiles.insert(name.clone(), Profile::new(url));
            cfg.default_profile = Some(name.clone());
            let written = config::save_config(&cfg)?;
            if !opts.quiet {
                eprintln!("✓ Configuration written to {}", written.display());
                eprintln!("  Active profile: {name}");
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(opts.format, &cfg, format_config, |_| {
                "config".into()
            });
            output::print_output(&out, opts.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), opts.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            let profile = cfg
                .profiles
                .entry(profile_name.clone())
                .or_insert_with(|| Profile::new(config::DEFAULT_API_URL));
            set_value(profile, &key, value)?;
            config::save_config(&cfg)?;
            if !opts.quiet {
                eprintln!("✓ Set {key} on profile '{profile_name}'");
            }
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !opts.quiet {
                eprintln!("✓ Default profile set to '{name}'");
            }
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: folio config init");
            } else {
                let lines: Vec<String> = cfg
                    .profiles
                    .iter()
                    .map(|(name, p)| {
                        let marker = if name == default { " *" } else { "" };
                        format!("{name}{marker}\t{}", p.api_url)
                    })
                    .collect();
                output::print_output(&lines.join("\n"), opts.quiet);
            }
            Ok(())
        }
    }
}

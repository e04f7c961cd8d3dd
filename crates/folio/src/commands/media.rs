//! Media URL utilities. No backend needed.

use folio_core::{direct_image_url, is_valid_url, secure_url};

use crate::cli::{MediaArgs, MediaCommand};
use crate::error::CliError;
use crate::output::{self, RenderOpts};

pub fn handle(args: MediaArgs, opts: RenderOpts) -> Result<(), CliError> {
    match args.command {
        MediaCommand::Normalize { url, embed } => {
            let normalized = if embed {
                secure_url(&url)
            } else {
                direct_image_url(&url)
            };
            let normalized = normalized.ok_or_else(|| CliError::Validation {
                field: "url".into(),
                reason: format!("'{url}' is not a usable image URL"),
            })?;
            let out = output::render_single(
                opts.format,
                &serde_json::json!({ "input": url, "url": normalized }),
                |_| normalized.clone(),
                |_| normalized.clone(),
            );
            output::print_output(&out, opts.quiet);
            Ok(())
        }

        MediaCommand::Check { url } => {
            if is_valid_url(&url) {
                if !opts.quiet {
                    eprintln!("✓ {url}");
                }
                Ok(())
            } else {
                Err(CliError::Validation {
                    field: "url".into(),
                    reason: format!("'{url}' is not a valid URL"),
                })
            }
        }
    }
}

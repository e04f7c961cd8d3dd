//! Command dispatch: bridges CLI args -> `Portfolio` calls -> output formatting.

pub mod blog;
pub mod config_cmd;
pub mod media;
pub mod projects;
pub mod sections;
pub mod util;

use folio_core::Portfolio;

use crate::cli::Command;
use crate::error::CliError;
use crate::output::RenderOpts;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    portfolio: &Portfolio,
    opts: RenderOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Hero => sections::hero(portfolio, opts).await,
        Command::About => sections::about(portfolio, opts).await,
        Command::Skills => sections::skills(portfolio, opts).await,
        Command::Resume => sections::resume(portfolio, opts).await,
        Command::Certifications => sections::certifications(portfolio, opts, false).await,
        Command::Certificates => sections::certifications(portfolio, opts, true).await,
        Command::Projects(args) => projects::handle(portfolio, args, opts).await,
        Command::Blog(args) => blog::handle(portfolio, args, opts).await,
        // Handled before a backend is configured
        Command::Media(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

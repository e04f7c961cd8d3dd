mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_core::Portfolio;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::RenderOpts;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "folio", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = config::load_config()?;
            let opts = RenderOpts::resolve(&cli.global, &cfg);

            match cmd {
                // Config and media commands don't need a backend
                Command::Config(args) => commands::config_cmd::handle(args, &cli.global, opts),
                Command::Media(args) => commands::media::handle(args, opts),

                cmd => {
                    let portfolio_config = config::resolve_portfolio_config(&cli.global, &cfg)?;
                    let portfolio = Portfolio::new(&portfolio_config)?;

                    tracing::debug!(command = ?cmd, "dispatching command");
                    commands::dispatch(cmd, &portfolio, opts).await
                }
            }
        }
    }
}

//! HomeScout terminal client - composition root.
//!
//! 1. Parse CLI args and load configuration from TOML
//! 2. Install tracing at the configured level
//! 3. Load the listing catalog (a JSON file, or the bundled sample)
//! 4. Run the chat loop over stdin/stdout

mod cli;
mod repl;

use clap::Parser;
use homescout_chat::ChatSession;
use homescout_core::logging::init_tracing;
use homescout_core::{Catalog, HomeScoutConfig};

use cli::CliArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists, so its own log lines are dropped.
    let config_file = args.resolve_config_path();
    let config = HomeScoutConfig::load_or_default(&config_file);

    init_tracing(&args.resolve_log_level(&config.general.log_level));
    tracing::info!("Starting HomeScout v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let catalog = match args.catalog {
        Some(ref path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };

    let mut session = ChatSession::new(catalog, &config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock())?;

    tracing::info!("HomeScout exited");
    Ok(())
}

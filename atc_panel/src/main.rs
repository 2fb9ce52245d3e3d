pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod listing;
pub(crate) mod panel;

use std::io::{self, Write};

use clap::Parser;
use taxi_instructions::{AtcRouter, OperationKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::PanelConfig,
    error::ApplicationResult,
    listing::{write_catalog_json, write_catalog_table},
    panel::{PanelDisplay, PromptReader, run_interactive},
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(long, short)]
    /// Request instructions for this airport once, without opening the panel
    airport: Option<String>,
    #[clap(long, short, requires = "airport")]
    /// "departing" or "landing". Anything else gives an acknowledgment only
    operation: Option<String>,
    #[clap(long, short, conflicts_with = "airport")]
    /// Print the airports with known taxi procedures
    list: bool,
    #[clap(long, requires = "list")]
    /// Print the airport list as JSON
    json: bool,
    #[clap(long, short, conflicts_with_all = ["list", "airport"])]
    /// Resets the config file to the bundled default
    clean_config: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handles `--list` and one-shot `--airport` requests. These never touch the
/// config file. Returns false when the interactive panel should open instead.
fn run_without_panel<W: Write>(
    cli: &Cli,
    router: &AtcRouter<'_>,
    writer: &mut W,
) -> ApplicationResult<bool> {
    if cli.list {
        if cli.json {
            write_catalog_json(router.catalog(), writer)?;
        } else {
            write_catalog_table(router.catalog(), writer)?;
        }
        return Ok(true);
    }

    if let Some(airport) = &cli.airport {
        let operation = OperationKind::from_input(cli.operation.as_deref());
        info!(airport, operation = operation.as_str(), "One-shot request");
        writeln!(writer, "{}", router.route(airport, operation))?;
        return Ok(true);
    }

    Ok(false)
}

fn run(cli: Cli) -> ApplicationResult<()> {
    let router = AtcRouter::default();
    if run_without_panel(&cli, &router, &mut io::stdout().lock())? {
        return Ok(());
    }

    let config = PanelConfig::load(cli.clean_config)?;
    debug!(?config, "Loaded panel config");
    let mut input = PromptReader::new(io::stdin().lock(), io::stdout());
    let mut display = PanelDisplay::new(io::stdout(), config.title.clone());
    run_interactive(
        &router,
        &mut input,
        &mut display,
        &config.idle_message,
        config.click_hint(),
    );
    Ok(())
}

fn main() -> ApplicationResult<()> {
    init_logging();
    run(Cli::parse())
}

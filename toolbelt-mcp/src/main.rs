//! Toolbelt MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr.
//!
//! Tools:
//! - convert_units: Convert length, weight, volume, temperature
//! - list_units: List categories and unit symbols
//! - convert_currency: Convert between currencies at static rates
//! - list_currencies: List supported currency codes
//!
//! Methods beyond the MCP core:
//! - tools/search: Filter tools by text query and category

mod config;
mod server;

use std::io::{self, BufRead, IsTerminal, Write};
use toolbelt_plugin::ToolRegistry;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn create_registry() -> ToolRegistry {
    toolbelt_units::load_units_tools(ToolRegistry::new())
}

fn main() {
    let (config, warnings) = ServerConfig::from_env();
    init_logging(&config);
    for warning in warnings {
        warn!("{}", warning);
    }

    let server = Server::new(create_registry(), config.clone());

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "toolbelt MCP server started");
    info!(
        tools = server.registry().len(),
        display_places = config.display_places,
        stdin_is_terminal = io::stdin().is_terminal(),
        "server ready, waiting for requests"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received request");

                let Some(response) = server.process_line(line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!(error = %e, "failed to flush stdout");
                    break;
                }
                debug!(bytes = response.len(), "sent response");
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}

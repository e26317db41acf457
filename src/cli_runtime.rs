use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use catalog::gateway::RemoteCatalogGateway;
use catalog::settings::{ClientSettings, SettingsStore};

use crate::Commands;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Content catalog client", long_about = None)]
pub(crate) struct Cli {
    /// API base URL for this invocation (overrides settings)
    #[arg(long, global = true, env = "CATALOG_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Write TUI logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            catalog::tui::run_with_options(catalog::tui::TuiRunOptions {
                base_url: cli.base_url,
                log_file: cli.log_file,
            })?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!(
                    "`--log-file` is only supported when running the TUI (no subcommand)"
                );
            }
            catalog::logging::init_stderr();
            let ctx = CliContext::load(cli.base_url)?;
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}

pub(crate) struct CliContext {
    pub(crate) store: SettingsStore,
    pub(crate) settings: ClientSettings,
    base_url_override: Option<String>,
}

impl CliContext {
    fn load(base_url_override: Option<String>) -> Result<Self> {
        let store = SettingsStore::discover()?;
        let settings = store.load()?;
        Ok(Self {
            store,
            settings,
            base_url_override,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or(&self.settings.base_url)
    }

    pub(crate) fn gateway(&self) -> Result<RemoteCatalogGateway> {
        RemoteCatalogGateway::new(self.base_url(), self.settings.timeout())
            .context("configure catalog gateway")
    }
}

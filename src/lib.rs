use anyhow::Result;
use tracing::{debug, info};

pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;

use cli::{Cli, Commands};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
}

impl AppCtx {
    pub fn new(cli: &Cli) -> Result<Self> {
        let settings_store: Box<dyn SettingsStore> = match &cli.settings {
            Some(path) => Box::new(JsonFileSettingsStore::new(path.clone())),
            None => Box::new(FileSettingsStore::new()?),
        };
        Ok(Self { settings_store })
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let ctx = AppCtx::new(&cli)?;
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        settings = ?cli.settings,
        "Starting"
    );

    match cli.command {
        Commands::Render(args) => commands::render::handle(args, &ctx).await,
        Commands::Vcard(args) => commands::vcard::handle(args).await,
        Commands::Preview(args) => commands::preview::handle(args, &ctx).await,
        Commands::Interactive => {
            info!("Interactive session, type `help` for usage");
            commands::interactive::handle(&ctx).await
        }
        Commands::Config(args) => commands::config::handle(args, &ctx).await,
    }
}

use anyhow::Result;
use clap::Parser;

use vcard_qr_cli::settings::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = vcard_qr_cli::cli::Cli::parse();
    let _guard = init_logger(cli.verbose)?;
    vcard_qr_cli::run(cli).await?;
    Ok(())
}

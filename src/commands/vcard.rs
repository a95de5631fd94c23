use anyhow::Result;

use crate::{cli::ContactArgs, commands::resolve_contact};

pub async fn handle(args: ContactArgs) -> Result<()> {
    let contact = resolve_contact(&args)?;
    print!("{}", vcard_qr::encode(&contact));
    Ok(())
}

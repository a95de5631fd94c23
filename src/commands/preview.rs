use anyhow::Result;
use vcard_qr::render::render_to_terminal;

use crate::{cli::PreviewArgs, commands::resolve_contact, AppCtx};

pub async fn handle(args: PreviewArgs, ctx: &AppCtx) -> Result<()> {
    let contact = resolve_contact(&args.contact)?;
    let ecc = match args.ecc {
        Some(ecc) => ecc,
        None => ctx.settings_store.load()?.error_correction,
    };
    println!("{}", render_to_terminal(&vcard_qr::encode(&contact), ecc)?);
    Ok(())
}

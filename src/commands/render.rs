use anyhow::{Context, Result};
use tracing::info;
use vcard_qr::export::{suggested_file_name, write_png};

use crate::{
    cli::RenderArgs,
    commands::{build_request, resolve_contact},
    AppCtx,
};

pub async fn handle(args: RenderArgs, ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    let contact = resolve_contact(&args.contact)?;
    let output = match args.output {
        Some(path) => path,
        None => {
            let name = suggested_file_name(&contact.full_name);
            match &settings.output_dir {
                Some(dir) => dir.join(name),
                None => name.into(),
            }
        }
    };

    let request = build_request(contact, &args.style, &settings);
    let rendered = vcard_qr::get_renderer()
        .render(&request)
        .context("Unable to render the QR code")?;
    info!(
        "Rendered {0}x{0} modules at {1} px per module ({2} error correction)",
        rendered.module_count, rendered.pixels_per_module, request.error_correction
    );

    let path = write_png(&output, &rendered.png)?;
    info!("QR code saved to {} ✅", path.display());
    Ok(())
}

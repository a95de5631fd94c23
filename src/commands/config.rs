use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, settings::Settings, AppCtx};

pub async fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    let mut settings = ctx.settings_store.load()?;
    let show = args.show;
    let changed = apply(&mut settings, args);

    if changed {
        ctx.settings_store.save(&settings)?;
        info!("Configuration saved successfully ✅");
    }
    if show || !changed {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    }
    Ok(())
}

/// Returns whether anything was set.
fn apply(settings: &mut Settings, args: ConfigArgs) -> bool {
    let mut changed = false;
    if let Some(dark) = args.dark {
        settings.dark_color = dark;
        changed = true;
    }
    if let Some(light) = args.light {
        settings.light_color = light;
        changed = true;
    }
    if args.transparent || args.opaque {
        settings.transparent_background = args.transparent;
        changed = true;
    }
    if let Some(size) = args.size {
        settings.target_pixel_size = size;
        changed = true;
    }
    if let Some(ecc) = args.ecc {
        settings.error_correction = ecc;
        changed = true;
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = Some(dir);
        changed = true;
    }
    changed
}

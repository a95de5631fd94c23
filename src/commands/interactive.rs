use anyhow::{bail, Result};
use std::{path::PathBuf, time::Duration};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use vcard_qr::{
    encode,
    export::{suggested_file_name, write_png},
    render::render_to_terminal,
    QrRenderService, RenderRequest,
};

use crate::{
    services::{session::starter_contact, Debounce, Session, SessionCommand},
    AppCtx,
};

const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

const HELP: &str = "\
Edit with `field=value`, one per line:
  last, first, full, role, phone, email, website   contact fields
  dark, light                                       colors (RRGGBB or AARRGGBB)
  transparent                                       true / false
  size                                              target size in pixels
  ecc                                               L, M, Q or H
Commands:
  show          print the current preview
  save [FILE]   export the latest PNG
  help          print this message
  quit          leave the session";

pub async fn handle(ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    let renderer = vcard_qr::get_renderer();
    let mut session = Session::new(RenderRequest {
        contact: starter_contact(),
        dark_color: settings.dark_color.clone(),
        light_color: settings.light_color.clone(),
        transparent_background: settings.transparent_background,
        target_pixel_size: settings.target_pixel_size,
        error_correction: settings.error_correction,
    });
    let mut debounce = Debounce::new(DEBOUNCE_DELAY);
    let mut lines = BufReader::new(stdin()).lines();

    println!("{HELP}");
    refresh(&mut session, &renderer);
    show(&session);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match line.parse::<SessionCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        warn!("{e}");
                        continue;
                    }
                };
                match command {
                    SessionCommand::Edit(field, value) => match session.apply(field, &value) {
                        Ok(()) => debounce.restart(),
                        Err(e) => warn!("{e:#}"),
                    },
                    SessionCommand::Show => show(&session),
                    SessionCommand::Save(path) => {
                        if debounce.is_pending() {
                            debounce.cancel();
                            refresh(&mut session, &renderer);
                        }
                        if let Err(e) = save(&session, path) {
                            warn!("{e:#}");
                        }
                    }
                    SessionCommand::Help => println!("{HELP}"),
                    SessionCommand::Quit => break,
                    SessionCommand::Empty => {}
                }
            }
            () = debounce.expired() => {
                refresh(&mut session, &renderer);
                show(&session);
            }
        }
    }

    info!("Bye 👋");
    Ok(())
}

fn refresh(session: &mut Session, renderer: &QrRenderService) {
    match session.refresh(renderer) {
        Ok(rendered) => info!(
            "Preview updated: {0}x{0} modules at {1} px per module",
            rendered.module_count, rendered.pixels_per_module
        ),
        Err(e) => warn!("Unable to render a preview: {e}"),
    }
}

fn show(session: &Session) {
    let request = session.request();
    match render_to_terminal(
        &encode(&request.contact.trimmed()),
        request.error_correction,
    ) {
        Ok(preview) => println!("{preview}"),
        Err(e) => warn!("Unable to render a preview: {e}"),
    }
}

fn save(session: &Session, path: Option<PathBuf>) -> Result<()> {
    let Some(rendered) = session.preview().latest() else {
        bail!("Nothing to save yet: no preview could be rendered");
    };
    let path = path.unwrap_or_else(|| {
        suggested_file_name(&session.request().contact.full_name).into()
    });
    let path = write_png(&path, &rendered.png)?;
    info!("QR code saved to {} ✅", path.display());
    Ok(())
}

use anyhow::Result;
use vcard_qr::{ContactRecord, RenderRequest};

use crate::{
    cli::{ContactArgs, StyleArgs},
    settings::Settings,
};

pub mod config;
pub mod interactive;
pub mod preview;
pub mod render;
pub mod vcard;

/// Start from `--contact` (if any) and let each given flag replace its field.
pub fn resolve_contact(args: &ContactArgs) -> Result<ContactRecord> {
    let mut contact = match &args.contact {
        Some(path) => ContactRecord::load(path)?,
        None => ContactRecord::default(),
    };
    let overrides = [
        (&args.last, &mut contact.last_name),
        (&args.first, &mut contact.first_name),
        (&args.full, &mut contact.full_name),
        (&args.role, &mut contact.role),
        (&args.phone, &mut contact.phone),
        (&args.email, &mut contact.email),
        (&args.website, &mut contact.website),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            field.clone_from(value);
        }
    }
    Ok(contact.trimmed())
}

/// Style flags win over the stored settings.
pub fn build_request(contact: ContactRecord, style: &StyleArgs, settings: &Settings) -> RenderRequest {
    let transparent_background = if style.transparent {
        true
    } else if style.opaque {
        false
    } else {
        settings.transparent_background
    };
    RenderRequest {
        contact,
        dark_color: style.dark.clone().unwrap_or_else(|| settings.dark_color.clone()),
        light_color: style.light.clone().unwrap_or_else(|| settings.light_color.clone()),
        transparent_background,
        target_pixel_size: style.size.unwrap_or(settings.target_pixel_size),
        error_correction: style.ecc.unwrap_or(settings.error_correction),
    }
}

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};
use vcard_qr::{
    ContactRecord, EcLevel, QrRenderService, RenderError, RenderRequest, RenderedQr,
    TargetPixelSize,
};

pub const STARTER_PHONE: &str = "+316";
pub const STARTER_EMAIL: &str = "@example.nl";
pub const STARTER_WEBSITE: &str = "https://www.example.nl/";

/// Contact the interactive session opens with.
pub fn starter_contact() -> ContactRecord {
    ContactRecord {
        phone: STARTER_PHONE.to_owned(),
        email: STARTER_EMAIL.to_owned(),
        website: STARTER_WEBSITE.to_owned(),
        ..Default::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Last,
    First,
    Full,
    Role,
    Phone,
    Email,
    Website,
    Dark,
    Light,
    Transparent,
    Size,
    Ecc,
}

impl FromStr for Field {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "last" => Field::Last,
            "first" => Field::First,
            "full" => Field::Full,
            "role" => Field::Role,
            "phone" => Field::Phone,
            "email" => Field::Email,
            "website" => Field::Website,
            "dark" => Field::Dark,
            "light" => Field::Light,
            "transparent" => Field::Transparent,
            "size" => Field::Size,
            "ecc" => Field::Ecc,
            other => bail!("Unknown field `{other}`, type `help` for the list of fields"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Edit(Field, String),
    Show,
    Save(Option<PathBuf>),
    Help,
    Quit,
    Empty,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if let Some((field, value)) = line.split_once('=') {
            return Ok(SessionCommand::Edit(field.parse()?, value.to_owned()));
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));
        Ok(match verb {
            "" => SessionCommand::Empty,
            "show" => SessionCommand::Show,
            "save" if rest.is_empty() => SessionCommand::Save(None),
            "save" => SessionCommand::Save(Some(PathBuf::from(rest))),
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => bail!("Unknown command `{other}`, type `help` for usage"),
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("Expected true or false, got `{other}`"),
    }
}

/// Most recent successful render, held until superseded or exported.
#[derive(Debug, Default)]
pub struct PreviewState {
    last: Option<RenderedQr>,
}

impl PreviewState {
    pub fn latest(&self) -> Option<&RenderedQr> {
        self.last.as_ref()
    }
}

/// Editable render request plus its latest preview.
#[derive(Debug)]
pub struct Session {
    request: RenderRequest,
    preview: PreviewState,
}

impl Session {
    pub fn new(request: RenderRequest) -> Self {
        Self {
            request,
            preview: PreviewState::default(),
        }
    }

    pub fn request(&self) -> &RenderRequest {
        &self.request
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Apply one edit. Contact fields take the raw value; trimming happens at render.
    pub fn apply(&mut self, field: Field, value: &str) -> Result<()> {
        let contact = &mut self.request.contact;
        match field {
            Field::Last => contact.last_name = value.to_owned(),
            Field::First => contact.first_name = value.to_owned(),
            Field::Full => contact.full_name = value.to_owned(),
            Field::Role => contact.role = value.to_owned(),
            Field::Phone => contact.phone = value.to_owned(),
            Field::Email => contact.email = value.to_owned(),
            Field::Website => contact.website = value.to_owned(),
            Field::Dark => self.request.dark_color = value.to_owned(),
            Field::Light => {
                if self.request.transparent_background {
                    warn!("Light color is ignored while the background is transparent");
                }
                self.request.light_color = value.to_owned();
            }
            Field::Transparent => self.request.transparent_background = parse_flag(value)?,
            Field::Size => {
                self.request.target_pixel_size = value
                    .parse::<TargetPixelSize>()
                    .with_context(|| format!("Invalid size `{}`", value.trim()))?
            }
            Field::Ecc => {
                self.request.error_correction = value
                    .parse::<EcLevel>()
                    .with_context(|| format!("Invalid error correction level `{}`", value.trim()))?
            }
        }
        debug!(?field, "Session edited");
        Ok(())
    }

    /// Render the current request. A failure keeps the previous preview.
    pub fn refresh(&mut self, renderer: &QrRenderService) -> Result<&RenderedQr, RenderError> {
        let rendered = renderer.render(&self.request)?;
        let latest: &RenderedQr = self.preview.last.insert(rendered);
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(RenderRequest {
            contact: starter_contact(),
            dark_color: "#000000".into(),
            light_color: "#FFFFFF".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "full=Jane Doe".parse::<SessionCommand>().unwrap(),
            SessionCommand::Edit(Field::Full, "Jane Doe".into())
        );
        assert_eq!(
            " ECC = q".parse::<SessionCommand>().unwrap(),
            SessionCommand::Edit(Field::Ecc, " q".into())
        );
        assert_eq!(
            "website=https://example.nl/?a=b".parse::<SessionCommand>().unwrap(),
            SessionCommand::Edit(Field::Website, "https://example.nl/?a=b".into())
        );
        assert_eq!("".parse::<SessionCommand>().unwrap(), SessionCommand::Empty);
        assert_eq!("show".parse::<SessionCommand>().unwrap(), SessionCommand::Show);
        assert_eq!("save".parse::<SessionCommand>().unwrap(), SessionCommand::Save(None));
        assert_eq!(
            "save  out/card.png".parse::<SessionCommand>().unwrap(),
            SessionCommand::Save(Some(PathBuf::from("out/card.png")))
        );
        assert_eq!("q".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
        assert!("nickname=JD".parse::<SessionCommand>().is_err());
        assert!("print".parse::<SessionCommand>().is_err());
    }

    #[test]
    fn test_apply_edits() {
        let mut session = session();
        session.apply(Field::Last, "Doe").unwrap();
        session.apply(Field::Transparent, "yes").unwrap();
        session.apply(Field::Size, "300").unwrap();
        session.apply(Field::Ecc, "l").unwrap();

        let request = session.request();
        assert_eq!(request.contact.last_name, "Doe");
        assert_eq!(request.contact.phone, STARTER_PHONE);
        assert!(request.transparent_background);
        assert_eq!(request.target_pixel_size.get(), 300);
        assert_eq!(request.error_correction, EcLevel::L);
    }

    #[test]
    fn test_invalid_edits_leave_request_unchanged() {
        let mut session = session();
        assert!(session.apply(Field::Size, "0").is_err());
        assert!(session.apply(Field::Ecc, "Z").is_err());
        assert!(session.apply(Field::Transparent, "maybe").is_err());
        assert_eq!(session.request().target_pixel_size.get(), 600);
        assert_eq!(session.request().error_correction, EcLevel::H);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_preview() {
        let renderer = QrRenderService::with_defaults();
        let mut session = session();
        assert!(session.preview().latest().is_none());

        let first = session.refresh(&renderer).unwrap().clone();
        session.apply(Field::Website, &"x".repeat(4000)).unwrap();
        assert!(matches!(
            session.refresh(&renderer),
            Err(RenderError::Encode(_))
        ));
        assert_eq!(session.preview().latest(), Some(&first));
    }
}

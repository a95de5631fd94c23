use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vcard_qr::{EcLevel, TargetPixelSize};

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file, instead of the platform config directory
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a contact as a QR code PNG
    Render(RenderArgs),

    /// Print the vCard payload of a contact
    Vcard(ContactArgs),

    /// Print a contact's QR code in the terminal
    Preview(PreviewArgs),

    /// Edit a contact line by line with a live preview
    Interactive,

    /// Show or change the render defaults
    Config(ConfigArgs),
}

/// Contact fields. Flags override the fields read from `--contact`.
#[derive(Args, Clone, Default)]
pub struct ContactArgs {
    /// JSON file with the contact fields (camelCase keys)
    #[arg(long, value_name = "FILE")]
    pub contact: Option<PathBuf>,

    /// Last name
    #[arg(long)]
    pub last: Option<String>,

    /// First name
    #[arg(long)]
    pub first: Option<String>,

    /// Full name as displayed, also used for the default file name
    #[arg(long)]
    pub full: Option<String>,

    /// Job title
    #[arg(long)]
    pub role: Option<String>,

    /// Mobile phone number (e.g: "+31612345678")
    #[arg(long)]
    pub phone: Option<String>,

    /// Work email address
    #[arg(long)]
    pub email: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct StyleArgs {
    /// Module color as RRGGBB or AARRGGBB hex, `#` optional (invalid falls back to black)
    #[arg(long, value_name = "HEX")]
    pub dark: Option<String>,

    /// Background color as RRGGBB or AARRGGBB hex (invalid falls back to white)
    #[arg(long, value_name = "HEX")]
    pub light: Option<String>,

    /// Make the background fully transparent, ignoring the light color
    #[arg(long, conflicts_with = "opaque")]
    pub transparent: bool,

    /// Force an opaque background even if the settings ask for transparency
    #[arg(long)]
    pub opaque: bool,

    /// Target image size in pixels, 1 to 16384 (e.g: 600)
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<TargetPixelSize>,

    /// Error correction level
    #[arg(long, value_enum, ignore_case = true)]
    pub ecc: Option<EcLevel>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub contact: ContactArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Output file, `.png` is appended when missing (default: "<full name>-qr.png")
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub contact: ContactArgs,

    /// Error correction level
    #[arg(long, value_enum, ignore_case = true)]
    pub ecc: Option<EcLevel>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Default module color
    #[arg(long, value_name = "HEX", value_parser = parse_color)]
    pub dark: Option<String>,

    /// Default background color
    #[arg(long, value_name = "HEX", value_parser = parse_color)]
    pub light: Option<String>,

    /// Use a transparent background by default
    #[arg(long, conflicts_with = "opaque")]
    pub transparent: bool,

    /// Use an opaque background by default
    #[arg(long)]
    pub opaque: bool,

    /// Default target image size in pixels
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<TargetPixelSize>,

    /// Default error correction level
    #[arg(long, value_enum, ignore_case = true)]
    pub ecc: Option<EcLevel>,

    /// Default directory for rendered images
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the current settings
    #[arg(long)]
    pub show: bool,
}

/// Stored defaults must parse; one-off render flags fall back instead.
fn parse_color(s: &str) -> Result<String, String> {
    vcard_qr::parse_hex_color(s)
        .map(|color| color.to_string())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "vcard-qr", "render", "--last", "Doe", "--first", "Jane", "--ecc", "Q", "--size",
            "300", "--transparent", "-o", "card",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.contact.last.as_deref(), Some("Doe"));
        assert_eq!(args.style.ecc, Some(EcLevel::Q));
        assert_eq!(args.style.size.map(TargetPixelSize::get), Some(300));
        assert!(args.style.transparent);
        assert_eq!(args.output, Some(PathBuf::from("card")));
    }

    #[test]
    fn test_rejects_out_of_range_size() {
        assert!(Cli::try_parse_from(["vcard-qr", "render", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["vcard-qr", "render", "--size", "200000"]).is_err());
        assert!(Cli::try_parse_from(["vcard-qr", "render", "--size", "3000000000"]).is_err());
    }

    #[test]
    fn test_config_normalizes_colors() {
        let cli = Cli::parse_from(["vcard-qr", "config", "--dark", " 1a2b3c "]);
        let Commands::Config(args) = cli.command else {
            panic!("expected config command");
        };
        assert_eq!(args.dark.as_deref(), Some("#1A2B3C"));
        assert!(Cli::try_parse_from(["vcard-qr", "config", "--light", "bad"]).is_err());
    }
}

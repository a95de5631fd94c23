use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

const PNG_EXTENSION: &str = "png";

/// `"<full name>-qr.png"`, or `"qr-code.png"` when the name is blank.
///
/// Path separators in the name become `-`, so the result is always a bare
/// file name.
pub fn suggested_file_name(full_name: &str) -> String {
    let name = full_name.trim();
    if name.is_empty() {
        format!("qr-code.{PNG_EXTENSION}")
    } else {
        let name = name.replace(['/', '\\'], "-");
        format!("{name}-qr.{PNG_EXTENSION}")
    }
}

pub fn with_png_extension(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));
    if is_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(PNG_EXTENSION);
        PathBuf::from(name)
    }
}

/// Write an encoded bitmap verbatim, forcing a `.png` extension.
///
/// Returns the path actually written.
pub fn write_png(path: &Path, png: &[u8]) -> Result<PathBuf> {
    if png.is_empty() {
        bail!("Nothing to export: no QR code has been rendered yet");
    }
    let path = with_png_extension(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, png).with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    debug!(bytes = png.len(), "Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(suggested_file_name(""), "qr-code.png");
        assert_eq!(suggested_file_name("   "), "qr-code.png");
        assert_eq!(suggested_file_name(" Jane Doe "), "Jane Doe-qr.png");
    }

    #[test]
    fn test_suggested_file_name_has_no_directories() {
        let name = suggested_file_name("R&D/Ops\\Team");
        assert_eq!(name, "R&D-Ops-Team-qr.png");
        assert_eq!(Path::new(&name).file_name(), Some(std::ffi::OsStr::new(&name)));
        assert_eq!(suggested_file_name("../../etc/passwd"), "..-..-etc-passwd-qr.png");
    }

    #[test]
    fn test_with_png_extension() {
        assert_eq!(with_png_extension(Path::new("card")), PathBuf::from("card.png"));
        assert_eq!(with_png_extension(Path::new("card.PNG")), PathBuf::from("card.PNG"));
        assert_eq!(
            with_png_extension(Path::new("dir/card.jpg")),
            PathBuf::from("dir/card.jpg.png")
        );
    }

    #[test]
    fn test_write_png() {
        let dir = std::env::temp_dir().join(format!("vcard-qr-export-{}", std::process::id()));
        let written = write_png(&dir.join("nested/card"), &[0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(written, dir.join("nested/card.png"));
        assert_eq!(fs::read(&written).unwrap(), vec![0x89, b'P', b'N', b'G']);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_png_refuses_empty_payload() {
        let path = std::env::temp_dir().join("vcard-qr-never-written.png");
        assert!(write_png(&path, &[]).is_err());
        assert!(!path.exists());
    }
}

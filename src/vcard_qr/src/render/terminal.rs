use qrcode::render::unicode;
use qrcode::QrCode;

use crate::{render::error::RenderError, types::EcLevel};

/// Render a payload as a Unicode string for terminal display.
///
/// Each character covers two vertically stacked modules, so the code stays
/// roughly square in a terminal.
pub fn render_to_terminal(text: &str, ec_level: EcLevel) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(text, ec_level.into())
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_terminal() {
        let rendered = render_to_terminal("hello", EcLevel::M).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        // 21 modules plus an 8 module quiet zone, two modules per row.
        assert_eq!(lines.len(), (21 + 8 + 1) / 2);
        assert!(lines.iter().all(|l| l.chars().count() == 21 + 8));
    }
}

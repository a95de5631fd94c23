use qrcode::{Color, QrCode};

use crate::{render::error::RenderError, types::EcLevel};

/// Square grid of QR modules, `true` for dark, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from row-major modules. `modules.len()` must be `width * width`.
    pub fn new(width: usize, modules: Vec<bool>) -> Result<Self, RenderError> {
        if modules.len() != width * width {
            return Err(RenderError::Encode(format!(
                "expected {} modules for a {width}x{width} matrix, got {}",
                width * width,
                modules.len()
            )));
        }
        Ok(Self { width, modules })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

pub trait MatrixGenerator {
    fn generate_matrix(&self, text: &str, ec_level: EcLevel) -> Result<ModuleMatrix, RenderError>;
}

/// Matrix generation backed by the `qrcode` crate.
pub struct QrcodeGenerator;
impl MatrixGenerator for QrcodeGenerator {
    fn generate_matrix(&self, text: &str, ec_level: EcLevel) -> Result<ModuleMatrix, RenderError> {
        let code = QrCode::with_error_correction_level(text, ec_level.into())
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        ModuleMatrix::new(code.width(), modules)
    }
}

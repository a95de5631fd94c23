use tracing::debug;

use crate::{
    color::resolve_colors,
    constants::QUIET_ZONE_MODULES,
    contact::ContactRecord,
    types::{EcLevel, TargetPixelSize},
    vcard::encode,
};

mod error;
mod matrix;
mod png;
mod terminal;

pub use error::RenderError;
pub use matrix::{MatrixGenerator, ModuleMatrix, QrcodeGenerator};
pub use png::{PngRasterizer, Rasterizer};
pub use terminal::render_to_terminal;

/// Pixels per module needed to approach `target_pixel_size` without exceeding it.
///
/// `module_count` is the painted width, quiet zone included. The result is
/// never below 1, so a target smaller than that width still renders one pixel
/// per module.
pub fn derive_scale(target_pixel_size: u32, module_count: usize) -> Result<u32, RenderError> {
    if module_count == 0 {
        return Err(RenderError::InvalidModuleCount);
    }
    // A module count above u32::MAX always floors to 0 and clamps to 1.
    let module_count = u32::try_from(module_count).unwrap_or(u32::MAX);
    Ok((target_pixel_size / module_count).max(1))
}

/// Everything one render needs. Colors are the raw user inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderRequest {
    pub contact: ContactRecord,
    pub dark_color: String,
    pub light_color: String,
    pub transparent_background: bool,
    pub target_pixel_size: TargetPixelSize,
    pub error_correction: EcLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQr {
    pub png: Vec<u8>,
    pub module_count: usize,
    pub pixels_per_module: u32,
}

pub struct QrRenderService {
    generator: Box<dyn MatrixGenerator + Send + Sync>,
    rasterizer: Box<dyn Rasterizer + Send + Sync>,
}

impl QrRenderService {
    pub fn new(
        generator: Box<dyn MatrixGenerator + Send + Sync>,
        rasterizer: Box<dyn Rasterizer + Send + Sync>,
    ) -> Self {
        Self {
            generator,
            rasterizer,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Box::new(QrcodeGenerator), Box::new(PngRasterizer))
    }

    /// Encode the contact, generate its matrix and rasterize it with a quiet zone.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderedQr, RenderError> {
        let vcard = encode(&request.contact.trimmed());
        let (dark, light) = resolve_colors(
            &request.dark_color,
            &request.light_color,
            request.transparent_background,
        );

        let matrix = self
            .generator
            .generate_matrix(&vcard, request.error_correction)?;
        let module_count = matrix.width();
        if module_count == 0 {
            return Err(RenderError::InvalidModuleCount);
        }
        let painted_width = module_count + 2 * QUIET_ZONE_MODULES as usize;
        let pixels_per_module = derive_scale(request.target_pixel_size.get(), painted_width)?;
        debug!(
            module_count,
            pixels_per_module,
            ec_level = %request.error_correction,
            %dark,
            %light,
            "Rasterizing QR code"
        );

        let png = self
            .rasterizer
            .rasterize(&matrix, pixels_per_module, dark, light, true)?;
        Ok(RenderedQr {
            png,
            module_count,
            pixels_per_module,
        })
    }
}

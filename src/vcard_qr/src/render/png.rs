use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::{
    color::RgbaColor,
    constants::{MAX_IMAGE_SIDE, QUIET_ZONE_MODULES},
    render::{error::RenderError, matrix::ModuleMatrix},
};

pub trait Rasterizer {
    /// Paint the matrix and return an encoded image.
    fn rasterize(
        &self,
        matrix: &ModuleMatrix,
        pixels_per_module: u32,
        dark: RgbaColor,
        light: RgbaColor,
        draw_quiet_zone: bool,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Rasterizes to PNG with the `image` crate.
pub struct PngRasterizer;
impl Rasterizer for PngRasterizer {
    fn rasterize(
        &self,
        matrix: &ModuleMatrix,
        pixels_per_module: u32,
        dark: RgbaColor,
        light: RgbaColor,
        draw_quiet_zone: bool,
    ) -> Result<Vec<u8>, RenderError> {
        let module_count = u32::try_from(matrix.width())
            .map_err(|_| RenderError::Image("matrix too large".to_owned()))?;
        let border = if draw_quiet_zone { QUIET_ZONE_MODULES } else { 0 };
        let overflow = || RenderError::Image("image dimensions overflow".to_owned());
        let side = module_count
            .checked_add(2 * border)
            .and_then(|w| w.checked_mul(pixels_per_module))
            .ok_or_else(overflow)?;
        if side > MAX_IMAGE_SIDE {
            return Err(RenderError::Image(format!(
                "image side {side} exceeds the {MAX_IMAGE_SIDE} pixel limit"
            )));
        }
        // RGBA buffer: 4 bytes per pixel.
        (side as usize)
            .checked_mul(side as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(overflow)?;

        let mut img = RgbaImage::from_pixel(side, side, Rgba(light.to_array()));
        let dark_pixel = Rgba(dark.to_array());
        for y in 0..matrix.width() {
            for x in 0..matrix.width() {
                if !matrix.is_dark(x, y) {
                    continue;
                }
                // Both fit in u32: they are below module_count.
                let px = (x as u32 + border) * pixels_per_module;
                let py = (y as u32 + border) * pixels_per_module;
                for dy in 0..pixels_per_module {
                    for dx in 0..pixels_per_module {
                        img.put_pixel(px + dx, py + dy, dark_pixel);
                    }
                }
            }
        }

        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        Ok(buf)
    }
}

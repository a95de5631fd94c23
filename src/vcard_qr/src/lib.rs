pub mod color;
pub mod constants;
pub mod contact;
pub mod export;
pub mod render;
pub mod types;
pub mod vcard;

pub use color::{parse_hex_color, resolve_colors, ColorParseError, ColorRole, RgbaColor};
pub use contact::ContactRecord;
pub use render::{derive_scale, QrRenderService, RenderError, RenderRequest, RenderedQr};
pub use types::{EcLevel, TargetPixelSize, ValueError};
pub use vcard::encode;

#[cfg(not(tarpaulin_include))]
pub fn get_renderer() -> render::QrRenderService {
    render::QrRenderService::with_defaults()
}

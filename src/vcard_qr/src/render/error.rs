use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid module count: the QR matrix must have at least one module per side")]
    InvalidModuleCount,
    #[error("failed to generate QR matrix: {0}")]
    Encode(String),
    #[error("failed to rasterize QR matrix: {0}")]
    Image(String),
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{DEFAULT_TARGET_PIXEL_SIZE, MAX_TARGET_PIXEL_SIZE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid error correction level: must be one of L, M, Q, H")]
    EcLevel,
    #[error("invalid target pixel size: must be an integer from 1 to 16384")]
    TargetPixelSize,
}

/// QR error correction level, trading data capacity for damage tolerance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EcLevel {
    /// Recovers ~7% of damaged modules
    L,
    /// Recovers ~15% of damaged modules
    M,
    /// Recovers ~25% of damaged modules
    Q,
    /// Recovers ~30% of damaged modules
    #[default]
    H,
}

impl EcLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        }
    }
}

impl FromStr for EcLevel {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            _ => Err(ValueError::EcLevel),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Requested side length of the rendered bitmap, in pixels.
///
/// Between 1 and [`MAX_TARGET_PIXEL_SIZE`] (16384) inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TargetPixelSize(u32);
impl TargetPixelSize {
    pub fn new(v: u32) -> Result<Self, ValueError> {
        if (1..=MAX_TARGET_PIXEL_SIZE).contains(&v) {
            Ok(Self(v))
        } else {
            Err(ValueError::TargetPixelSize)
        }
    }
    pub fn get(self) -> u32 {
        self.0
    }
}
impl Default for TargetPixelSize {
    fn default() -> Self {
        Self(DEFAULT_TARGET_PIXEL_SIZE)
    }
}
impl FromStr for TargetPixelSize {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: u32 = s.trim().parse().map_err(|_| ValueError::TargetPixelSize)?;
        Self::new(v)
    }
}
impl TryFrom<u32> for TargetPixelSize {
    type Error = ValueError;
    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}
impl From<TargetPixelSize> for u32 {
    fn from(size: TargetPixelSize) -> Self {
        size.0
    }
}
impl fmt::Display for TargetPixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

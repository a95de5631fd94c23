pub const VCARD_VERSION: &str = "3.0";
pub const LINE_ENDING: &str = "\r\n";
pub const ORGANIZATION_PLACEHOLDER: &str = "COMPANYNAME";
/// Street, city, state, postal code and country, in `ADR` component order.
pub const ADDRESS_PLACEHOLDER: &str = "STREET+HOUSENUMB;CITY;STATE;POSTALCODE;COUNTRY";

pub const DEFAULT_TARGET_PIXEL_SIZE: u32 = 600;
pub const MAX_TARGET_PIXEL_SIZE: u32 = 16384;
/// Hard cap on a rasterized side, quiet zone included.
pub const MAX_IMAGE_SIDE: u32 = 32768;
pub const QUIET_ZONE_MODULES: u32 = 4;

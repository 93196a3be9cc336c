use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use super::errors::SkinAnalysisError;

/// Largest decoded image accepted for analysis.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Side 1 is the front of the face.
pub const DEFAULT_SIDE_ID: u32 = 1;
/// Light 1 is standard lighting.
pub const DEFAULT_LIGHT_ID: u32 = 1;

static DATA_URL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,").ok());

/// A face photo ready to be sent to the analysis provider.
///
/// `base64` holds the bare payload: no data-URL prefix, no whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisImage {
    base64: String,
    pub side_id: u32,
    pub light_id: u32,
}

impl AnalysisImage {
    pub fn from_base64(raw: &str, side_id: u32, light_id: u32) -> Result<Self, SkinAnalysisError> {
        if side_id == 0 || light_id == 0 {
            return Err(SkinAnalysisError::InvalidCaptureSettings);
        }

        let stripped = DATA_URL_PREFIX
            .as_ref()
            .map(|re| re.replace(raw.trim_start(), "").to_string())
            .unwrap_or_else(|| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

        if clean.is_empty() {
            return Err(SkinAnalysisError::ImageEmpty);
        }
        // Base64 inflates by 4/3; reject oversized payloads before decoding them.
        if clean.len() / 4 * 3 > MAX_IMAGE_BYTES + 3 {
            return Err(SkinAnalysisError::ImageTooLarge);
        }

        let decoded = STANDARD
            .decode(clean.as_bytes())
            .map_err(|_| SkinAnalysisError::ImageInvalid)?;
        if decoded.is_empty() {
            return Err(SkinAnalysisError::ImageEmpty);
        }
        if decoded.len() > MAX_IMAGE_BYTES {
            return Err(SkinAnalysisError::ImageTooLarge);
        }

        Ok(Self {
            base64: clean,
            side_id,
            light_id,
        })
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }
}

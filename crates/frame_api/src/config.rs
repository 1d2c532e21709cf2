use shared::{domain::MAX_CLICKS, error::FrameError};
use url::Url;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://placehold.co";
pub const DEFAULT_TITLE: &str = "Farcaster Click Game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    pub max_clicks: u32,
    pub title: String,
    pub image: ImageConfig,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_clicks: MAX_CLICKS,
            title: DEFAULT_TITLE.into(),
            image: ImageConfig::default(),
        }
    }
}

/// Parameters for the external placeholder-image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    base_url: String,
    pub width: u32,
    pub height: u32,
    pub text_color: String,
    /// Append a timestamp so feed clients refetch the image.
    pub cache_bust: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.into(),
            width: 600,
            height: 315,
            text_color: "ffffff".into(),
            cache_bust: true,
        }
    }
}

impl ImageConfig {
    pub fn new(base_url: &str, width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyImage { width, height });
        }

        let invalid = |reason: &str| FrameError::InvalidImageBase {
            value: base_url.to_string(),
            reason: reason.to_string(),
        };
        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            width,
            height,
            ..Self::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

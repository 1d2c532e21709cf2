use std::fs;

use frame_api::{FrameConfig, ImageConfig, DEFAULT_IMAGE_BASE_URL, DEFAULT_TITLE};
use serde::Deserialize;
use shared::{domain::MAX_CLICKS, error::FrameError};
use tracing::warn;

const SETTINGS_FILE: &str = "frame.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub public_url: Option<String>,
    pub action_path: String,
    pub max_clicks: u32,
    pub title: String,
    pub image_base_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub cache_bust: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            public_url: None,
            action_path: "/api/index".into(),
            max_clicks: MAX_CLICKS,
            title: DEFAULT_TITLE.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            image_width: 600,
            image_height: 315,
            cache_bust: true,
        }
    }
}

impl Settings {
    pub fn frame_config(&self) -> Result<FrameConfig, FrameError> {
        let mut image = ImageConfig::new(&self.image_base_url, self.image_width, self.image_height)?;
        image.cache_bust = self.cache_bust;
        Ok(FrameConfig {
            max_clicks: self.max_clicks,
            title: self.title.clone(),
            image,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    public_url: Option<String>,
    action_path: Option<String>,
    max_clicks: Option<u32>,
    title: Option<String>,
    image_base_url: Option<String>,
    image_width: Option<u32>,
    image_height: Option<u32>,
    cache_bust: Option<bool>,
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then the environment. Values that do
/// not parse keep whatever the previous layer set.
pub fn load_settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(error) => warn!(%error, file = SETTINGS_FILE, "ignoring unreadable settings file"),
        }
    }

    if let Some(port) = env("PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
        settings.server_bind = format!("0.0.0.0:{port}");
    }
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("SERVER_PUBLIC_URL") {
        settings.public_url = non_empty(v);
    }
    if let Some(v) = env("APP__PUBLIC_URL") {
        settings.public_url = non_empty(v);
    }

    if let Some(v) = env("APP__ACTION_PATH") {
        settings.action_path = v;
    }
    if let Some(v) = env("APP__TITLE") {
        settings.title = v;
    }
    if let Some(v) = env("APP__IMAGE_BASE_URL") {
        settings.image_base_url = v;
    }

    if let Some(parsed) = env("APP__MAX_CLICKS").and_then(|v| v.trim().parse().ok()) {
        settings.max_clicks = parsed;
    }
    if let Some(parsed) = env("APP__IMAGE_WIDTH").and_then(|v| v.trim().parse().ok()) {
        settings.image_width = parsed;
    }
    if let Some(parsed) = env("APP__IMAGE_HEIGHT").and_then(|v| v.trim().parse().ok()) {
        settings.image_height = parsed;
    }
    if let Some(parsed) = env("APP__CACHE_BUST").and_then(|v| v.trim().parse().ok()) {
        settings.cache_bust = parsed;
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.public_url {
        settings.public_url = non_empty(v);
    }
    if let Some(v) = file_cfg.action_path {
        settings.action_path = v;
    }
    if let Some(v) = file_cfg.max_clicks {
        settings.max_clicks = v;
    }
    if let Some(v) = file_cfg.title {
        settings.title = v;
    }
    if let Some(v) = file_cfg.image_base_url {
        settings.image_base_url = v;
    }
    if let Some(v) = file_cfg.image_width {
        settings.image_width = v;
    }
    if let Some(v) = file_cfg.image_height {
        settings.image_height = v;
    }
    if let Some(v) = file_cfg.cache_bust {
        settings.cache_bust = v;
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

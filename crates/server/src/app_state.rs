use axum::http::{header, HeaderMap};
use frame_api::{ActionBase, FrameConfig};
use tracing::warn;

use crate::config::Settings;

pub(crate) const NEXT_CLICK_PATH: &str = "/next-click";

/// Read-only per-process configuration. Nothing here changes after startup.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) frame: FrameConfig,
    pub(crate) action_path: String,
    pub(crate) public_base: Option<ActionBase>,
    pub(crate) relative_base: ActionBase,
    pub(crate) next_click_base: ActionBase,
}

impl AppState {
    pub(crate) fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let public_base = settings
            .public_url
            .as_deref()
            .map(|url| ActionBase::from_public_url(url, &settings.action_path))
            .transpose()?;

        Ok(Self {
            frame: settings.frame_config()?,
            action_path: settings.action_path.clone(),
            public_base,
            relative_base: ActionBase::relative(&settings.action_path)?,
            next_click_base: ActionBase::relative(NEXT_CLICK_PATH)?,
        })
    }

    /// Configured public URL first, then the request's `Host`, then the
    /// bare relative path.
    pub(crate) fn action_base(&self, headers: &HeaderMap) -> ActionBase {
        if let Some(base) = &self.public_base {
            return base.clone();
        }

        let Some(host) = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
        else {
            return self.relative_base.clone();
        };

        match ActionBase::from_host(host, &self.action_path) {
            Ok(base) => base,
            Err(error) => {
                warn!(%error, "falling back to relative action path");
                self.relative_base.clone()
            }
        }
    }
}

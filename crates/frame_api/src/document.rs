use chrono::Utc;
use shared::domain::{GameState, RenderSpec};
use tracing::debug;

use crate::{image_locator, image_spec, next_action, ActionBase, FrameConfig};

/// Frame protocol version declared in `fc:frame`.
const FRAME_VERSION: &str = "vNext";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDocument {
    pub html: String,
    pub image_url: String,
    pub spec: RenderSpec,
}

pub fn render_spec(state: &GameState, base: &ActionBase, config: &FrameConfig) -> RenderSpec {
    let (label, color) = image_spec(state);
    let action = next_action(state, base, config.max_clicks);
    RenderSpec {
        label,
        color,
        action_target: action.target,
        action_label: action.label,
    }
}

/// Renders with a fresh cache token when the image config asks for one.
pub fn render(state: &GameState, base: &ActionBase, config: &FrameConfig) -> FrameDocument {
    let token = config
        .image
        .cache_bust
        .then(|| Utc::now().timestamp_millis());
    render_with_token(state, base, config, token)
}

pub fn render_with_token(
    state: &GameState,
    base: &ActionBase,
    config: &FrameConfig,
    cache_token: Option<i64>,
) -> FrameDocument {
    let spec = render_spec(state, base, config);
    let image_url = image_locator(&config.image, &spec.label, spec.color, cache_token);
    let html = assemble_html(state, &spec, &image_url, config);
    debug!(
        count = state.count,
        is_complete = state.is_complete,
        label = %spec.label,
        target = %spec.action_target,
        "rendered frame"
    );

    FrameDocument {
        html,
        image_url,
        spec,
    }
}

fn assemble_html(
    state: &GameState,
    spec: &RenderSpec,
    image_url: &str,
    config: &FrameConfig,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    push_meta(&mut html, "fc:frame", FRAME_VERSION);
    push_meta(&mut html, "fc:frame:image", image_url);
    push_meta(&mut html, "og:image", image_url);
    push_meta(&mut html, "fc:frame:button:1", &spec.action_label);
    push_meta(&mut html, "fc:frame:button:1:action", "post");
    push_meta(&mut html, "fc:frame:post_url", &spec.action_target);
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&config.title)));
    html.push_str(
        "<p>This is the server view. The frame itself renders inside a Farcaster client.</p>\n",
    );
    html.push_str(&format!(
        "<p>Current state: {} / {}</p>\n",
        state.count, config.max_clicks
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_meta(html: &mut String, property: &str, content: &str) {
    html.push_str(&format!(
        "<meta property=\"{}\" content=\"{}\" />\n",
        escape_attr(property),
        escape_attr(content)
    ));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;

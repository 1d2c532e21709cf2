use shared::domain::{FrameColor, GameState};
use url::form_urlencoded;

use crate::ImageConfig;

/// Label and color for the frame image. Completion wins over the zero
/// check, so a zero click limit always renders the completed image.
pub fn image_spec(state: &GameState) -> (String, FrameColor) {
    if state.is_complete {
        (format!("completed, {} total", state.count), FrameColor::Red)
    } else if state.count == 0 {
        ("start counting".to_string(), FrameColor::Green)
    } else {
        (format!("click count: {}", state.count), FrameColor::Blue)
    }
}

/// `{base}/{w}x{h}/{color}/{text_color}?text=...[&t=...]`
///
/// The label is form-encoded, so spaces become `+` rather than `%20`; the
/// image service decodes both the same way.
///
/// `cache_token` only defeats client-side image caching between frames
/// that would otherwise share a URL.
pub fn image_locator(
    config: &ImageConfig,
    label: &str,
    color: FrameColor,
    cache_token: Option<i64>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("text", label);
    if let Some(token) = cache_token {
        query.append_pair("t", &token.to_string());
    }

    format!(
        "{}/{}x{}/{}/{}?{}",
        config.base_url(),
        config.width,
        config.height,
        color.hex(),
        config.text_color,
        query.finish()
    )
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;

//! Click-counter frame core: resolve the inbound count into a
//! [`GameState`](shared::domain::GameState) and render the next frame.

mod action;
mod config;
mod document;
mod image;
mod resolver;

pub use action::{next_action, ActionBase};
pub use config::{FrameConfig, ImageConfig, DEFAULT_IMAGE_BASE_URL, DEFAULT_TITLE};
pub use document::{render, render_spec, render_with_token, FrameDocument};
pub use image::{image_locator, image_spec};
pub use resolver::{parse_count, resolve};

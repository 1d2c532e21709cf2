use super::*;

#[test]
fn defaults_match_placeholder_service() {
    let config = FrameConfig::default();
    assert_eq!(config.max_clicks, 5);
    assert_eq!(config.title, "Farcaster Click Game");
    assert_eq!(config.image.base_url(), "https://placehold.co");
    assert_eq!((config.image.width, config.image.height), (600, 315));
    assert!(config.image.cache_bust);
}

#[test]
fn image_base_trailing_slash_is_trimmed() {
    let image = ImageConfig::new("https://img.example.com/gen/", 300, 200).expect("image");
    assert_eq!(image.base_url(), "https://img.example.com/gen");
    assert_eq!(image.text_color, "ffffff");
}

#[test]
fn rejects_unusable_image_bases() {
    assert!(matches!(
        ImageConfig::new("not a url", 600, 315),
        Err(FrameError::InvalidImageBase { .. })
    ));
    assert!(matches!(
        ImageConfig::new("ftp://placehold.co", 600, 315),
        Err(FrameError::InvalidImageBase { .. })
    ));
    assert!(matches!(
        ImageConfig::new("https://placehold.co?x=1", 600, 315),
        Err(FrameError::InvalidImageBase { .. })
    ));
}

#[test]
fn rejects_zero_dimensions() {
    assert_eq!(
        ImageConfig::new(DEFAULT_IMAGE_BASE_URL, 0, 315),
        Err(FrameError::EmptyImage {
            width: 0,
            height: 315
        })
    );
}

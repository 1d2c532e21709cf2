use super::*;

#[test]
fn initial_state_is_green_start() {
    let state = GameState::new(0, 5);
    assert_eq!(
        image_spec(&state),
        ("start counting".to_string(), FrameColor::Green)
    );
}

#[test]
fn playing_state_is_blue_count() {
    let state = GameState::new(3, 5);
    assert_eq!(
        image_spec(&state),
        ("click count: 3".to_string(), FrameColor::Blue)
    );
}

#[test]
fn complete_state_is_red_total() {
    let state = GameState::new(5, 5);
    assert_eq!(
        image_spec(&state),
        ("completed, 5 total".to_string(), FrameColor::Red)
    );
}

#[test]
fn completion_is_checked_before_zero() {
    let state = GameState::new(0, 0);
    assert_eq!(
        image_spec(&state),
        ("completed, 0 total".to_string(), FrameColor::Red)
    );
}

#[test]
fn locator_encodes_dimensions_color_and_label() {
    let url = image_locator(
        &ImageConfig::default(),
        "click count: 3",
        FrameColor::Blue,
        None,
    );
    assert_eq!(
        url,
        "https://placehold.co/600x315/2563EB/ffffff?text=click+count%3A+3"
    );
}

#[test]
fn locator_appends_cache_token() {
    let url = image_locator(
        &ImageConfig::default(),
        "start counting",
        FrameColor::Green,
        Some(1_700_000_000_000),
    );
    assert!(url.ends_with("?text=start+counting&t=1700000000000"));
}

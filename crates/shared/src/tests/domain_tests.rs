use super::*;

#[test]
fn completion_is_derived_from_count() {
    assert!(!GameState::new(4, MAX_CLICKS).is_complete);
    assert!(GameState::new(5, MAX_CLICKS).is_complete);
    assert!(GameState::new(9, MAX_CLICKS).is_complete);
}

#[test]
fn playing_advances_until_complete() {
    let mut state = GameState::initial(MAX_CLICKS);
    for expected in 1..MAX_CLICKS {
        state = state.next(MAX_CLICKS);
        assert_eq!(state.phase(), FramePhase::Playing(expected));
    }
    state = state.next(MAX_CLICKS);
    assert_eq!(state.phase(), FramePhase::Complete(MAX_CLICKS));
}

#[test]
fn complete_resets_to_initial() {
    let done = GameState::new(MAX_CLICKS, MAX_CLICKS);
    assert_eq!(done.next_count(), 0);
    assert_eq!(done.next(MAX_CLICKS), GameState::initial(MAX_CLICKS));
}

#[test]
fn zero_max_clicks_is_always_complete() {
    let state = GameState::initial(0);
    assert_eq!(state.phase(), FramePhase::Complete(0));
}

#[test]
fn color_hex_codes() {
    assert_eq!(FrameColor::Blue.hex(), "2563EB");
    assert_eq!(FrameColor::Red.hex(), "DC2626");
    assert_eq!(FrameColor::Green.hex(), "10B981");
}

#[test]
fn phase_serializes_with_tag() {
    let value = serde_json::to_value(FramePhase::Playing(3)).expect("json");
    assert_eq!(value, serde_json::json!({ "phase": "playing", "count": 3 }));
}

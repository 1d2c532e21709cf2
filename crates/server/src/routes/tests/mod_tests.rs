use super::*;

use crate::config::Settings;

#[test]
fn count_param_takes_first_value() {
    assert_eq!(count_param(Some("count=3&count=9")).as_deref(), Some("3"));
    assert_eq!(count_param(Some("x=1&count=2")).as_deref(), Some("2"));
}

#[test]
fn count_param_absent() {
    assert_eq!(count_param(None), None);
    assert_eq!(count_param(Some("")), None);
    assert_eq!(count_param(Some("counter=4")), None);
}

#[test]
fn count_param_decodes_value() {
    assert_eq!(count_param(Some("count=%2D1")).as_deref(), Some("-1"));
    assert_eq!(count_param(Some("count=")).as_deref(), Some(""));
}

#[test]
fn frame_html_uses_given_base() {
    let state = AppState::from_settings(&Settings::default()).expect("state");
    let Html(html) = frame_html(&state, Some("2"), &state.next_click_base);
    assert!(html.contains("content=\"/next-click?count=3\""));
    assert!(html.contains("content=\"click here (2/5)\""));
}

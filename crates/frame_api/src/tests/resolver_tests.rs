use super::*;

#[test]
fn missing_or_blank_count_is_zero() {
    assert_eq!(parse_count(None), 0);
    assert_eq!(parse_count(Some("")), 0);
    assert_eq!(parse_count(Some("   ")), 0);
}

#[test]
fn non_numeric_count_is_zero() {
    assert_eq!(parse_count(Some("abc")), 0);
    assert_eq!(parse_count(Some("3abc")), 0);
    assert_eq!(parse_count(Some("2.5")), 0);
    assert_eq!(parse_count(Some("99999999999999999999999")), 0);
}

#[test]
fn numeric_count_is_parsed_and_clamped() {
    assert_eq!(parse_count(Some("3")), 3);
    assert_eq!(parse_count(Some(" 4 ")), 4);
    assert_eq!(parse_count(Some("-2")), 0);
    assert_eq!(parse_count(Some("5000000000")), u32::MAX);
}

#[test]
fn missing_count_resolves_like_zero() {
    let config = FrameConfig::default();
    assert_eq!(resolve(None, &config), resolve(Some("0"), &config));
    assert_eq!(resolve(Some("abc"), &config), resolve(None, &config));
}

#[test]
fn completion_follows_max_clicks() {
    let config = FrameConfig::default();
    for c in 0..config.max_clicks {
        let state = resolve(Some(&c.to_string()), &config);
        assert_eq!(state.count, c);
        assert!(!state.is_complete, "count {c} should still be playing");
    }
    for c in config.max_clicks..config.max_clicks + 3 {
        assert!(resolve(Some(&c.to_string()), &config).is_complete);
    }
}

#[test]
fn custom_limit_is_respected() {
    let config = FrameConfig {
        max_clicks: 2,
        ..FrameConfig::default()
    };
    assert!(!resolve(Some("1"), &config).is_complete);
    assert!(resolve(Some("2"), &config).is_complete);
}

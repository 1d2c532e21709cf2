use shared::domain::GameState;

use crate::FrameConfig;

/// Total parse of the inbound count. Anything that is not a plain integer
/// resolves to the initial count; negatives clamp to zero.
pub fn parse_count(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return 0;
    };

    match raw.parse::<i64>() {
        Ok(value) => value.clamp(0, i64::from(u32::MAX)) as u32,
        Err(_) => 0,
    }
}

pub fn resolve(raw: Option<&str>, config: &FrameConfig) -> GameState {
    GameState::new(parse_count(raw), config.max_clicks)
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;

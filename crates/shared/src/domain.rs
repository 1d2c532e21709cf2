use serde::{Deserialize, Serialize};

/// Clicks needed before the frame switches to its completed view.
pub const MAX_CLICKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub count: u32,
    pub is_complete: bool,
}

impl GameState {
    pub fn new(count: u32, max_clicks: u32) -> Self {
        Self {
            count,
            is_complete: count >= max_clicks,
        }
    }

    pub fn initial(max_clicks: u32) -> Self {
        Self::new(0, max_clicks)
    }

    pub fn phase(&self) -> FramePhase {
        if self.is_complete {
            FramePhase::Complete(self.count)
        } else {
            FramePhase::Playing(self.count)
        }
    }

    /// The state the next button press leads to: one more click while
    /// playing, back to zero once complete.
    pub fn next(&self, max_clicks: u32) -> Self {
        match self.phase() {
            FramePhase::Playing(count) => Self::new(count.saturating_add(1), max_clicks),
            FramePhase::Complete(_) => Self::initial(max_clicks),
        }
    }

    pub fn next_count(&self) -> u32 {
        if self.is_complete {
            0
        } else {
            self.count.saturating_add(1)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "count", rename_all = "snake_case")]
pub enum FramePhase {
    Playing(u32),
    Complete(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameColor {
    Blue,
    Red,
    Green,
}

impl FrameColor {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "2563EB",
            Self::Red => "DC2626",
            Self::Green => "10B981",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameAction {
    pub target: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub label: String,
    pub color: FrameColor,
    pub action_target: String,
    pub action_label: String,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;

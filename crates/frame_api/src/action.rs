use shared::{
    domain::{FrameAction, GameState},
    error::FrameError,
};
use url::Url;

/// Where the frame's button posts back to. The next count is always
/// carried in the `count` query parameter of this target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionBase {
    Absolute(Url),
    Relative(String),
}

impl ActionBase {
    /// Paths starting with `/` stay relative; anything else must be an
    /// absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, FrameError> {
        let raw = raw.trim();
        if raw.starts_with('/') {
            return Self::relative(raw);
        }

        let url = Url::parse(raw).map_err(|e| invalid(raw, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(raw, "scheme must be http or https"));
        }
        if url.fragment().is_some() {
            return Err(invalid(raw, "fragment is not allowed"));
        }
        Ok(Self::Absolute(url))
    }

    pub fn relative(path: &str) -> Result<Self, FrameError> {
        check_path(path)?;
        Ok(Self::Relative(path.to_string()))
    }

    /// `https://{host}{path}`, for deployments that learn their public
    /// address from the inbound `Host` header.
    pub fn from_host(host: &str, path: &str) -> Result<Self, FrameError> {
        let host = host.trim();
        if host.is_empty() || host.contains(['/', '?', '#', '@', '\\']) {
            return Err(invalid(host, "not a bare host"));
        }
        Self::from_public_url(&format!("https://{host}"), path)
    }

    pub fn from_public_url(public_url: &str, path: &str) -> Result<Self, FrameError> {
        check_path(path)?;
        let public_url = public_url.trim();
        let parsed = Url::parse(public_url).map_err(|e| invalid(public_url, e.to_string()))?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid(public_url, "query and fragment are not allowed"));
        }
        Self::parse(&format!("{}{path}", public_url.trim_end_matches('/')))
    }

    pub fn with_count(&self, count: u32) -> String {
        match self {
            Self::Absolute(url) => {
                let mut url = url.clone();
                url.query_pairs_mut()
                    .clear()
                    .append_pair("count", &count.to_string());
                url.into()
            }
            Self::Relative(path) => format!("{path}?count={count}"),
        }
    }
}

pub fn next_action(state: &GameState, base: &ActionBase, max_clicks: u32) -> FrameAction {
    let label = if state.is_complete {
        "play again".to_string()
    } else {
        format!("click here ({}/{max_clicks})", state.count)
    };

    FrameAction {
        target: base.with_count(state.next_count()),
        label,
    }
}

fn check_path(path: &str) -> Result<(), FrameError> {
    if !path.starts_with('/') {
        return Err(invalid(path, "action path must start with '/'"));
    }
    if path.contains(['?', '#']) || path.chars().any(char::is_whitespace) {
        return Err(invalid(
            path,
            "action path must not carry a query, fragment or whitespace",
        ));
    }
    Ok(())
}

fn invalid(value: &str, reason: impl Into<String>) -> FrameError {
    FrameError::InvalidActionBase {
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;

//! User agent generation

use rand::seq::SliceRandom;

/// Desktop browser user agents; news sites serve full markup to these
const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
];

/// Pick a browser user agent, optionally tagged with a suffix
pub fn generate_user_agent(suffix: Option<&str>) -> String {
    let base = BROWSER_USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(BROWSER_USER_AGENTS[0]);

    match suffix {
        Some(suffix) if !suffix.trim().is_empty() => format!("{} {}", base, suffix.trim()),
        _ => base.to_string(),
    }
}

/// Accept header for page fetches
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent() {
        let ua = generate_user_agent(None);
        assert!(ua.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_user_agent_suffix() {
        let ua = generate_user_agent(Some("newsagent/0.1"));
        assert!(ua.ends_with(" newsagent/0.1"));
        assert!(!generate_user_agent(Some("  ")).ends_with(' '));
    }
}

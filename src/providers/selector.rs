//! Provider rotation

use super::traits::SearchProviderKind;

/// Pick the provider for the `call_count`-th search.
///
/// Even counts go to Serper.dev, odd counts to Google Custom Search, so
/// quota is spread across both without tracking provider health.
pub fn select_provider(call_count: u64) -> SearchProviderKind {
    if call_count % 2 == 0 {
        SearchProviderKind::SerperDev
    } else {
        SearchProviderKind::GoogleApi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternates_between_two_providers() {
        assert_eq!(select_provider(0), SearchProviderKind::SerperDev);
        assert_eq!(select_provider(1), SearchProviderKind::GoogleApi);
        assert_ne!(select_provider(4), select_provider(7));
    }

    #[test]
    fn test_period_is_two() {
        for n in [0u64, 1, 2, 41, 1_000, u64::MAX - 2] {
            assert_eq!(select_provider(n), select_provider(n + 2));
        }
    }
}

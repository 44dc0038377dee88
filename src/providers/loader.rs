//! Provider loader for initializing providers from configuration

use super::google_api::GoogleApi;
use super::registry::ProviderRegistry;
use super::serper::SerperDev;
use super::traits::{SearchProvider, SearchProviderKind};
use crate::config::{ProviderSettings, Settings};
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Load all enabled, implemented providers from settings
    pub fn load(settings: &Settings) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();

        for kind in SearchProviderKind::ALL {
            if settings.providers.is_disabled(kind) {
                info!("Skipping disabled provider: {}", kind);
                continue;
            }

            match Self::create_provider(kind, &settings.providers) {
                Some(provider) => {
                    info!("Loaded provider: {}", kind);
                    registry.register(provider);
                }
                None => {
                    warn!("No implementation for provider {}", kind);
                }
            }
        }

        info!("Loaded {} providers", registry.len());
        registry
    }

    /// Create a provider instance for a kind, if one is implemented
    fn create_provider(
        kind: SearchProviderKind,
        config: &ProviderSettings,
    ) -> Option<Arc<dyn SearchProvider>> {
        let provider: Arc<dyn SearchProvider> = match kind {
            SearchProviderKind::GoogleApi => Arc::new(
                GoogleApi::new(config.google_api_key.clone(), config.google_cx.clone())
                    .with_base_url(&config.google_api_url),
            ),
            SearchProviderKind::SerperDev => Arc::new(
                SerperDev::new(config.serper_key.clone()).with_base_url(&config.serper_url),
            ),
            SearchProviderKind::Bing | SearchProviderKind::BingApi | SearchProviderKind::Brave => {
                return None;
            }
        };

        Some(provider)
    }
}

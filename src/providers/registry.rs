//! Provider registry for managing available search providers

use super::traits::{SearchProvider, SearchProviderKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the search providers that can actually be called
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<SearchProviderKind, Arc<dyn SearchProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any earlier one of the same kind
    pub fn register(&mut self, provider: Arc<dyn SearchProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    /// Get a provider by kind
    pub fn get(&self, kind: SearchProviderKind) -> Option<&Arc<dyn SearchProvider>> {
        self.providers.get(&kind)
    }

    /// Check if a provider is registered
    pub fn contains(&self, kind: SearchProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Get number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

//! Search provider module
//!
//! Defines the SearchProvider trait, the provider implementations, and the
//! gateway that turns a query into candidate links.

mod gateway;
mod loader;
mod registry;
mod selector;
mod traits;

// Provider implementations
pub mod google_api;
pub mod serper;

pub use gateway::SearchGateway;
pub use loader::ProviderLoader;
pub use registry::ProviderRegistry;
pub use selector::select_provider;
pub use traits::*;

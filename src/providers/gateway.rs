//! Search gateway: runs a provider and contains its failures

use super::registry::ProviderRegistry;
use super::traits::*;
use crate::network::HttpClient;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Resolves queries to links through the registered providers
#[derive(Clone)]
pub struct SearchGateway {
    client: HttpClient,
    registry: Arc<ProviderRegistry>,
}

impl SearchGateway {
    pub fn new(client: HttpClient, registry: Arc<ProviderRegistry>) -> Self {
        Self { client, registry }
    }

    /// Resolve a query to candidate links.
    ///
    /// Network failures, bad statuses, missing credentials and malformed
    /// bodies all come back as an empty [`SearchResult`]. Only a provider
    /// with no registered implementation is an error.
    pub async fn resolve_links(
        &self,
        query: &str,
        provider: SearchProviderKind,
        query_type: &str,
        location: &str,
    ) -> Result<SearchResult, ProviderError> {
        let engine = self
            .registry
            .get(provider)
            .ok_or(ProviderError::Unsupported(provider))?;

        let params = SearchParams::new(query)
            .with_query_type(query_type)
            .with_location(location);

        debug!(provider = %provider, query_type, "Resolving links for '{}'", query);

        let start = Instant::now();
        let outcome = self.search_provider(engine.as_ref(), &params).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                info!(
                    provider = %provider,
                    elapsed_ms,
                    links = result.links.len(),
                    "Search provider request completed"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(provider = %provider, elapsed_ms, "Search provider failed: {}", e);
                Ok(SearchResult::empty())
            }
        }
    }

    async fn search_provider(
        &self,
        provider: &dyn SearchProvider,
        params: &SearchParams,
    ) -> Result<SearchResult, ProviderError> {
        let request = provider.request(params)?;
        let response = self.client.execute(request).await?;
        provider.response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::providers::ProviderLoader;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> SearchGateway {
        let mut settings = Settings::default();
        settings.providers.google_api_key = Some("gkey".to_string());
        settings.providers.google_cx = Some("ctx".to_string());
        settings.providers.serper_key = Some("skey".to_string());
        settings.providers.google_api_url = format!("{}/customsearch/v1", server.uri());
        settings.providers.serper_url = format!("{}/search", server.uri());
        settings.outgoing.request_timeout = 1.0;

        let client = HttpClient::with_settings(&settings.outgoing).unwrap();
        let registry = ProviderLoader::load(&settings);
        SearchGateway::new(client, Arc::new(registry))
    }

    #[tokio::test]
    async fn test_google_api_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "gkey"))
            .and(query_param("cx", "ctx"))
            .and(query_param("q", "rust 2024"))
            .and(query_param("gl", "us"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"items":[{"link":"https://a.example"},{"link":"https://b.example"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .resolve_links("rust 2024", SearchProviderKind::GoogleApi, "news", "US")
            .await
            .unwrap();

        assert_eq!(result.links, vec!["https://a.example", "https://b.example"]);
        assert!(result.follow_up_questions.is_empty());
    }

    #[tokio::test]
    async fn test_serper_links_and_follow_ups() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("X-API-KEY", "skey"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"organic":[{"link":"https://x.example"}],
                    "peopleAlsoAsk":[{"link":"https://faq.example","question":"What now?"}],
                    "relatedSearches":[{"query":"x latest"}]}"#,
            ))
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .resolve_links("x", SearchProviderKind::SerperDev, "news", "")
            .await
            .unwrap();

        assert_eq!(result.links, vec!["https://x.example"]);
        assert_eq!(result.follow_up_questions.len(), 2);
        assert_eq!(result.follow_up_questions[0].question, "What now?");
        assert_eq!(result.follow_up_questions[1].link, "");
    }

    #[tokio::test]
    async fn test_malformed_json_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .resolve_links("q", SearchProviderKind::SerperDev, "", "us")
            .await
            .unwrap();

        assert_eq!(result, SearchResult::empty());
    }

    #[tokio::test]
    async fn test_server_error_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .resolve_links("q", SearchProviderKind::GoogleApi, "", "us")
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_slow_provider_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"items":[{"link":"https://late.example"}]}"#)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .resolve_links("q", SearchProviderKind::GoogleApi, "", "us")
            .await
            .unwrap();

        assert!(result.links.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut settings = Settings::default();
        settings.providers.serper_url = format!("{}/search", server.uri());
        let gateway = SearchGateway::new(
            HttpClient::new().unwrap(),
            Arc::new(ProviderLoader::load(&settings)),
        );

        let result = gateway
            .resolve_links("q", SearchProviderKind::SerperDev, "", "us")
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_provider_is_an_error() {
        let server = MockServer::start().await;
        let err = gateway_for(&server)
            .resolve_links("q", SearchProviderKind::Brave, "", "us")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Unsupported(SearchProviderKind::Brave)));
    }
}

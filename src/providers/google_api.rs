//! Google Custom Search JSON API provider

use super::traits::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    // Required: a body without `items` is treated as a malformed response.
    items: Vec<GoogleItem>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    #[serde(default)]
    link: String,
}

/// Google Custom Search, keyed by an API key and a search-engine context
pub struct GoogleApi {
    base_url: String,
    api_key: Option<String>,
    cx: Option<String>,
}

impl GoogleApi {
    pub fn new(api_key: Option<String>, cx: Option<String>) -> Self {
        Self {
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key,
            cx,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SearchProvider for GoogleApi {
    fn kind(&self) -> SearchProviderKind {
        SearchProviderKind::GoogleApi
    }

    fn request(&self, params: &SearchParams) -> Result<ProviderRequest, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials("YOUR_GOOGLE_API_KEY"))?;
        let cx = self
            .cx
            .as_deref()
            .ok_or(ProviderError::MissingCredentials("GOOGLE_CX"))?;

        Ok(ProviderRequest::get(&self.base_url)
            .param("key", key)
            .param("cx", cx)
            .param("q", &params.query)
            .param("fields", "items(link)")
            .param("gl", params.region()))
    }

    fn response(&self, response: ProviderResponse) -> Result<SearchResult, ProviderError> {
        if !response.is_success() {
            return Err(ProviderError::Status(response.status));
        }

        let data: GoogleResponse = response.json()?;
        let links = data
            .items
            .into_iter()
            .map(|item| item.link)
            .filter(|link| !link.is_empty())
            .collect();

        Ok(SearchResult::with_links(links))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleApi {
        GoogleApi::new(Some("k3y".to_string()), Some("cx-1".to_string()))
    }

    #[test]
    fn test_google_request() {
        let params = SearchParams::new("rust news").with_location("GB");
        let request = provider().request(&params).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.url.contains("googleapis.com"));
        assert_eq!(request.param_value("key"), Some("k3y"));
        assert_eq!(request.param_value("cx"), Some("cx-1"));
        assert_eq!(request.param_value("q"), Some("rust news"));
        assert_eq!(request.param_value("fields"), Some("items(link)"));
        assert_eq!(request.param_value("gl"), Some("gb"));
    }

    #[test]
    fn test_missing_credentials() {
        let google = GoogleApi::new(None, Some("cx".to_string()));
        let err = google.request(&SearchParams::new("q")).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredentials(_)));
    }

    #[test]
    fn test_parse_items() {
        let body = r#"{"items":[{"link":"https://a.example"},{"link":"https://b.example"}]}"#;
        let result = provider()
            .response(ProviderResponse::new(200, body))
            .unwrap();
        assert_eq!(result.links, vec!["https://a.example", "https://b.example"]);
        assert!(result.follow_up_questions.is_empty());
    }

    #[test]
    fn test_missing_items_is_shape_error() {
        let err = provider()
            .response(ProviderResponse::new(200, r#"{"kind":"customsearch#search"}"#))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Shape(_)));
    }

    #[test]
    fn test_http_error_status() {
        let err = provider()
            .response(ProviderResponse::new(403, "{}"))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Status(403)));
    }
}

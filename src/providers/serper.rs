//! Serper.dev search provider

use super::traits::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerperResponse {
    // Required: a body without `organic` is treated as a malformed response.
    organic: Vec<SerperOrganic>,
    #[serde(default)]
    people_also_ask: Vec<SerperPeopleAlsoAsk>,
    #[serde(default)]
    related_searches: Vec<SerperRelatedSearch>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    link: String,
}

#[derive(Debug, Deserialize)]
struct SerperPeopleAlsoAsk {
    #[serde(default)]
    link: String,
    #[serde(default)]
    question: String,
}

#[derive(Debug, Deserialize)]
struct SerperRelatedSearch {
    #[serde(default)]
    query: String,
}

/// Serper.dev Google search API
pub struct SerperDev {
    base_url: String,
    api_key: Option<String>,
}

impl SerperDev {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            base_url: "https://google.serper.dev/search".to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SearchProvider for SerperDev {
    fn kind(&self) -> SearchProviderKind {
        SearchProviderKind::SerperDev
    }

    fn request(&self, params: &SearchParams) -> Result<ProviderRequest, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials("SERPER_DEV_KEY"))?;

        Ok(ProviderRequest::post(&self.base_url)
            .header("X-API-KEY", key)
            .header("Content-Type", "application/json")
            .json(json!({
                "q": params.query,
                "gl": params.region(),
            })))
    }

    fn response(&self, response: ProviderResponse) -> Result<SearchResult, ProviderError> {
        if !response.is_success() {
            return Err(ProviderError::Status(response.status));
        }

        let data: SerperResponse = response.json()?;

        let links = data
            .organic
            .into_iter()
            .map(|r| r.link)
            .filter(|link| !link.is_empty())
            .collect();

        // "People also ask" entries come before related searches.
        let follow_up_questions = data
            .people_also_ask
            .into_iter()
            .map(|r| FollowUpQuestion::new(r.link, r.question))
            .chain(
                data.related_searches
                    .into_iter()
                    .map(|r| FollowUpQuestion::new("", r.query)),
            )
            .collect();

        Ok(SearchResult {
            links,
            follow_up_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SerperDev {
        SerperDev::new(Some("secret".to_string()))
    }

    #[test]
    fn test_serper_request() {
        let params = SearchParams::new("election results").with_location("IN");
        let request = provider().request(&params).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.contains("serper.dev"));
        assert_eq!(request.headers.get("X-API-KEY").map(String::as_str), Some("secret"));
        assert_eq!(
            request.json,
            Some(json!({"q": "election results", "gl": "in"}))
        );
    }

    #[test]
    fn test_parse_links_and_follow_ups() {
        let body = r#"{
            "organic": [{"link": "https://one.example", "title": "One"}, {"link": "https://two.example"}],
            "peopleAlsoAsk": [{"question": "Why?", "link": "https://why.example"}],
            "relatedSearches": [{"query": "more news"}, {"query": "other news"}]
        }"#;
        let result = provider()
            .response(ProviderResponse::new(200, body))
            .unwrap();

        assert_eq!(result.links, vec!["https://one.example", "https://two.example"]);
        assert_eq!(
            result.follow_up_questions,
            vec![
                FollowUpQuestion::new("https://why.example", "Why?"),
                FollowUpQuestion::new("", "more news"),
                FollowUpQuestion::new("", "other news"),
            ]
        );
    }

    #[test]
    fn test_follow_ups_are_optional() {
        let result = provider()
            .response(ProviderResponse::new(200, r#"{"organic": []}"#))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_organic_is_shape_error() {
        let err = provider()
            .response(ProviderResponse::new(200, r#"{"relatedSearches": []}"#))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Shape(_)));
    }
}

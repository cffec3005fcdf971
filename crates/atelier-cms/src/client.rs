use async_trait::async_trait;
use serde_json::Value;

use crate::config::CmsConfig;
use crate::error::CmsError;
use crate::protocol::{GroqQuery, QueryResponse};

/// Trait for running GROQ queries against the content API.
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// Run `query` and return the unwrapped `result` value.
    async fn fetch_raw(&self, query: &GroqQuery) -> Result<Value, CmsError>;
}

/// HTTP client for the hosted query endpoint.
pub struct HttpCmsClient {
    client: reqwest::Client,
    config: CmsConfig,
}

impl HttpCmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }
}

#[async_trait]
impl CmsClient for HttpCmsClient {
    async fn fetch_raw(&self, query: &GroqQuery) -> Result<Value, CmsError> {
        let url = self.config.endpoint();

        let mut request = self.client.get(&url).query(&query.query_pairs());
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CmsError::Status(response.status().as_u16()));
        }

        let envelope: QueryResponse = response
            .json()
            .await
            .map_err(|e| CmsError::Decode(e.to_string()))?;

        tracing::debug!(
            "Query {} answered in {}ms",
            query.kind.as_str(),
            envelope.ms.unwrap_or_default()
        );

        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::QueryKind;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUERY_PATH: &str = "/v2024-03-01/data/query/production";

    fn client_for(server: &MockServer) -> HttpCmsClient {
        HttpCmsClient::new(CmsConfig {
            api_host: Some(server.uri()),
            ..CmsConfig::new("test")
        })
    }

    #[tokio::test]
    async fn test_fetch_unwraps_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", "*[_id == $id][0]"))
            .and(query_param("$id", "\"a1\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "*[_id == $id][0]",
                "result": {"_id": "a1", "title": "Golden Hour"},
                "ms": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = GroqQuery::new(QueryKind::ArtworkById, "*[_id == $id][0]").param("id", "a1");
        let value = client_for(&server).fetch_raw(&query).await.unwrap();

        assert_eq!(value, json!({"_id": "a1", "title": "Golden Hour"}));
    }

    #[tokio::test]
    async fn test_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpCmsClient::new(CmsConfig {
            api_host: Some(server.uri()),
            token: Some("secret".to_string()),
            ..CmsConfig::new("test")
        });
        let value = client
            .fetch_raw(&GroqQuery::new(QueryKind::Posts, "*[_type == \"post\"]"))
            .await
            .unwrap();

        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_raw(&GroqQuery::new(QueryKind::Profile, "*[0]"))
            .await;

        assert!(matches!(result, Err(CmsError::Status(500))));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_raw(&GroqQuery::new(QueryKind::Profile, "*[0]"))
            .await;

        assert!(matches!(result, Err(CmsError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = HttpCmsClient::new(CmsConfig {
            api_host: Some("http://127.0.0.1:1".to_string()),
            ..CmsConfig::new("test")
        });

        let result = client
            .fetch_raw(&GroqQuery::new(QueryKind::Profile, "*[0]"))
            .await;

        assert!(matches!(result, Err(CmsError::Network(_))));
    }
}

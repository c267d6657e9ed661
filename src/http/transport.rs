use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::core::{Result, StoreError};

/// Header every outgoing request is augmented with.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Query parameters as key/value pairs; `None` values are dropped, not sent.
pub type QueryParams<'a> = &'a [(&'a str, Option<String>)];

/// Thin wrapper over the HTTP verbs against a fixed base URL.
///
/// No retries, no caching and no timeout of its own; transport failures
/// propagate to the caller unmodified.
#[derive(Clone)]
pub struct ApiHttp {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiHttp {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: QueryParams<'_>) -> Result<T> {
        debug!("GET {path}");
        let request = self.client.get(self.url(path)).query(&filter_params(params));
        self.send(request).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("POST {path}");
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("PATCH {path}");
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    /// Issue a DELETE; the response body is discarded.
    pub async fn delete(&self, path: &str, params: QueryParams<'_>) -> Result<()> {
        debug!("DELETE {path}");
        let response = self
            .client
            .delete(self.url(path))
            .query(&filter_params(params))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

fn filter_params(params: QueryParams<'_>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_params_are_dropped() {
        let params = [
            ("page", Some("2".to_string())),
            ("filter", None),
            ("size", Some("10".to_string())),
        ];

        let filtered = filter_params(&params);
        assert_eq!(
            filtered,
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/", "clave");
        let api = ApiHttp::new(&config);
        assert_eq!(api.url("/api/x"), "http://localhost:8080/api/x");
    }
}

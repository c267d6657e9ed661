use serde::Deserialize;

/// Generic envelope the backend services wrap their read payloads in.
///
/// Data sources unwrap it at their own boundary; views never see it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub errors: Option<Vec<String>>,

    #[serde(default)]
    pub code: Option<i32>,

    #[serde(default)]
    pub jsonapi: Option<JsonApiVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonApiVersion {
    pub version: String,
}

impl<T> ApiEnvelope<T> {
    /// Extract the payload, discarding the metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}

use thiserror::Error;

/// A JSON body that parsed but does not have a shape we can read
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("field '{field}' must be an array of players")]
    NotAnArray { field: String },
    #[error("unexpected player detail shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Why a request to the rankings API produced no usable data.
///
/// An empty but well-formed player set is not an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed JSON: {source}")]
    MalformedJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected response: {source}")]
    Payload {
        url: String,
        #[source]
        source: PayloadError,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::MalformedJson { url, .. }
            | FetchError::Payload { url, .. } => url,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND)
    }

    /// Short text for an inline error screen
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { source, .. } if source.is_timeout() => {
                "The rankings server took too long to answer".to_string()
            }
            FetchError::Transport { .. } => "Could not reach the rankings server".to_string(),
            FetchError::Status { .. } if self.is_not_found() => "Not found".to_string(),
            FetchError::Status { status, .. } => format!("HTTP error! status: {}", status.as_u16()),
            FetchError::MalformedJson { .. } | FetchError::Payload { .. } => {
                "The rankings server sent data we could not read".to_string()
            }
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OsmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no matching location found for \"{query}\"")]
    NotFound { query: String },

    #[error("missing or malformed coordinates in {context}")]
    InvalidCoordinates { context: String },

    #[error("unexpected HTTP status {status} ({status_text}) from {service}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        status_text: String,
    },
}

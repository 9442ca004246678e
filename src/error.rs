use thiserror::Error;

/// Main error type for the transcript server
///
/// The `Display` text of each variant is the message returned to clients in
/// the `{ "error": ... }` envelope, so it is kept short and user-facing.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Falta url")]
    MissingInput,

    #[error("URL inválida")]
    InvalidUrl,

    #[error("No se pudo extraer el ID")]
    UnresolvableId,

    #[error("No se encontró INNERTUBE_API_KEY")]
    KeyNotFound,

    /// An upstream endpoint answered with a non-success status.
    #[error("{endpoint} {status}")]
    Upstream { endpoint: &'static str, status: u16 },

    #[error("URL de subtítulos inválida: {0}")]
    InvalidTrackUrl(#[from] url::ParseError),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscriptError {
    pub fn upstream(endpoint: &'static str, status: reqwest::StatusCode) -> Self {
        TranscriptError::Upstream {
            endpoint,
            status: status.as_u16(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TranscriptError>;

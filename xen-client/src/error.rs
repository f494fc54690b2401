use thiserror::Error;

#[derive(Debug, Error)]
pub enum XenClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Бизнес-логика ошибки
    #[error("Resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    // Ошибки сериализации/десериализации
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl XenClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, XenClientError::NotFound)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, XenClientError::Status { status, .. } if *status >= 500)
    }
}

use poem::{error::ParseMultipartError, http::StatusCode, web::Json, IntoResponse};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required parameters: repoOwner, repoName, or token")]
    MissingParameter,
    #[error("Invalid request method. Only POST is supported.")]
    MethodNotAllowed,
    #[error("Failed to parse multipart body: {0}")]
    Multipart(String),
    #[error("Missing form field: file")]
    MissingFile,
    #[error("Failed to read form field file: {cause}")]
    ReadFile {
        #[source]
        cause: ParseMultipartError,
    },
    #[error("Failed to serialize upstream request: {cause}")]
    Serialize {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Upstream request failed: {cause}")]
    Upstream {
        #[source]
        cause: reqwest::Error,
    },
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingParameter => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(cause: serde_json::Error) -> Self {
        Error::Serialize { cause }
    }
}

impl From<reqwest::Error> for Error {
    fn from(cause: reqwest::Error) -> Self {
        Error::Upstream { cause }
    }
}

/// JSON body returned when the relay itself fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
    pub code: u16,
}

impl IntoResponse for Error {
    fn into_response(self) -> poem::Response {
        let status = self.status();

        let body = ErrorResponse {
            msg: self.to_string(),
            code: status.as_u16(),
        };

        Json(body).with_status(status).into_response()
    }
}

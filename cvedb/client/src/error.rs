use async_trait::async_trait;
use cvedb_common::error::ErrorInformation;
use reqwest::{Response, StatusCode};
use std::fmt::{Display, Formatter};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("api error ({status}): {details}")]
    Api { status: StatusCode, details: ApiErrorDetails },
}

impl Error {
    /// The HTTP status code, if the failure came from the backend.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            Self::Url(_) => None,
            Self::Api { status, .. } => Some(*status),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorDetails {
    Information(ErrorInformation),
    Plain(String),
    Empty,
    Unknown,
}

impl Display for ApiErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Information(info) => write!(f, "{info}"),
            Self::Plain(s) => f.write_str(s),
            Self::Empty => f.write_str("no information"),
            Self::Unknown => f.write_str("unknown error information"),
        }
    }
}

fn from_text<E>(status: StatusCode, body: Result<String, E>) -> Error {
    let details = match body {
        Err(_) => ApiErrorDetails::Unknown,
        Ok(text) if text.is_empty() => ApiErrorDetails::Empty,
        Ok(text) => match serde_json::from_str(&text) {
            Ok(info) => ApiErrorDetails::Information(info),
            Err(_) => ApiErrorDetails::Plain(text),
        },
    };

    Error::Api { status, details }
}

/// Turn non-success responses into an [`Error::Api`], carrying the error details of the body.
#[async_trait]
pub trait ApiErrorForStatus: Sized {
    async fn api_error_for_status(self) -> Result<Self, Error>;
}

#[async_trait]
impl ApiErrorForStatus for Response {
    async fn api_error_for_status(self) -> Result<Self, Error> {
        let status = self.status();
        if status.is_client_error() || status.is_server_error() {
            Err(from_text(status, self.text().await))
        } else {
            Ok(self)
        }
    }
}

use crate::flight_control::CommandError;
use strum_macros::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub(crate) enum ResponseError {
    InternalServer(String),
    BadRequest(String),
    MalformedResponse,
    NoConnection,
    Timeout,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::MalformedResponse
        } else if value.is_request() || value.is_builder() {
            ResponseError::BadRequest(value.to_string())
        } else {
            ResponseError::Unknown
        }
    }
}

impl From<ResponseError> for CommandError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::InternalServer(detail) => CommandError::Platform(detail),
            ResponseError::BadRequest(detail) => CommandError::Rejected(detail),
            ResponseError::MalformedResponse => {
                CommandError::Platform(String::from("malformed response"))
            }
            ResponseError::NoConnection => CommandError::NoConnection,
            ResponseError::Timeout => CommandError::Timeout,
            ResponseError::Unknown => CommandError::Unknown,
        }
    }
}

/// Splits off unsuccessful responses, keeping the error text the bridge sent.
pub(crate) async fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.is_server_error() {
        Err(ResponseError::InternalServer(response.text().await.unwrap_or_default()))
    } else if status.is_client_error() {
        Err(ResponseError::BadRequest(response.text().await.unwrap_or_default()))
    } else {
        Err(ResponseError::Unknown)
    }
}

use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

/// All different error types this crate uses.
///
/// Article-level failures never leave the pipeline as `Err`: the `Display`
/// form of the variant is the diagnostic placeholder stored in the record's
/// `full_content` field.
#[derive(Error, Debug)]
pub enum PressclipError {
    /// Received a non 2xx response.
    #[error("HTTP Error: {status}")]
    NoHttpSuccessResponse {
        /// Status of the response.
        status: StatusCode,
    },
    /// Could not reach the remote host.
    #[error("Error Connecting: {error}")]
    ConnectionFailure {
        /// The reqwest error.
        error: reqwest::Error,
    },
    /// The bounded per-request timeout elapsed.
    #[error("Timeout Error: {error}")]
    TimeoutFailure {
        /// The reqwest error.
        error: reqwest::Error,
    },
    /// Any other failure while issuing the request.
    #[error("Something went wrong with request: {error}")]
    RequestFailure {
        /// The reqwest error.
        error: reqwest::Error,
    },
    /// Received a body that could not be read as an html document.
    #[error("An unexpected error occurred during content fetching: unreadable document ({} bytes)", body.len())]
    ReadDocumentError {
        /// The content that resulted in the error.
        body: Bytes,
    },
    /// The payload could not be parsed as a syndication channel.
    #[error("Failed to parse feed: {error}")]
    FeedParseError {
        /// The rss error.
        error: rss::Error,
    },
}

impl From<reqwest::Error> for PressclipError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            PressclipError::TimeoutFailure { error }
        } else if error.is_connect() {
            PressclipError::ConnectionFailure { error }
        } else {
            PressclipError::RequestFailure { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_placeholder_names_the_status() {
        let err = PressclipError::NoHttpSuccessResponse {
            status: StatusCode::NOT_FOUND,
        };
        let placeholder = err.to_string();
        assert!(placeholder.contains("HTTP Error"));
        assert!(placeholder.contains("404"));
    }
}

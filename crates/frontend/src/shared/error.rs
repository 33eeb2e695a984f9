use thiserror::Error;

/// Failure of one of the page's data feeds or of the submission.
///
/// The page never crashes on these: callers log them and keep the
/// current state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    /// Browser capability missing or rejected (no window, geolocation denied, ...)
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ApiError::Http {
            status: 500,
            url: "http://localhost:3333/points".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 500 from http://localhost:3333/points");
        assert_eq!(
            ApiError::Unavailable("no window".to_string()).to_string(),
            "unavailable: no window"
        );
    }
}

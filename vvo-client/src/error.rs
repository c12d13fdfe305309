//! Transport-level error type shared by the API clients.

use std::fmt;

use crate::geo::GeoError;

/// Errors from the HTTP clients.
#[derive(Debug)]
pub enum VvoError {
    /// HTTP request failed (connection, DNS, TLS).
    Http(reqwest::Error),

    /// The request timed out. Surfaced distinctly because timeouts against
    /// the EFA host usually mean the default endpoint is unreachable from
    /// the current network (the eduroam variant exists for that case).
    Timeout,

    /// API returned a non-success status code.
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape.
    Json {
        message: String,
        body: Option<String>,
    },

    /// The provider answered 200 but flagged the request as failed in its
    /// status envelope.
    Status {
        code: String,
        message: Option<String>,
    },

    /// A coordinate could not be transformed for a request parameter.
    Geo(GeoError),
}

impl fmt::Display for VvoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VvoError::Http(e) => write!(f, "HTTP error: {e}"),
            VvoError::Timeout => write!(f, "request timed out"),
            VvoError::Api { status, message } => write!(f, "API error {status}: {message}"),
            VvoError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            VvoError::Status { code, message } => {
                write!(f, "provider status {code}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            VvoError::Geo(e) => write!(f, "coordinate transform failed: {e}"),
        }
    }
}

impl std::error::Error for VvoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VvoError::Http(e) => Some(e),
            VvoError::Geo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VvoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VvoError::Timeout
        } else {
            VvoError::Http(err)
        }
    }
}

impl From<GeoError> for VvoError {
    fn from(err: GeoError) -> Self {
        VvoError::Geo(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = VvoError::Timeout;
        assert_eq!(err.to_string(), "request timed out");

        let err = VvoError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = VvoError::Json {
            message: "expected object".into(),
            body: Some("[]".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("[]"));

        let err = VvoError::Status {
            code: "ServiceError".into(),
            message: Some("stop unknown".into()),
        };
        assert_eq!(err.to_string(), "provider status ServiceError: stop unknown");
    }
}

//! Connection settings for the password backend.

use std::time::Duration;

/// The endpoint the backend serves password generation on.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/generate-vocal-password";

/// The request body sent with every generation request.
///
/// No vocal input is captured yet, so the payload is a fixed placeholder.
pub const DEFAULT_REQUEST_BODY: &str = r#"{"vocal_input": "test_input"}"#;

/// How long to wait for the connection to the backend to be established.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Where and how to reach the password backend.
///
/// [`Settings::default()`] describes the local backend the application talks
/// to. The `with_*` functions exist so that a different endpoint can be
/// substituted, e.g. a mock server.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settings {
    endpoint: String,
    connect_timeout: Duration,
    request_body: String,
}

impl Settings {
    /// Returns these settings with `endpoint` as the URL to POST to.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns these settings with a different connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The maximum time spent establishing a connection.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// The exact body sent with each request.
    #[must_use]
    pub fn request_body(&self) -> &str {
        &self.request_body
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_body: String::from(DEFAULT_REQUEST_BODY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_backend() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint(),
            "http://127.0.0.1:5000/generate-vocal-password"
        );
        assert_eq!(settings.connect_timeout(), Duration::from_secs(5));
        assert_eq!(settings.request_body(), r#"{"vocal_input": "test_input"}"#);
    }

    #[test]
    fn overriding_endpoint_keeps_body() {
        let settings = Settings::default().with_endpoint("http://localhost:1234/x");
        assert_eq!(settings.endpoint(), "http://localhost:1234/x");
        assert_eq!(settings.request_body(), DEFAULT_REQUEST_BODY);
    }
}

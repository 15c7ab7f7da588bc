//! The blocking client used to ask the backend for a generated password.

use std::io::{self, Read};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::settings::Settings;

/// The response field holding the generated password.
pub const PASSWORD_FIELD: &str = "generated_password";

/// A blocking connection to the password backend.
#[derive(Clone)]
pub struct Backend {
    agent: ureq::Agent,
    settings: Settings,
}

impl Backend {
    /// Returns a client that talks to the backend described by `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(settings.connect_timeout())
            .build();
        Self {
            agent,
            settings: settings.clone(),
        }
    }

    /// Sends one generation request and returns the generated password.
    ///
    /// This blocks the calling thread until the response has been read in
    /// full. A response with an error status is still parsed: only a failure
    /// to reach the backend at all is reported as a connection error.
    pub fn generate_password(&self) -> Result<String, GenerateError> {
        let endpoint = self.settings.endpoint();
        info!(endpoint, "requesting generated password");

        let response = match self
            .agent
            .post(endpoint)
            .set("Content-Type", "application/json")
            .send_string(self.settings.request_body())
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                warn!(status, "backend responded with an error status");
                response
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(GenerateError::Connect(Box::new(transport)));
            }
        };

        debug!(status = response.status(), "backend responded");
        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(GenerateError::ReadBody)?;
        debug!(bytes = body.len(), "read response body");

        let parsed = serde_json::from_str::<Value>(&body).map_err(GenerateError::InvalidJson)?;
        extract_password(&parsed).ok_or(GenerateError::NotAnObject)
    }
}

/// Returns the generated password contained in `response`.
///
/// Returns `None` when `response` is not a JSON object. A missing or `null`
/// field yields an empty string. Numbers are rendered in their JSON form,
/// booleans as `1` or `0`, and nested arrays or objects yield an empty string.
#[must_use]
pub fn extract_password(response: &Value) -> Option<String> {
    let object = response.as_object()?;
    let password = match object.get(PASSWORD_FIELD) {
        Some(Value::String(password)) => password.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => String::from(if *flag { "1" } else { "0" }),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
    };
    Some(password)
}

/// An error that prevented a password from being generated.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The backend could not be reached.
    #[error("error connecting to backend: {0}")]
    Connect(#[source] Box<ureq::Transport>),
    /// The response body could not be read as text.
    #[error("error reading response body: {0}")]
    ReadBody(#[source] io::Error),
    /// The response body was not valid JSON.
    #[error("response was not valid json: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// The response was JSON, but not an object.
    #[error("response was not a json object")]
    NotAnObject,
}

impl GenerateError {
    /// Returns true if this error occurred before a connection was established.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connect(_))
    }
}

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::StubError;

// ============================================================================
// Thin blocking WebDriver client (JSON over HTTP)
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9515";

/// A live browser session: the WebDriver endpoint plus the session id.
///
/// This is the value bound into a `Page` at construction. Dropping it
/// does not end the session; call [`WebDriverClient::quit`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverHandle {
    pub endpoint: String,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
struct SessionValue {
    #[serde(rename = "sessionId")]
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    value: SessionValue,
}

/// Blocking client for a WebDriver-compatible endpoint (chromedriver,
/// geckodriver). Only the calls the stub workflow needs: create a
/// session, navigate it, delete it.
pub struct WebDriverClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl WebDriverClient {
    pub fn new(endpoint: &str) -> Self {
        WebDriverClient {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Create a new browser session.
    pub fn new_session(&self) -> Result<DriverHandle, StubError> {
        let body = json!({
            "capabilities": {
                "alwaysMatch": { "browserName": "chrome" }
            }
        });

        let resp = self
            .http
            .post(format!("{}/session", self.endpoint))
            .json(&body)
            .send()
            .map_err(|e| driver_err("session create", e))?;

        if !resp.status().is_success() {
            return Err(StubError::Driver {
                context: format!("session create ({} status)", resp.status().as_u16()),
                source: None,
            });
        }

        let session: SessionResponse = resp
            .json()
            .map_err(|e| driver_err("session response parse", e))?;

        Ok(DriverHandle {
            endpoint: self.endpoint.clone(),
            session_id: session.value.session_id,
        })
    }

    /// Point the session's browser at a URL.
    pub fn navigate(&self, driver: &DriverHandle, url: &str) -> Result<(), StubError> {
        let resp = self
            .http
            .post(format!(
                "{}/session/{}/url",
                self.endpoint, driver.session_id
            ))
            .json(&json!({ "url": url }))
            .send()
            .map_err(|e| driver_err("navigate", e))?;

        if !resp.status().is_success() {
            return Err(StubError::Driver {
                context: format!("navigate ({} status)", resp.status().as_u16()),
                source: None,
            });
        }

        Ok(())
    }

    /// End the session. Best-effort: a dead endpoint is not an error.
    pub fn quit(&self, driver: &DriverHandle) {
        let _ = self
            .http
            .delete(format!(
                "{}/session/{}",
                self.endpoint, driver.session_id
            ))
            .send();
    }
}

fn driver_err(context: &str, source: reqwest::Error) -> StubError {
    StubError::Driver {
        context: context.to_string(),
        source: Some(source),
    }
}

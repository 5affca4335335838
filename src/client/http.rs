//! Blocking API client.
//!
//! Every command issues its request through [`ApiClient`], which builds the
//! URL under `/api/v1`, attaches the session header and maps the response
//! status onto [`CoderlmError`].

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{ClientConfig, ServerAddress};
use crate::error::{CoderlmError, Result};

use super::QueryParams;

/// Header carrying the session id on every session-bound request.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Client for the coderlm REST API.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session_id: Option<String>,
}

impl ApiClient {
    /// Create a client for a server, without a session.
    pub fn new(server: &ServerAddress, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("coderlm-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: server.base_url(),
            session_id: None,
        })
    }

    /// Create a client for the server given by flags, the cached session or defaults.
    pub fn for_server(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.server(), config.timeout)
    }

    /// Create a client bound to the cached session.
    ///
    /// Fails with [`CoderlmError::NoSession`] before any network traffic if
    /// no session is cached.
    pub fn for_session(config: &ClientConfig) -> Result<Self> {
        let session = config.require_session()?;
        Ok(Self::new(&session.server(), config.timeout)?.with_session(&session.session_id))
    }

    /// Attach a session id to every request.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a GET request.
    pub fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        let url = self.url(path);
        let mut parsed =
            Url::parse(&url).with_context(|| format!("Invalid request URL {}", url))?;
        if !query.is_empty() {
            parsed.query_pairs_mut().extend_pairs(query.iter());
        }

        tracing::debug!("GET {}", parsed);
        self.send(self.http.get(parsed), &url)
    }

    /// Issue a POST request with a JSON body.
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        self.send(self.http.post(&url).json(body), &url)
    }

    /// Issue a DELETE request.
    pub fn delete(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        self.send(self.http.delete(&url), &url)
    }

    fn send(&self, mut request: RequestBuilder, url: &str) -> Result<Value> {
        if let Some(id) = &self.session_id {
            request = request.header(SESSION_HEADER, id);
        }

        let response = request.send().map_err(|e| unreachable(url, &e))?;
        let status = response.status();
        tracing::debug!("{} -> {}", url, status);

        if status == StatusCode::GONE {
            tracing::warn!("Server reports session evicted");
            return Err(CoderlmError::SessionEvicted);
        }

        let text = response.text().map_err(|e| unreachable(url, &e))?;

        if !status.is_success() {
            return Err(CoderlmError::Server {
                status: status.as_u16(),
                body: error_body(status, &text),
            });
        }

        if text.trim().is_empty() {
            return Ok(json!({}));
        }

        serde_json::from_str(&text).map_err(|e| CoderlmError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Turn a non-success body into the JSON document printed to the user.
fn error_body(status: StatusCode, text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| {
        json!({
            "error": text,
            "status": status.as_u16(),
        })
    })
}

fn unreachable(url: &str, err: &reqwest::Error) -> CoderlmError {
    CoderlmError::ServerUnreachable {
        url: url.to_string(),
        reason: root_cause(err),
    }
}

/// Innermost message of an error chain ("Connection refused" rather than
/// "error sending request for url").
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> ApiClient {
        let addr = ServerAddress::new(server.host(), server.port());
        ApiClient::new(&addr, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn url_joins_under_api_prefix() {
        let client = ApiClient::new(&ServerAddress::default(), Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.url("/symbols/search"),
            "http://127.0.0.1:3000/api/v1/symbols/search"
        );
        assert_eq!(client.url("peek"), "http://127.0.0.1:3000/api/v1/peek");
    }

    #[test]
    fn get_sends_query_and_session_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/symbols/search")
                .query_param("q", "parse config")
                .query_param("limit", "5")
                .header(SESSION_HEADER, "sess-1");
            then.status(200)
                .json_body(serde_json::json!({"symbols": [], "count": 0}));
        });

        let client = client_for(&server).with_session("sess-1");
        let params = QueryParams::new().with("q", "parse config").with("limit", 5);
        let value = client.get("/symbols/search", &params).unwrap();

        mock.assert();
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn post_sends_json_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/structure/define")
                .json_body(serde_json::json!({"file": "src/lib.rs", "definition": "entry"}));
            then.status(200).json_body(serde_json::json!({"ok": true}));
        });

        let client = client_for(&server).with_session("s");
        let value = client
            .post(
                "/structure/define",
                &serde_json::json!({"file": "src/lib.rs", "definition": "entry"}),
            )
            .unwrap();

        mock.assert();
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn gone_maps_to_session_evicted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/structure");
            then.status(410)
                .json_body(serde_json::json!({"error": "evicted"}));
        });

        let err = client_for(&server)
            .get("/structure", &QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, CoderlmError::SessionEvicted));
    }

    #[test]
    fn error_status_carries_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/peek");
            then.status(400)
                .json_body(serde_json::json!({"error": "File not found: nope.rs"}));
        });

        let err = client_for(&server)
            .get("/peek", &QueryParams::new().with("file", "nope.rs"))
            .unwrap_err();
        match err {
            CoderlmError::Server { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body["error"], "File not found: nope.rs");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_is_wrapped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/sessions/x");
            then.status(500).body("boom");
        });

        let err = client_for(&server).delete("/sessions/x").unwrap_err();
        match err {
            CoderlmError::Server { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, serde_json::json!({"error": "boom", "status": 500}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_success_body_is_empty_object() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/sessions/x");
            then.status(200);
        });

        let value = client_for(&server).delete("/sessions/x").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn connection_refused_is_unreachable() {
        // Bind and drop a listener to find a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client =
            ApiClient::new(&ServerAddress::new("127.0.0.1", port), Duration::from_secs(2))
                .unwrap();

        let err = client.get("/health", &QueryParams::new()).unwrap_err();
        assert!(matches!(err, CoderlmError::ServerUnreachable { .. }));
    }
}

//! Init command implementation.
//!
//! The `coderlm-cli init` command checks server health, registers the
//! project directory as a new session and caches the session descriptor.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde_json::{json, Value};

use crate::cli::args::InitArgs;
use crate::client::{ApiClient, QueryParams};
use crate::config::ClientConfig;
use crate::error::{CoderlmError, Result};
use crate::session::SessionState;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand<'a> {
    config: &'a ClientConfig,
    args: InitArgs,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command.
    pub fn new(config: &'a ClientConfig, args: InitArgs) -> Self {
        Self { config, args }
    }

    /// Absolute path of the project to register.
    fn project_dir(&self) -> Result<PathBuf> {
        let dir = match &self.args.cwd {
            Some(cwd) => self.config.root.join(cwd),
            None => self.config.root.clone(),
        };
        let abs = std::path::absolute(&dir)
            .with_context(|| format!("Failed to resolve project directory {:?}", dir))?;
        Ok(collapse_dots(&abs))
    }
}

/// Remove `.` and `..` components without touching the filesystem.
fn collapse_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.project_dir()?;
        let project = project.display().to_string();
        let server = self.config.server();
        let client = ApiClient::new(&server, self.config.timeout)?;

        let health = client.get("/health", &QueryParams::new())?;
        let created = client.post("/sessions", &json!({ "cwd": project }))?;

        let session_id = created
            .get("session_id")
            .and_then(Value::as_str)
            .ok_or_else(|| CoderlmError::InvalidResponse {
                url: client.url("/sessions"),
                message: "missing session_id".to_string(),
            })?;
        let created_at = created
            .get("created_at")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let state = SessionState::new(session_id, &server, project.as_str(), created_at);
        self.config.store().save(&state)?;
        tracing::debug!("Session {} created on {}", session_id, server);

        ui.success(&format!("Session created: {}", session_id));
        ui.message(&format!("Project: {}", project));
        ui.message(&health_summary(&health));

        Ok(CommandResult::success())
    }
}

/// One-line summary of a `/health` response.
fn health_summary(health: &Value) -> String {
    let status = health.get("status").and_then(Value::as_str).unwrap_or("ok");
    let projects = health.get("projects").and_then(Value::as_u64).unwrap_or(0);
    let sessions = health
        .get("active_sessions")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    format!(
        "Server: {} ({} projects, {} sessions)",
        status, projects, sessions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TIMEOUT;
    use crate::session::SessionStore;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn config_for(temp: &TempDir, server: &MockServer) -> ClientConfig {
        ClientConfig::load(
            temp.path(),
            Some(server.host()),
            Some(server.port()),
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    fn mock_health(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/health");
            then.status(200).json_body(json!({
                "status": "ok",
                "projects": 2,
                "active_sessions": 3,
                "max_projects": 5,
            }));
        });
    }

    #[test]
    fn health_summary_formats_counts() {
        let summary = health_summary(&json!({"status": "ok", "projects": 1, "active_sessions": 4}));
        assert_eq!(summary, "Server: ok (1 projects, 4 sessions)");
    }

    #[test]
    fn health_summary_defaults_missing_fields() {
        assert_eq!(health_summary(&json!({})), "Server: ok (0 projects, 0 sessions)");
    }

    #[test]
    fn collapse_dots_resolves_parent_components() {
        assert_eq!(
            collapse_dots(Path::new("/work/app/../lib/./src")),
            PathBuf::from("/work/lib/src")
        );
        assert_eq!(collapse_dots(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn init_saves_session_returned_by_server() {
        let server = MockServer::start();
        mock_health(&server);
        let temp = TempDir::new().unwrap();
        let project = std::path::absolute(temp.path()).unwrap();
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/sessions")
                .json_body(json!({"cwd": project.display().to_string()}));
            then.status(200).json_body(json!({
                "session_id": "0b6e1c8a-5b57-4c4e-9d3a-2f1f0c3d9e11",
                "created_at": "2026-10-19T08:00:00+00:00",
                "project": project.display().to_string(),
            }));
        });

        let config = config_for(&temp, &server);
        let mut ui = MockUI::new();
        InitCommand::new(&config, InitArgs::default())
            .execute(&mut ui)
            .unwrap();

        create.assert();
        let saved = SessionStore::in_dir(temp.path()).load().unwrap().unwrap();
        assert_eq!(saved.session_id, "0b6e1c8a-5b57-4c4e-9d3a-2f1f0c3d9e11");
        assert_eq!(saved.port, server.port());
        assert_eq!(saved.created_at, "2026-10-19T08:00:00+00:00");
        assert!(ui.has_success("Session created: 0b6e1c8a"));
        assert!(ui.has_message("Server: ok (2 projects, 3 sessions)"));
    }

    #[test]
    fn init_resolves_relative_cwd_against_root() {
        let server = MockServer::start();
        mock_health(&server);
        let temp = TempDir::new().unwrap();
        let expected = std::path::absolute(temp.path().join("service")).unwrap();
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/sessions")
                .json_body(json!({"cwd": expected.display().to_string()}));
            then.status(200).json_body(json!({"session_id": "s-2"}));
        });

        let config = config_for(&temp, &server);
        let args = InitArgs {
            cwd: Some(PathBuf::from("service")),
        };
        InitCommand::new(&config, args)
            .execute(&mut MockUI::new())
            .unwrap();

        create.assert();
        let saved = SessionStore::in_dir(temp.path()).load().unwrap().unwrap();
        assert_eq!(saved.project, expected.display().to_string());
        assert!(saved.created().is_some());
    }

    #[test]
    fn init_resolves_parent_cwd() {
        let server = MockServer::start();
        mock_health(&server);
        let temp = TempDir::new().unwrap();
        let expected = std::path::absolute(temp.path()).unwrap();
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/sessions")
                .json_body(json!({"cwd": expected.display().to_string()}));
            then.status(200).json_body(json!({"session_id": "s-3"}));
        });

        let config = config_for(&temp, &server);
        let args = InitArgs {
            cwd: Some(PathBuf::from("service/..")),
        };
        InitCommand::new(&config, args)
            .execute(&mut MockUI::new())
            .unwrap();

        create.assert();
    }

    #[test]
    fn init_replaces_unreadable_session_file() {
        let server = MockServer::start();
        mock_health(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(200).json_body(json!({"session_id": "fresh"}));
        });
        let temp = TempDir::new().unwrap();
        let store = SessionStore::in_dir(temp.path());
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        let config = config_for(&temp, &server);
        InitCommand::new(&config, InitArgs::default())
            .execute(&mut MockUI::new())
            .unwrap();

        assert_eq!(store.load().unwrap().unwrap().session_id, "fresh");
    }

    #[test]
    fn init_without_session_id_fails_and_saves_nothing() {
        let server = MockServer::start();
        mock_health(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(200).json_body(json!({"unexpected": true}));
        });

        let temp = TempDir::new().unwrap();
        let config = config_for(&temp, &server);
        let err = InitCommand::new(&config, InitArgs::default())
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, CoderlmError::InvalidResponse { .. }));
        assert!(!config.state_path.exists());
    }

    #[test]
    fn init_stops_when_health_check_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/health");
            then.status(503).json_body(json!({"error": "starting"}));
        });
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/v1/sessions");
            then.status(200).json_body(json!({"session_id": "never"}));
        });

        let temp = TempDir::new().unwrap();
        let config = config_for(&temp, &server);
        let err = InitCommand::new(&config, InitArgs::default())
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, CoderlmError::Server { status: 503, .. }));
        create.assert_hits(0);
        assert!(!config.state_path.exists());
    }
}

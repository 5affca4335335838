//! Library integration tests.

use coderlm_cli::CoderlmError;

#[test]
fn error_types_are_public() {
    let err = CoderlmError::Server {
        status: 400,
        body: serde_json::json!({"error": "bad"}),
    };
    assert!(err.to_string().contains("400"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> coderlm_cli::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use coderlm_cli::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["coderlm-cli", "search", "Config", "--limit", "5"]);

    if let Commands::Search(args) = cli.command {
        assert_eq!(args.query, "Config");
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.params().get("q"), Some("Config"));
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn session_round_trips_through_store() {
    use coderlm_cli::config::ServerAddress;
    use coderlm_cli::session::{SessionState, SessionStore};

    let temp = tempfile::TempDir::new().unwrap();
    let store = SessionStore::in_dir(temp.path());
    let state = SessionState::new("abc", &ServerAddress::default(), "/work", "");

    store.save(&state).unwrap();
    assert_eq!(store.load().unwrap(), Some(state));
    assert!(store.clear().unwrap());
    assert_eq!(store.load().unwrap(), None);
}

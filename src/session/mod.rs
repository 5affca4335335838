//! Local session cache.
//!
//! A session is a server-side handle bound to one project directory. The
//! client caches its descriptor in a single JSON file relative to the
//! working directory so later invocations can reuse it:
//!
//! - [`SessionState`] is the descriptor itself
//! - [`SessionStore`] reads, writes and clears the descriptor file

mod state;
mod store;

pub use state::SessionState;
pub use store::SessionStore;

/// Directory (relative to the working directory) holding the session file.
pub const STATE_DIR: &str = ".claude/coderlm_state";

/// File name of the session descriptor inside [`STATE_DIR`].
pub const STATE_FILE: &str = "session.json";

/// Get the session file path for a working directory.
pub fn default_state_path(root: &std::path::Path) -> std::path::PathBuf {
    root.join(STATE_DIR).join(STATE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_state_path_is_under_claude_dir() {
        let path = default_state_path(Path::new("/work"));
        assert_eq!(
            path,
            Path::new("/work/.claude/coderlm_state/session.json")
        );
    }
}

// ABOUTME: Session directory for one tmux server
//
// Lists, looks up, checks and creates sessions. There is no client-side
// cache: every query is a fresh tmux round trip, since other clients can
// create or kill sessions at any time.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::command::CommandRunner;
use super::error::TmuxError;
use super::server::{exact_target, TmuxServer};

/// Separator between fields in the list-sessions format
pub const FIELD_SEPARATOR: char = '\t';

/// tmux session/window delimiter, never allowed in a session name
pub const SESSION_NAME_DELIMITER: char = ':';

/// Character tmux uses between window and pane indices; replaced on creation
const PERIOD_SUBSTITUTE: char = '_';

/// `list-sessions -F` format matching `SessionRecord`'s field order
pub fn list_format() -> String {
    [
        "#{session_id}",
        "#{session_name}",
        "#{session_path}",
        "#{session_windows}",
    ]
    .join(&FIELD_SEPARATOR.to_string())
}

/// Projection of one live tmux session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub working_directory: PathBuf,
    pub window_count: u32,
}

/// Parse `list-sessions` output produced with [`list_format`].
///
/// Malformed lines are an error rather than being skipped.
pub fn parse_sessions(output: &str) -> Result<Vec<SessionRecord>, TmuxError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_session)
        .collect()
}

fn parse_session(line: &str) -> Result<SessionRecord, TmuxError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [id, name, path, windows] = fields.as_slice() else {
        return Err(TmuxError::Parse {
            record: line.to_string(),
            reason: format!("expected 4 fields, found {}", fields.len()),
        });
    };

    let window_count = windows.trim().parse().map_err(|_| TmuxError::Parse {
        record: line.to_string(),
        reason: format!("window count {windows:?} is not a number"),
    })?;

    Ok(SessionRecord {
        id: (*id).to_string(),
        name: (*name).to_string(),
        working_directory: PathBuf::from(path),
        window_count,
    })
}

/// Validate a requested session name and normalise it for tmux.
///
/// Empty names and names containing a colon are rejected; periods become
/// underscores.
pub fn sanitize_session_name(name: &str) -> Result<String, TmuxError> {
    if name.is_empty() {
        return Err(TmuxError::Validation {
            name: name.to_string(),
            reason: "session names can't be empty".to_string(),
        });
    }
    if name.contains(SESSION_NAME_DELIMITER) {
        return Err(TmuxError::Validation {
            name: name.to_string(),
            reason: format!("session names can't contain '{SESSION_NAME_DELIMITER}'"),
        });
    }
    Ok(name.replace('.', &PERIOD_SUBSTITUTE.to_string()))
}

impl<R: CommandRunner> TmuxServer<R> {
    /// All sessions on this server, in tmux's order
    pub async fn list_sessions(&self) -> Result<Vec<SessionRecord>, TmuxError> {
        let format = list_format();
        let output = self.run(&["list-sessions", "-F", &format]).await?;
        let sessions = parse_sessions(&output.stdout)?;
        debug!("Found {} sessions on {}", sessions.len(), self.socket());
        Ok(sessions)
    }

    /// Whether a session with exactly this name exists.
    ///
    /// `has-session` signals absence through its exit status, so any failure
    /// counts as "does not exist".
    pub async fn session_exists(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self.run(&["has-session", "-t", &exact_target(name)]).await {
            Ok(_) => true,
            Err(e) => {
                debug!("has-session for '{}' failed: {}", name, e);
                false
            }
        }
    }

    /// Look up a session by name: existence check first, then a full listing
    pub async fn get_session(&self, name: &str) -> Result<SessionRecord, TmuxError> {
        if !self.session_exists(name).await {
            return Err(TmuxError::NotFound(name.to_string()));
        }

        let session = self
            .list_sessions()
            .await?
            .into_iter()
            .find(|session| session.name == name);

        session.ok_or_else(|| {
            warn!("Session '{}' vanished between has-session and list-sessions", name);
            TmuxError::NotFound(name.to_string())
        })
    }

    /// Create a detached session and return it as tmux reports it
    pub async fn create_session(
        &self,
        name: &str,
        working_directory: &Path,
    ) -> Result<SessionRecord, TmuxError> {
        let name = sanitize_session_name(name)?;
        let directory = working_directory.display().to_string();

        info!("Creating session '{}' in {}", name, directory);
        self.run(&["new-session", "-d", "-s", &name, "-c", &directory])
            .await?;

        self.get_session(&name).await
    }
}

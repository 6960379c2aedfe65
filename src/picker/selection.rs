// ABOUTME: Classification of the line a user picked in the popup
//
// A picked line is either the name of a live session or a candidate
// directory to start a new session in. The decision is made once, here.

use std::path::{Path, PathBuf};

/// What the user chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A session that already exists on the server
    ExistingSession { name: String },
    /// A directory to create a session in, named after its last component
    NewSession {
        name: String,
        working_directory: PathBuf,
    },
}

impl Selection {
    /// Classify raw picker output.
    ///
    /// An absolute path to an existing directory starts a new session;
    /// anything else non-empty is taken as a session name. Returns `None` for
    /// blank input.
    pub fn classify(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let path = Path::new(text);
        if path.is_absolute() && path.is_dir() {
            let name = path.file_name().map_or_else(
                || text.to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            return Some(Self::NewSession {
                name,
                working_directory: path.to_path_buf(),
            });
        }

        Some(Self::ExistingSession {
            name: text.to_string(),
        })
    }

    /// Session name this selection refers to (before any sanitising)
    pub fn name(&self) -> &str {
        match self {
            Self::ExistingSession { name } | Self::NewSession { name, .. } => name,
        }
    }
}

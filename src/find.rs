// ABOUTME: Candidate directories for new sessions
//
// Lists the direct child directories of each configured parent. The picker
// reloads its list from this output when switching to the directories view.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Expand a leading `~` or `$HOME` against the given home directory
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    for prefix in ["~", "$HOME"] {
        if raw == prefix {
            return home.to_path_buf();
        }
        if let Some(rest) = raw.strip_prefix(prefix).and_then(|r| r.strip_prefix('/')) {
            return home.join(rest);
        }
    }

    PathBuf::from(raw)
}

/// Sorted, de-duplicated absolute paths of every child directory of `parents`.
///
/// Parents that can't be read are logged and skipped so one stale entry
/// doesn't empty the whole list.
pub fn candidate_directories(parents: &[String], home: Option<&Path>) -> Vec<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let mut candidates = BTreeSet::new();

    for parent in parents {
        let mut parent_path = expand_home(parent, home);
        if parent_path.is_relative() {
            if let Some(cwd) = &cwd {
                parent_path = cwd.join(parent_path);
            }
        }

        let entries = match fs::read_dir(&parent_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", parent_path.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                candidates.insert(path);
            }
        }
    }

    candidates.into_iter().collect()
}

// ABOUTME: Resolves a tmux server's identity into one canonical socket
//
// tmux addresses a server either by socket name (-L, under the per-user
// socket directory) or by socket path (-S). Resolution always produces both,
// with the path taking precedence the same way tmux itself does.

use std::fmt;
use std::path::{Path, PathBuf};

/// Name tmux uses when no socket is specified
pub const DEFAULT_SOCKET_NAME: &str = "default";

/// Environment override for the socket root directory
pub const SOCKET_ROOT_ENV: &str = "TMUX_TMPDIR";

/// Socket root used when the override is not set
pub const DEFAULT_SOCKET_ROOT: &str = "/tmp";

/// Prefix of the per-user socket directory (`tmux-<uid>`)
const SOCKET_DIR_PREFIX: &str = "tmux";

/// Inputs the resolver needs from the process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketEnv {
    pub uid: u32,
    pub socket_root: PathBuf,
}

impl SocketEnv {
    pub fn new(uid: u32, socket_root: impl Into<PathBuf>) -> Self {
        Self {
            uid,
            socket_root: socket_root.into(),
        }
    }

    /// Read the real UID and `TMUX_TMPDIR` (falling back to `/tmp`)
    pub fn from_env() -> Self {
        let socket_root = std::env::var_os(SOCKET_ROOT_ENV)
            .filter(|root| !root.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SOCKET_ROOT), PathBuf::from);
        Self {
            uid: nix::unistd::getuid().as_raw(),
            socket_root,
        }
    }

    /// `{socket_root}/tmux-{uid}`
    pub fn socket_dir(&self) -> PathBuf {
        self.socket_root
            .join(format!("{SOCKET_DIR_PREFIX}-{}", self.uid))
    }

    /// Socket path for a named server
    pub fn socket_path(&self, name: &str) -> PathBuf {
        self.socket_dir().join(name)
    }

    /// The default server's `(name, path)` pair
    pub fn default_server(&self) -> ServerRef {
        ServerRef {
            socket_name: DEFAULT_SOCKET_NAME.to_string(),
            socket_path: self.socket_path(DEFAULT_SOCKET_NAME),
        }
    }
}

/// Identity of one tmux server; both fields are always populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRef {
    pub socket_name: String,
    pub socket_path: PathBuf,
}

impl ServerRef {
    /// Resolve user-supplied socket name and/or path into a canonical server.
    ///
    /// A non-default path wins and its final component becomes the name.
    /// Otherwise a non-default name is placed under the socket directory.
    /// Otherwise both fall back to the default server.
    pub fn resolve(name: Option<&str>, path: Option<&str>, env: &SocketEnv) -> Self {
        let default = env.default_server();

        if let Some(path) = path.filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            if path != default.socket_path {
                return Self {
                    socket_name: final_component(&path),
                    socket_path: path,
                };
            }
        }

        if let Some(name) = name.filter(|n| !n.is_empty() && *n != DEFAULT_SOCKET_NAME) {
            return Self {
                socket_name: name.to_string(),
                socket_path: env.socket_path(name),
            };
        }

        default
    }

    /// Server the current client is attached to, from a `$TMUX` value
    /// (`socket_path,pid,session_index`)
    pub fn from_tmux_env(value: &str) -> Option<Self> {
        let socket_path = value.split(',').next().filter(|p| !p.is_empty())?;
        let socket_path = PathBuf::from(socket_path);
        Some(Self {
            socket_name: final_component(&socket_path),
            socket_path,
        })
    }

    /// Server the current process is running inside, if any
    pub fn current() -> Option<Self> {
        std::env::var("TMUX")
            .ok()
            .and_then(|value| Self::from_tmux_env(&value))
    }
}

impl fmt::Display for ServerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.socket_name,
            self.socket_path.display()
        )
    }
}

fn final_component(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

// ABOUTME: Resolves a picker selection into a session switch
//
// An existing-session choice is re-checked right before switching and a
// missing session is reported, never recreated. A directory choice creates
// the session first (or reuses one of the same name) and switches to the
// name tmux reports back.

use thiserror::Error;
use tracing::{info, warn};

use crate::picker::{PickerError, PickerOutcome, Selection, SessionPicker};
use crate::tmux::session::sanitize_session_name;
use crate::tmux::{CommandRunner, TmuxError, TmuxServer};

#[derive(Error, Debug)]
pub enum SwitchError {
    /// The chosen session was gone by the time we tried to switch
    #[error("Session {0:?} no longer exists")]
    SessionVanished(String),

    #[error(transparent)]
    Tmux(#[from] TmuxError),

    #[error(transparent)]
    Picker(#[from] PickerError),
}

/// Switch the current client according to `selection`.
///
/// Returns the name of the session switched to.
pub async fn switch_to<R: CommandRunner>(
    server: &TmuxServer<R>,
    selection: &Selection,
) -> Result<String, SwitchError> {
    let name = match selection {
        Selection::ExistingSession { name } => {
            if !server.session_exists(name).await {
                warn!("Session '{}' disappeared before switching", name);
                return Err(SwitchError::SessionVanished(name.clone()));
            }
            name.clone()
        }
        Selection::NewSession {
            name,
            working_directory,
        } => {
            let sanitized = sanitize_session_name(name)?;
            if server.session_exists(&sanitized).await {
                info!("Session '{}' already exists, reusing it", sanitized);
                sanitized
            } else {
                server.create_session(name, working_directory).await?.name
            }
        }
    };

    server.switch_client(&name).await?;
    Ok(name)
}

/// Run the picker over the server's sessions and act on the choice.
///
/// Returns `None` when the user cancelled; no tmux command is issued then.
pub async fn pick_and_switch<R, P>(
    server: &TmuxServer<R>,
    picker: &P,
) -> Result<Option<String>, SwitchError>
where
    R: CommandRunner,
    P: SessionPicker + ?Sized,
{
    let candidates = server
        .list_sessions()
        .await?
        .into_iter()
        .map(|session| session.name)
        .collect();

    match picker.select(candidates).await? {
        PickerOutcome::Cancelled => {
            info!("Picker cancelled, nothing to do");
            Ok(None)
        }
        PickerOutcome::Selected(selection) => {
            info!("Picked '{}'", selection.name());
            switch_to(server, &selection).await.map(Some)
        }
    }
}

// ABOUTME: CLI list command - list a tmux server's sessions
//
// Shows: session name, window count, working directory. A server that is not
// running lists as empty.

use anyhow::{Context, Result};

use super::{OutputFormat, SocketArgs};
use flow::tmux::SessionRecord;

/// Execute the list command
pub async fn execute(args: SocketArgs, format: OutputFormat) -> Result<()> {
    let server = args.connect()?;

    let sessions = match server.list_sessions().await {
        Ok(sessions) => sessions,
        Err(e) if e.is_no_sessions() => Vec::new(),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Error while listing sessions on {}", server.socket()))
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sessions)?),
        OutputFormat::Text => print!("{}", render_table(&sessions)),
    }

    Ok(())
}

/// Render sessions as a text table
fn render_table(sessions: &[SessionRecord]) -> String {
    if sessions.is_empty() {
        return "No sessions found.\n".to_string();
    }

    let name_width = sessions
        .iter()
        .map(|session| session.name.chars().count())
        .max()
        .unwrap_or_default()
        .max("NAME".len());

    let mut table = format!("{:<name_width$}  {:>7}  PATH\n", "NAME", "WINDOWS");
    for session in sessions {
        table.push_str(&format!(
            "{:<name_width$}  {:>7}  {}\n",
            session.name,
            session.window_count,
            session.working_directory.display()
        ));
    }
    table
}

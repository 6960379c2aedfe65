// ABOUTME: CLI find command - print candidate directories, one per line
//
// Used as the popup's reload source for the common-dirs view.

use anyhow::Result;
use std::io::{self, Write};

use flow::config::FlowConfig;
use flow::find::candidate_directories;

/// Execute the find command
#[allow(clippy::unused_async)] // Async for consistency with other CLI commands
pub async fn execute(config: &FlowConfig) -> Result<()> {
    let home = dirs::home_dir();
    let directories = candidate_directories(&config.find.dirs, home.as_deref());

    let mut stdout = io::stdout().lock();
    for directory in directories {
        writeln!(stdout, "{}", directory.display())?;
    }
    stdout.flush()?;
    Ok(())
}

// ABOUTME: Behavioral tests for configuration loading
// Verifies a full config file reaches the popup unchanged

use anyhow::Result;
use flow::config::FlowConfig;
use flow::picker::Picker;
use flow::tmux::{ServerRef, SocketEnv};
use std::fs;
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
[flow]
init_session_name = "home"

[fzf-tmux]
width = "70%"
length = "50%"
border = "sharp"
preview_pos = "bottom"
preview_size = "40%"
preview_border = "double"
preview_dir_cmd = ["tree", "-L", "1"]

[find]
dirs = ["~/src", "/opt/work"]
"#;

#[test]
fn test_full_config_file_round_trips_into_popup() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, FULL_CONFIG)?;

    let config = FlowConfig::load(Some(&path))?;
    assert_eq!(config.flow.init_session_name, "home");
    assert_eq!(config.find.dirs, vec!["~/src", "/opt/work"]);

    let env = SocketEnv::new(1000, "/tmp");
    let picker = Picker::with_binary(
        "fzf-tmux",
        config.popup,
        ServerRef::resolve(None, None, &env),
        "flow find".to_string(),
    );
    let args = picker.args();

    let value_of = |flag: &str| {
        args.iter()
            .position(|arg| arg == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };
    assert_eq!(value_of("-p").as_deref(), Some("70%,50%"));
    assert_eq!(value_of("--border").as_deref(), Some("sharp"));
    assert_eq!(
        value_of("--preview-window").as_deref(),
        Some("bottom,40%,border-double")
    );
    assert!(args
        .iter()
        .any(|arg| arg.contains("change-preview~tree -L 1 {}~")));
    Ok(())
}

#[test]
fn test_empty_config_file_uses_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "")?;

    assert_eq!(FlowConfig::load(Some(&path))?, FlowConfig::default());
    Ok(())
}

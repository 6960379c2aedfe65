// ABOUTME: Behavioral tests for candidate directory discovery
//
// Every directory `find` reports must come back from the picker as a
// new-session choice named after the directory.

use anyhow::Result;
use flow::config::FlowConfig;
use flow::find::candidate_directories;
use flow::picker::Selection;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_configured_parents_feed_new_session_choices() -> Result<()> {
    let home = TempDir::new()?;
    let work = TempDir::new()?;
    fs::create_dir_all(home.path().join("code/flow"))?;
    fs::create_dir_all(home.path().join("code/dotfiles"))?;
    fs::create_dir_all(work.path().join("api.v2"))?;
    fs::write(home.path().join("code/README"), "file, not a candidate")?;

    let mut config = FlowConfig::default();
    config.find.dirs = vec!["~/code".to_string(), work.path().display().to_string()];

    let found = candidate_directories(&config.find.dirs, Some(home.path()));
    assert_eq!(found.len(), 3);

    let mut names = Vec::new();
    for dir in &found {
        match Selection::classify(&dir.display().to_string()) {
            Some(Selection::NewSession {
                name,
                working_directory,
            }) => {
                assert_eq!(&working_directory, dir);
                names.push(name);
            }
            other => panic!("{} classified as {other:?}", dir.display()),
        }
    }
    names.sort();
    assert_eq!(names, vec!["api.v2", "dotfiles", "flow"]);
    Ok(())
}

#[test]
fn test_unreadable_parent_does_not_hide_others() -> Result<()> {
    let root = TempDir::new()?;
    fs::create_dir_all(root.path().join("projects/site"))?;

    let parents = vec![
        root.path().join("gone").display().to_string(),
        root.path().join("projects").display().to_string(),
    ];

    let found = candidate_directories(&parents, None);
    assert_eq!(found, vec![root.path().join("projects/site")]);
    Ok(())
}

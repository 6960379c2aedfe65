// ABOUTME: Behavioral tests for tmux server and session lifecycle
//
// Tests verify server start, session creation with sanitized names, exact-name
// lookups and the no-server error classification. All tests are conditional
// on tmux availability.

use super::fixtures::TestServer;
use crate::require_tmux;
use anyhow::Result;
use flow::tmux::TmuxError;

#[tokio::test]
async fn test_start_creates_init_session() -> Result<()> {
    require_tmux!();

    let fixture = TestServer::new()?;
    let server = fixture.handle()?;

    server.start("init").await?;

    assert!(server.session_exists("init").await);
    let sessions = server.list_sessions().await?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].name, "init");
    assert!(sessions[0].window_count >= 1);
    Ok(())
}

#[tokio::test]
async fn test_create_session_sanitizes_name_and_sets_directory() -> Result<()> {
    require_tmux!();

    let fixture = TestServer::new()?;
    let server = fixture.handle()?;
    let project = fixture.project_dir("my.proj")?;

    let record = server.create_session("my.proj", &project).await?;

    assert_eq!(record.name, "my_proj");
    assert_eq!(record.working_directory, project);
    assert!(record.id.starts_with('$'));
    assert!(server.session_exists("my_proj").await);
    assert!(!server.session_exists("my.proj").await);
    Ok(())
}

#[tokio::test]
async fn test_lookup_is_exact_not_prefix() -> Result<()> {
    require_tmux!();

    let fixture = TestServer::new()?;
    let server = fixture.handle()?;
    let project = fixture.project_dir("project")?;

    server.create_session("project", &project).await?;

    assert!(server.session_exists("project").await);
    assert!(!server.session_exists("proj").await);
    assert!(matches!(
        server.get_session("proj").await,
        Err(TmuxError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_sessions_listed_in_server_order() -> Result<()> {
    require_tmux!();

    let fixture = TestServer::new()?;
    let server = fixture.handle()?;

    server.start("alpha").await?;
    server.create_session("beta", &fixture.project_dir("beta")?).await?;

    let names: Vec<String> = server
        .list_sessions()
        .await?
        .into_iter()
        .map(|session| session.name)
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    Ok(())
}

#[tokio::test]
async fn test_listing_without_server_is_no_sessions() -> Result<()> {
    require_tmux!();

    let fixture = TestServer::new()?;
    let server = fixture.handle()?;

    let err = server.list_sessions().await.unwrap_err();
    assert!(err.is_no_sessions(), "unexpected error: {err}");
    assert!(!server.session_exists("anything").await);
    Ok(())
}

mod common;

use anyhow::{Context, Result};

use catalog::gateway::{CatalogGateway, GatewayError};
use catalog::model::{ContentId, CreatorId};

#[test]
fn creators_and_content_roundtrip_through_the_api() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;

    let alice = gw.create_creator("Alice")?;
    assert_eq!(alice.name, "Alice");
    assert_eq!(gw.list_creators()?.len(), 1);

    let clip = gw.create_content("Intro", "video", alice.id)?;
    assert_eq!(clip.owner, alice.id);
    assert_eq!(clip.kind, "video");
    assert!(clip.file_path.is_none());

    let listed = gw.list_content_by_creator(alice.id)?;
    assert_eq!(listed, vec![clip.clone()]);
    assert_eq!(gw.count_content_by_creator(alice.id)?, 1);

    // The server reports the count on the creator row too.
    let rows = gw.list_creators()?;
    assert_eq!(rows[0].content_count, 1);

    Ok(())
}

#[test]
fn partial_update_keeps_omitted_fields() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;

    let bob = gw.create_creator("Bob")?;
    let item = gw.create_content("Song", "audio", bob.id)?;

    let updated = gw.update_content(item.id, Some("   "), Some("podcast"))?;
    assert_eq!(updated.title, "Song");
    assert_eq!(updated.kind, "podcast");

    let updated = gw.update_content(item.id, Some("Song (live)"), None)?;
    assert_eq!(updated.title, "Song (live)");
    assert_eq!(updated.kind, "podcast");

    Ok(())
}

#[test]
fn deletes_treat_missing_records_as_done() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;

    gw.delete_creator(CreatorId(999))?;
    gw.delete_content(ContentId(999))?;

    let carol = gw.create_creator("Carol")?;
    gw.create_content("One", "video", carol.id)?;
    gw.delete_creator(carol.id)?;
    assert!(gw.list_creators()?.is_empty());

    let err = gw
        .list_content_by_creator(carol.id)
        .expect_err("creator is gone");
    let GatewayError::Status { status, .. } = err else {
        anyhow::bail!("unexpected error: {err}");
    };
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[test]
fn create_content_for_unknown_creator_is_a_status_error() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;

    let err = gw
        .create_content("Orphan", "video", CreatorId(7))
        .expect_err("no such creator");
    match err {
        GatewayError::Status { status, .. } => assert_eq!(status, reqwest::StatusCode::NOT_FOUND),
        other => anyhow::bail!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn upload_then_download_serves_the_stored_bytes() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;
    let tmp = tempfile::tempdir().context("fixture dir")?;
    let path = common::fixture_file(tmp.path(), "theme.mp3", b"ID3-not-really-audio")?;

    let dana = gw.create_creator("Dana")?;
    let item = gw.create_content("Theme", "audio", dana.id)?;
    gw.upload_file(item.id, &path)?;

    let listed = gw.list_content_by_creator(dana.id)?;
    let stored = listed[0].file_path.clone().context("file path set")?;
    assert_eq!(stored, format!("{}_theme.mp3", item.id));
    assert_eq!(listed[0].media_type.as_deref(), Some("audio/mp3"));
    assert!(guard.data_dir.join(&stored).is_file());

    let resp = reqwest::blocking::get(gw.download_url(&stored)).context("GET download")?;
    assert!(resp.status().is_success());
    let ct = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(ct.as_deref(), Some("audio/mp3"));
    assert_eq!(resp.bytes()?.as_ref(), b"ID3-not-really-audio");

    Ok(())
}

#[test]
fn upload_of_missing_file_never_reaches_the_server() -> Result<()> {
    let guard = common::spawn_server()?;
    let gw = common::gateway(&guard)?;
    let tmp = tempfile::tempdir().context("fixture dir")?;

    let err = gw
        .upload_file(ContentId(1), &tmp.path().join("absent.mp4"))
        .expect_err("missing file");
    assert!(matches!(err, GatewayError::MissingFile { .. }));
    Ok(())
}

#[test]
fn unreachable_server_is_a_transport_error() -> Result<()> {
    // Port 9 (discard) is assumed closed on test hosts.
    let gw = catalog::gateway::RemoteCatalogGateway::new(
        "http://127.0.0.1:9/",
        std::time::Duration::from_secs(2),
    )?;
    let err = gw.list_creators().expect_err("nothing listening");
    assert!(matches!(err, GatewayError::Transport { .. }));
    Ok(())
}

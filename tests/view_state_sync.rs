mod common;

use anyhow::{Context, Result};

use catalog::gateway::CatalogGateway;
use catalog::state::{CatalogError, CatalogEvent, CatalogViewState};

fn view_state(guard: &common::ServerGuard) -> Result<CatalogViewState> {
    Ok(CatalogViewState::new(Box::new(common::gateway(guard)?)))
}

#[test]
fn counts_follow_mutations_across_focus_changes() -> Result<()> {
    let guard = common::spawn_server()?;
    let mut state = view_state(&guard)?;

    let alice = state.create_creator("Alice")?;
    let bob = state.create_creator("Bob")?;
    assert_eq!(state.status(), "Creator added.");

    state.focus(alice.id)?;
    let a1 = state.create_content("Intro", "video", None)?;
    state.create_content("Outro", "video", None)?;
    state.create_content("Jingle", "audio", Some(bob.id))?;

    // Content for an unfocused creator is not shown but is counted.
    assert_eq!(state.content().len(), 2);
    assert_eq!(state.creator(alice.id).map(|c| c.content_count), Some(2));
    assert_eq!(state.creator(bob.id).map(|c| c.content_count), Some(1));

    state.delete_content(a1.id)?;
    assert_eq!(state.creator(alice.id).map(|c| c.content_count), Some(1));

    state.focus(bob.id)?;
    assert_eq!(state.content().len(), 1);
    assert_eq!(state.content()[0].title, "Jingle");

    // A fresh reload agrees with the local bookkeeping.
    let mut fresh = view_state(&guard)?;
    fresh.reload_creators()?;
    let counts: Vec<(String, u32)> = fresh
        .creators()
        .iter()
        .map(|c| (c.name.clone(), c.content_count))
        .collect();
    assert_eq!(
        counts,
        vec![("Alice".to_string(), 1), ("Bob".to_string(), 1)]
    );

    Ok(())
}

#[test]
fn deletes_already_applied_by_another_client_succeed() -> Result<()> {
    let guard = common::spawn_server()?;
    let mut state = view_state(&guard)?;
    let other = common::gateway(&guard)?;

    let dave = state.create_creator("Dave")?;
    state.focus(dave.id)?;
    let item = state.create_content("Gone", "video", None)?;
    assert_eq!(state.creator(dave.id).map(|c| c.content_count), Some(1));

    // The server answers 404 from here on.
    other.delete_content(item.id)?;
    state.delete_content(item.id)?;
    assert!(state.content_item(item.id).is_none());
    assert_eq!(state.creator(dave.id).map(|c| c.content_count), Some(0));
    assert_eq!(state.status(), "Content removed.");

    other.delete_creator(dave.id)?;
    state.delete_creator(dave.id)?;
    assert!(state.creator(dave.id).is_none());
    assert_eq!(state.status(), "Creator removed.");

    Ok(())
}

#[test]
fn edit_cancel_and_commit_against_the_server() -> Result<()> {
    let guard = common::spawn_server()?;
    let mut state = view_state(&guard)?;

    let carol = state.create_creator("Carol")?;
    state.focus(carol.id)?;
    let item = state.create_content("Draft", "video", None)?;
    state.create_content("Other", "audio", None)?;

    state.begin_edit(item.id)?;
    state.edit_draft(item.id, Some("Renamed"), Some("clip"))?;
    state.cancel_edit(item.id)?;
    let shown = state.content_item(item.id).context("still listed")?;
    assert_eq!(
        (shown.title.as_str(), shown.kind.as_str()),
        ("Draft", "video")
    );
    assert!(!shown.is_editing());

    state.begin_edit(item.id)?;
    state.edit_draft(item.id, Some("Final"), None)?;
    let saved = state.commit_edit(item.id)?;
    assert_eq!(saved.title, "Final");
    assert_eq!(state.content()[0].id, item.id, "position preserved");
    assert!(!state.content()[0].is_editing());

    let remote = state.gateway().list_content_by_creator(carol.id)?;
    assert_eq!(remote[0].title, "Final");
    assert_eq!(remote[0].kind, "video");

    Ok(())
}

#[test]
fn upload_refreshes_the_focused_list() -> Result<()> {
    let guard = common::spawn_server()?;
    let mut state = view_state(&guard)?;
    let events = state.subscribe();
    let tmp = tempfile::tempdir().context("fixture dir")?;
    let path = common::fixture_file(tmp.path(), "clip.mp4", b"not really video")?;

    let dana = state.create_creator("Dana")?;
    state.focus(dana.id)?;
    let item = state.create_content("Clip", "video", None)?;

    assert!(matches!(
        state.download_url(item.id),
        Err(CatalogError::NoStoredFile(_))
    ));

    state.forms_mut().selected_file = Some(path);
    state.upload_selected(item.id)?;
    assert_eq!(state.status(), "File uploaded.");
    assert!(state.forms().selected_file.is_none());

    let shown = state.content_item(item.id).context("listed")?;
    assert_eq!(shown.media_type.as_deref(), Some("video/mp4"));
    let url = state.download_url(item.id)?;
    assert!(url.starts_with(&guard.base_url));
    let expected = format!("api/arquivos/download/{}_clip.mp4", item.id);
    assert!(url.ends_with(&expected));

    let statuses: Vec<String> = events
        .try_iter()
        .filter_map(|e| match e {
            CatalogEvent::Status(s) => Some(s),
            _ => None,
        })
        .collect();
    assert!(statuses.iter().any(|s| s == "Uploading file..."));
    assert_eq!(statuses.last().map(String::as_str), Some("File uploaded."));

    Ok(())
}

#[test]
fn failures_leave_the_mirror_untouched() -> Result<()> {
    let guard = common::spawn_server()?;
    let mut state = view_state(&guard)?;

    let erin = state.create_creator("Erin")?;
    state.focus(erin.id)?;
    state.create_content("Keep", "audio", None)?;

    // Someone else removes the creator; creating content now fails server side.
    state.gateway().delete_creator(erin.id)?;
    let err = state
        .create_content("Lost", "audio", None)
        .expect_err("owner gone");
    assert!(matches!(err, CatalogError::Gateway(_)));
    assert!(state.status().starts_with("Failed to add content:"));
    assert_eq!(state.content().len(), 1);
    assert_eq!(state.creator(erin.id).map(|c| c.content_count), Some(1));

    Ok(())
}

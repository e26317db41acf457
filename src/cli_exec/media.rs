use std::path::Path;

use catalog::launcher::{LaunchOutcome, Launcher, MediaClass, ProcessSpawner};

use super::*;

pub(super) fn handle_upload_command(ctx: &CliContext, id: ContentId, path: &Path) -> Result<()> {
    ctx.gateway()?
        .upload_file(id, path)
        .with_context(|| format!("upload {} for content {}", path.display(), id))?;
    println!("File uploaded");
    Ok(())
}

pub(super) fn handle_play_command(
    ctx: &CliContext,
    creator: CreatorId,
    id: ContentId,
) -> Result<()> {
    let state = focused_state(ctx, creator)?;
    let url = state.download_url(id)?;
    let file_path = state
        .content_item(id)
        .and_then(|c| c.file_path.clone())
        .unwrap_or_default();
    let class = MediaClass::of(&file_path);

    let launcher = Launcher::from_env(ctx.settings.players.clone());
    match launcher.play(&file_path, &url, &mut ProcessSpawner) {
        LaunchOutcome::Started { program } => {
            println!("Playing {} with {}", class.label(), program);
            Ok(())
        }
        LaunchOutcome::NoPlayer { tried } => {
            anyhow::bail!(
                "no {} player found (tried: {}); use `catalog download {} {}`",
                class.label(),
                if tried.is_empty() { "none".to_string() } else { tried.join(", ") },
                creator,
                id
            )
        }
    }
}

pub(super) fn handle_download_command(
    ctx: &CliContext,
    creator: CreatorId,
    id: ContentId,
) -> Result<()> {
    let state = focused_state(ctx, creator)?;
    let url = state.download_url(id)?;
    let launcher = Launcher::from_env(ctx.settings.players.clone());
    match launcher.open_url(&url, &mut ProcessSpawner) {
        LaunchOutcome::Started { .. } => println!("Download started: {}", url),
        LaunchOutcome::NoPlayer { .. } => println!("{}", url),
    }
    Ok(())
}

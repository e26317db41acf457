use anyhow::{Context, Result};

use catalog::gateway::{CatalogGateway, UpdateContentRequest};
use catalog::model::{ContentId, ContentItem, CreatorId};
use catalog::state::CatalogViewState;

use crate::Commands;
use crate::cli_runtime::CliContext;
use crate::cli_subcommands::{ConfigCommands, ContentCommands, CreatorCommands};

mod config;
mod listing;
mod media;
mod mutations;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Creators { json } => listing::handle_creators_command(ctx, json)?,
        Commands::Creator { command } => match command {
            CreatorCommands::Add { name } => mutations::handle_creator_add(ctx, &name)?,
            CreatorCommands::Rm { creator_id } => {
                mutations::handle_creator_rm(ctx, CreatorId(creator_id))?
            }
        },
        Commands::Content { command } => match command {
            ContentCommands::List { creator_id, json } => {
                listing::handle_content_list_command(ctx, CreatorId(creator_id), json)?
            }
            ContentCommands::Add {
                creator_id,
                title,
                kind,
            } => mutations::handle_content_add(ctx, CreatorId(creator_id), &title, &kind)?,
            ContentCommands::Edit {
                content_id,
                title,
                kind,
            } => mutations::handle_content_edit(
                ctx,
                ContentId(content_id),
                title.as_deref(),
                kind.as_deref(),
            )?,
            ContentCommands::Rm { content_id } => {
                mutations::handle_content_rm(ctx, ContentId(content_id))?
            }
        },
        Commands::Upload { content_id, path } => {
            media::handle_upload_command(ctx, ContentId(content_id), &path)?
        }
        Commands::Url { path } => {
            let gateway = ctx.gateway()?;
            println!("{}", gateway.download_url(&path));
        }
        Commands::Play {
            creator_id,
            content_id,
        } => media::handle_play_command(ctx, CreatorId(creator_id), ContentId(content_id))?,
        Commands::Download {
            creator_id,
            content_id,
        } => media::handle_download_command(ctx, CreatorId(creator_id), ContentId(content_id))?,
        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => config::handle_config_show(ctx, json)?,
            ConfigCommands::SetUrl { url } => config::handle_config_set_url(ctx, &url)?,
        },
    }
    Ok(())
}

/// View state with creators loaded and `creator` focused.
fn focused_state(ctx: &CliContext, creator: CreatorId) -> Result<CatalogViewState> {
    let mut state = CatalogViewState::new(Box::new(ctx.gateway()?));
    state.reload_creators().context("load creators")?;
    state
        .focus(creator)
        .with_context(|| format!("load content for creator {}", creator))?;
    Ok(state)
}

fn print_content_line(item: &ContentItem) {
    let file = item.file_path.as_deref().unwrap_or("-");
    println!("{}\t{}\t{}\t{}", item.id, item.title, item.kind, file);
}

use super::*;

pub(super) fn handle_creator_add(ctx: &CliContext, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("creator name must not be blank");
    }
    let created = ctx.gateway()?.create_creator(name)?;
    println!("{}", created.id);
    Ok(())
}

pub(super) fn handle_creator_rm(ctx: &CliContext, id: CreatorId) -> Result<()> {
    ctx.gateway()?
        .delete_creator(id)
        .with_context(|| format!("remove creator {}", id))?;
    println!("Removed creator {}", id);
    Ok(())
}

pub(super) fn handle_content_add(
    ctx: &CliContext,
    creator: CreatorId,
    title: &str,
    kind: &str,
) -> Result<()> {
    let mut state = CatalogViewState::new(Box::new(ctx.gateway()?));
    let created = state.create_content(title, kind, Some(creator))?;
    println!("{}", created.id);
    Ok(())
}

pub(super) fn handle_content_edit(
    ctx: &CliContext,
    id: ContentId,
    title: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    if UpdateContentRequest::partial(title, kind).is_empty() {
        anyhow::bail!("nothing to change (pass --title and/or --kind)");
    }
    let updated = ctx
        .gateway()?
        .update_content(id, title, kind)
        .with_context(|| format!("update content {}", id))?;
    print_content_line(&updated);
    Ok(())
}

pub(super) fn handle_content_rm(ctx: &CliContext, id: ContentId) -> Result<()> {
    ctx.gateway()?
        .delete_content(id)
        .with_context(|| format!("remove content {}", id))?;
    println!("Removed content {}", id);
    Ok(())
}

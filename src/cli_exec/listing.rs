use super::*;

pub(super) fn handle_creators_command(ctx: &CliContext, json: bool) -> Result<()> {
    let mut state = CatalogViewState::new(Box::new(ctx.gateway()?));
    state.reload_creators().context("load creators")?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(state.creators()).context("serialize creators json")?
        );
        return Ok(());
    }

    if state.creators().is_empty() {
        println!("No creators");
        return Ok(());
    }
    for c in state.creators() {
        println!("{}\t{}\t{} items", c.id, c.name, c.content_count);
    }
    Ok(())
}

pub(super) fn handle_content_list_command(
    ctx: &CliContext,
    creator: CreatorId,
    json: bool,
) -> Result<()> {
    let state = focused_state(ctx, creator)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(state.content()).context("serialize content json")?
        );
        return Ok(());
    }

    if state.content().is_empty() {
        println!("No content");
        return Ok(());
    }
    for item in state.content() {
        print_content_line(item);
    }
    Ok(())
}

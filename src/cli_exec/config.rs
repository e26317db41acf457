use catalog::gateway::normalize_base_url;

use super::*;

pub(super) fn handle_config_show(ctx: &CliContext, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ctx.settings).context("serialize settings json")?
        );
        return Ok(());
    }
    println!("file: {}", ctx.store.path().display());
    println!("url: {}", ctx.settings.base_url);
    if ctx.base_url() != ctx.settings.base_url {
        println!("url (this run): {}", ctx.base_url());
    }
    println!("timeout: {}s", ctx.settings.timeout_secs);
    for p in &ctx.settings.players {
        println!("player: {} {}", p.program, p.args.join(" "));
    }
    Ok(())
}

pub(super) fn handle_config_set_url(ctx: &CliContext, url: &str) -> Result<()> {
    let url = normalize_base_url(url)?;
    let mut settings = ctx.settings.clone();
    settings.base_url = url.clone();
    ctx.store.save(&settings)?;
    println!("Base URL set to {}", url);
    Ok(())
}

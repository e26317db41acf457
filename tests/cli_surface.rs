mod common;

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

fn run_catalog(config_dir: &Path, args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_catalog"))
        .args(args)
        .env("CATALOG_CONFIG_DIR", config_dir)
        .env_remove("CATALOG_BASE_URL")
        .output()
        .with_context(|| format!("run catalog {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "catalog {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

fn run_catalog_failing(config_dir: &Path, args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_catalog"))
        .args(args)
        .env("CATALOG_CONFIG_DIR", config_dir)
        .env_remove("CATALOG_BASE_URL")
        .output()
        .with_context(|| format!("run catalog {:?}", args))?;

    if out.status.success() {
        anyhow::bail!("catalog {:?} succeeded but was expected to fail", args);
    }

    Ok(String::from_utf8_lossy(&out.stderr).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let cfg = tempfile::tempdir()?;
    let help = run_catalog(cfg.path(), &["--help"])?;
    assert!(help.contains("Usage: catalog"));
    assert!(help.contains("[COMMAND]"));
    for cmd in ["creators", "creator", "content", "upload", "play", "download", "config"] {
        assert!(help.contains(cmd), "missing {cmd} in help");
    }

    let content_help = run_catalog(cfg.path(), &["content", "--help"])?;
    assert!(content_help.contains("Usage: catalog content"));
    assert!(content_help.contains("<COMMAND>"));
    assert!(content_help.contains("edit"));
    Ok(())
}

#[test]
fn cli_manages_creators_and_content() -> Result<()> {
    let guard = common::spawn_server()?;
    let cfg = tempfile::tempdir()?;
    let url = guard.base_url.as_str();

    let alice = run_catalog(cfg.path(), &["--base-url", url, "creator", "add", "Alice"])?;
    let alice = alice.trim();

    let item = run_catalog(
        cfg.path(),
        &["--base-url", url, "content", "add", alice, "Intro", "video"],
    )?;
    let item = item.trim();

    let json = run_catalog(cfg.path(), &["--base-url", url, "creators", "--json"])?;
    let creators: serde_json::Value = serde_json::from_str(&json).context("parse creators")?;
    assert_eq!(creators[0]["nome"], "Alice");
    assert_eq!(creators[0]["contagemConteudos"], 1);

    run_catalog(
        cfg.path(),
        &["--base-url", url, "content", "edit", item, "--kind", "clip"],
    )?;
    let listed = run_catalog(cfg.path(), &["--base-url", url, "content", "list", alice])?;
    assert!(listed.contains("Intro\tclip"), "got: {listed}");

    run_catalog(cfg.path(), &["--base-url", url, "content", "rm", item])?;
    let listed = run_catalog(cfg.path(), &["--base-url", url, "content", "list", alice])?;
    assert_eq!(listed.trim(), "No content");

    Ok(())
}

#[test]
fn content_edit_needs_a_non_blank_field() -> Result<()> {
    let cfg = tempfile::tempdir()?;
    // Port 9 (discard) is never contacted: the check runs before any request.
    let base = ["--base-url", "http://127.0.0.1:9/", "content", "edit", "5"];

    let none = run_catalog_failing(cfg.path(), &base)?;
    assert!(none.contains("nothing to change"), "got: {none}");

    let blank = [&base[..], &["--title", "  ", "--kind", ""]].concat();
    let blank = run_catalog_failing(cfg.path(), &blank)?;
    assert!(blank.contains("nothing to change"), "got: {blank}");
    Ok(())
}

#[test]
fn config_set_url_persists_normalized_url() -> Result<()> {
    let cfg = tempfile::tempdir()?;

    let out = run_catalog(
        cfg.path(),
        &["config", "set-url", "http://media.local:8080"],
    )?;
    assert!(out.contains("http://media.local:8080/"));

    let shown = run_catalog(cfg.path(), &["config", "show", "--json"])?;
    let v: serde_json::Value = serde_json::from_str(&shown).context("parse settings")?;
    assert_eq!(v["base_url"], "http://media.local:8080/");

    let link = run_catalog(cfg.path(), &["url", "/7_song.mp3"])?;
    assert_eq!(
        link.trim(),
        "http://media.local:8080/api/arquivos/download/7_song.mp3"
    );
    Ok(())
}

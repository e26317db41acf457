use std::path::PathBuf;

use crate::model::{ContentId, CreatorId};

#[derive(Clone, Copy, Debug)]
pub(super) struct CommandDef {
    pub(super) name: &'static str,
    pub(super) usage: &'static str,
    pub(super) help: &'static str,
}

pub(super) fn command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "reload",
            usage: "reload",
            help: "Reload creators (and the focused content list)",
        },
        CommandDef {
            name: "focus",
            usage: "focus <creator-id>",
            help: "Show a creator's content",
        },
        CommandDef {
            name: "unfocus",
            usage: "unfocus",
            help: "Clear the content pane",
        },
        CommandDef {
            name: "creator",
            usage: "creator add <name...> | creator rm <id>",
            help: "Add or remove a creator",
        },
        CommandDef {
            name: "add",
            usage: "add <title> <kind> [--for <creator-id>]",
            help: "Add content (quote titles with spaces)",
        },
        CommandDef {
            name: "edit",
            usage: "edit <content-id>",
            help: "Start editing an item",
        },
        CommandDef {
            name: "set",
            usage: "set <content-id> title|kind <value...>",
            help: "Change a field of an item being edited",
        },
        CommandDef {
            name: "save",
            usage: "save <content-id>",
            help: "Send the edited fields to the server",
        },
        CommandDef {
            name: "cancel",
            usage: "cancel <content-id>",
            help: "Drop local edits",
        },
        CommandDef {
            name: "rm",
            usage: "rm <content-id>",
            help: "Remove an item",
        },
        CommandDef {
            name: "file",
            usage: "file <path>",
            help: "Select a local file for upload",
        },
        CommandDef {
            name: "upload",
            usage: "upload <content-id>",
            help: "Upload the selected file to an item",
        },
        CommandDef {
            name: "play",
            usage: "play <content-id>",
            help: "Play the stored file",
        },
        CommandDef {
            name: "download",
            usage: "download <content-id>",
            help: "Open the stored file's download URL",
        },
        CommandDef {
            name: "url",
            usage: "url <base-url>",
            help: "Point the client at another server",
        },
        CommandDef {
            name: "help",
            usage: "help",
            help: "Show this help",
        },
        CommandDef {
            name: "quit",
            usage: "quit",
            help: "Exit",
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EditField {
    Title,
    Kind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Help,
    Quit,
    Reload,
    Focus(CreatorId),
    Unfocus,
    CreatorAdd(String),
    CreatorRm(CreatorId),
    Add {
        title: String,
        kind: String,
        target: Option<CreatorId>,
    },
    Edit(ContentId),
    Set {
        id: ContentId,
        field: EditField,
        value: String,
    },
    Save(ContentId),
    Cancel(ContentId),
    Rm(ContentId),
    File(PathBuf),
    Upload(ContentId),
    Play(ContentId),
    Download(ContentId),
    Url(String),
}

pub(super) fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let tokens = tokenize(line)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Err("empty command".to_string());
    };
    let head = head.trim_start_matches('/');

    let cmd = match head {
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        "reload" | "r" => ShellCommand::Reload,
        "focus" | "f" => ShellCommand::Focus(creator_arg(rest, 0)?),
        "unfocus" => ShellCommand::Unfocus,
        "creator" => match rest.first().map(String::as_str) {
            Some("add") => {
                let name = rest[1..].join(" ");
                if name.trim().is_empty() {
                    return Err("usage: creator add <name...>".to_string());
                }
                ShellCommand::CreatorAdd(name)
            }
            Some("rm") => ShellCommand::CreatorRm(creator_arg(rest, 1)?),
            _ => return Err("usage: creator add <name...> | creator rm <id>".to_string()),
        },
        "add" => parse_add(rest)?,
        "edit" | "e" => ShellCommand::Edit(content_arg(rest, 0)?),
        "set" => {
            let id = content_arg(rest, 0)?;
            let field = match rest.get(1).map(String::as_str) {
                Some("title") => EditField::Title,
                Some("kind") => EditField::Kind,
                _ => return Err("usage: set <content-id> title|kind <value...>".to_string()),
            };
            ShellCommand::Set {
                id,
                field,
                value: rest.get(2..).map(|v| v.join(" ")).unwrap_or_default(),
            }
        }
        "save" => ShellCommand::Save(content_arg(rest, 0)?),
        "cancel" => ShellCommand::Cancel(content_arg(rest, 0)?),
        "rm" => ShellCommand::Rm(content_arg(rest, 0)?),
        "file" => match rest {
            [path] => ShellCommand::File(PathBuf::from(path)),
            _ => return Err("usage: file <path> (quote paths with spaces)".to_string()),
        },
        "upload" => ShellCommand::Upload(content_arg(rest, 0)?),
        "play" => ShellCommand::Play(content_arg(rest, 0)?),
        "download" => ShellCommand::Download(content_arg(rest, 0)?),
        "url" => match rest {
            [url] => ShellCommand::Url(url.clone()),
            _ => return Err("usage: url <base-url>".to_string()),
        },
        other => return Err(format!("unknown command: {} (try `help`)", other)),
    };
    Ok(cmd)
}

fn parse_add(rest: &[String]) -> Result<ShellCommand, String> {
    const USAGE: &str = "usage: add <title> <kind> [--for <creator-id>]";
    let mut positional = Vec::new();
    let mut target = None;
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == "--for" {
            target = Some(creator_arg(rest, i + 1)?);
            i += 2;
            continue;
        }
        positional.push(rest[i].clone());
        i += 1;
    }
    match <[String; 2]>::try_from(positional) {
        Ok([title, kind]) => Ok(ShellCommand::Add {
            title,
            kind,
            target,
        }),
        Err(_) => Err(USAGE.to_string()),
    }
}

fn creator_arg(args: &[String], idx: usize) -> Result<CreatorId, String> {
    let raw = args.get(idx).ok_or("missing creator id")?;
    raw.parse()
        .map_err(|_| format!("invalid creator id: {}", raw))
}

fn content_arg(args: &[String], idx: usize) -> Result<ContentId, String> {
    let raw = args.get(idx).ok_or("missing content id")?;
    raw.parse()
        .map_err(|_| format!("invalid content id: {}", raw))
}

/// Whitespace-separated words; double quotes group, backslash escapes.
pub(super) fn tokenize(input: &str) -> Result<Vec<String>, String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut escape = false;

    for ch in input.chars() {
        if escape {
            cur.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !cur.is_empty() || quoted {
                    out.push(std::mem::take(&mut cur));
                    quoted = false;
                }
            }
            c => cur.push(c),
        }
    }

    if escape {
        return Err("dangling escape".to_string());
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if !cur.is_empty() || quoted {
        out.push(cur);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_quotes_and_escapes() {
        assert_eq!(
            tokenize(r#"add "My first clip" video"#).unwrap(),
            ["add", "My first clip", "video"]
        );
        assert_eq!(
            tokenize(r#"set 3 title "" "#).unwrap(),
            ["set", "3", "title", ""]
        );
        assert_eq!(tokenize(r"file a\ b.mp3").unwrap(), ["file", "a b.mp3"]);
        assert!(tokenize(r#"add "oops"#).is_err());
        assert!(tokenize("x \\").is_err());
    }

    #[test]
    fn parse_add_with_target() {
        assert_eq!(
            parse_command(r#"add "Live set" audio --for 4"#).unwrap(),
            ShellCommand::Add {
                title: "Live set".to_string(),
                kind: "audio".to_string(),
                target: Some(CreatorId(4)),
            }
        );
        assert_eq!(
            parse_command("add Demo video").unwrap(),
            ShellCommand::Add {
                title: "Demo".to_string(),
                kind: "video".to_string(),
                target: None,
            }
        );
        assert!(parse_command("add Demo").is_err());
        assert!(parse_command("add Demo video --for x").is_err());
    }

    #[test]
    fn parse_creator_and_set() {
        assert_eq!(
            parse_command("creator add Ada Lovelace").unwrap(),
            ShellCommand::CreatorAdd("Ada Lovelace".to_string())
        );
        assert_eq!(
            parse_command("creator rm 9").unwrap(),
            ShellCommand::CreatorRm(CreatorId(9))
        );
        assert_eq!(
            parse_command("set 2 kind live audio").unwrap(),
            ShellCommand::Set {
                id: ContentId(2),
                field: EditField::Kind,
                value: "live audio".to_string(),
            }
        );
        assert_eq!(
            parse_command("set 2 title").unwrap(),
            ShellCommand::Set {
                id: ContentId(2),
                field: EditField::Title,
                value: String::new(),
            }
        );
    }

    #[test]
    fn parse_errors_are_readable() {
        assert_eq!(parse_command("").unwrap_err(), "empty command");
        assert_eq!(parse_command("focus").unwrap_err(), "missing creator id");
        assert_eq!(
            parse_command("rm abc").unwrap_err(),
            "invalid content id: abc"
        );
        let err = parse_command("frobnicate").unwrap_err();
        assert!(err.starts_with("unknown command"));
    }

    #[test]
    fn every_command_has_help() {
        let defs = command_defs();
        for d in &defs {
            assert!(d.usage.starts_with(d.name), "{}", d.name);
        }
        assert!(defs.iter().any(|d| d.name == "quit"));
    }
}

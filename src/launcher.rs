//! Opening stored media with an external program.
//!
//! A play request walks an ordered chain of candidate commands and stops at
//! the first one that starts. Only process spawn is checked; what the player
//! does afterwards is not observed.

use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

const URL_PLACEHOLDER: &str = "{url}";

/// One candidate command. `{url}` in `args` is replaced by the media URL;
/// without a placeholder the URL is appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new<const N: usize>(program: &str, args: [&str; N]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn argv(&self, url: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace(URL_PLACEHOLDER, url))
            .collect();
        if !self.args.iter().any(|a| a.contains(URL_PLACEHOLDER)) {
            out.push(url.to_string());
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaClass {
    Audio,
    Video,
    Other,
}

impl MediaClass {
    pub fn of(file_path: &str) -> Self {
        let ext = std::path::Path::new(file_path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("mp3" | "wav") => MediaClass::Audio,
            Some("mp4" | "avi" | "mov") => MediaClass::Video,
            _ => MediaClass::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaClass::Audio => "audio",
            MediaClass::Video => "video",
            MediaClass::Other => "file",
        }
    }
}

pub trait Spawner {
    fn spawn(&mut self, program: &str, args: &[String]) -> std::io::Result<()>;
}

/// Detached child process with its output discarded.
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&mut self, program: &str, args: &[String]) -> std::io::Result<()> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started { program: String },
    NoPlayer { tried: Vec<String> },
}

/// Try each candidate in order; the first successful spawn wins.
pub fn launch_first(
    chain: &[PlayerCommand],
    url: &str,
    spawner: &mut dyn Spawner,
) -> LaunchOutcome {
    let mut tried = Vec::new();
    for cmd in chain {
        match spawner.spawn(&cmd.program, &cmd.argv(url)) {
            Ok(()) => {
                tracing::info!(program = %cmd.program, "player started");
                return LaunchOutcome::Started {
                    program: cmd.program.clone(),
                };
            }
            Err(err) => {
                tracing::debug!(program = %cmd.program, error = %err, "player unavailable");
                tried.push(cmd.program.clone());
            }
        }
    }
    LaunchOutcome::NoPlayer { tried }
}

#[derive(Clone, Debug)]
pub struct Launcher {
    overrides: Vec<PlayerCommand>,
    wsl: bool,
}

impl Launcher {
    pub fn new(overrides: Vec<PlayerCommand>, wsl: bool) -> Self {
        Self { overrides, wsl }
    }

    /// WSL is detected from `WSL_DISTRO_NAME`.
    pub fn from_env(overrides: Vec<PlayerCommand>) -> Self {
        Self::new(overrides, std::env::var_os("WSL_DISTRO_NAME").is_some())
    }

    pub fn chain(&self, class: MediaClass) -> Vec<PlayerCommand> {
        if !self.overrides.is_empty() {
            return self.overrides.clone();
        }
        if !self.wsl {
            return vec![system_opener()];
        }
        match class {
            MediaClass::Audio => vec![
                PlayerCommand::new("mpv", ["--no-video"]),
                PlayerCommand::new("vlc", ["--intf", "dummy"]),
                PlayerCommand::new("mplayer", []),
            ],
            MediaClass::Video => vec![
                PlayerCommand::new("mpv", []),
                PlayerCommand::new("vlc", []),
            ],
            MediaClass::Other => Vec::new(),
        }
    }

    pub fn play(&self, file_path: &str, url: &str, spawner: &mut dyn Spawner) -> LaunchOutcome {
        launch_first(&self.chain(MediaClass::of(file_path)), url, spawner)
    }

    /// Hand the URL to the desktop's default handler (browser download).
    pub fn open_url(&self, url: &str, spawner: &mut dyn Spawner) -> LaunchOutcome {
        launch_first(&[system_opener()], url, spawner)
    }
}

fn system_opener() -> PlayerCommand {
    if cfg!(target_os = "macos") {
        PlayerCommand::new("open", [])
    } else if cfg!(target_os = "windows") {
        PlayerCommand::new("cmd", ["/C", "start", "", "{url}"])
    } else {
        PlayerCommand::new("xdg-open", [])
    }
}

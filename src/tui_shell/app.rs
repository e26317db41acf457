use std::sync::mpsc::Receiver;

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::gateway::RemoteCatalogGateway;
use crate::launcher::{LaunchOutcome, Launcher, MediaClass, ProcessSpawner};
use crate::model::{ContentId, CreatorId};
use crate::settings::{ClientSettings, SettingsStore};
use crate::state::{CatalogEvent, CatalogViewState};

use super::commands::{EditField, ShellCommand, command_defs, parse_command};
use super::input::Input;

const LOG_LIMIT: usize = 200;
const NAV_HINT: &str = "Tab switches pane, Up/Down moves, Enter focuses or plays.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Pane {
    Creators,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EntryKind {
    Command,
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct LogEntry {
    pub(super) ts: String,
    pub(super) kind: EntryKind,
    pub(super) text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PendingAction {
    DeleteCreator(CreatorId),
    DeleteContent(ContentId),
}

#[derive(Clone, Debug)]
pub(super) enum ModalKind {
    Viewer,
    Confirm(PendingAction),
}

#[derive(Clone, Debug)]
pub(super) struct Modal {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) scroll: usize,
    pub(super) kind: ModalKind,
}

pub(super) struct App {
    pub(super) state: CatalogViewState,
    events: Receiver<CatalogEvent>,
    store: SettingsStore,
    pub(super) settings: ClientSettings,
    launcher: Launcher,

    pub(super) input: Input,
    pub(super) log: Vec<LogEntry>,
    pub(super) modal: Option<Modal>,

    pub(super) pane: Pane,
    pub(super) creator_cursor: usize,
    pub(super) content_cursor: usize,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn load(opts: &crate::tui::TuiRunOptions) -> Result<Self> {
        let store = SettingsStore::discover()?;
        let mut settings = store.load()?;
        if let Some(url) = &opts.base_url {
            settings.base_url = url.clone();
        }
        let gateway = RemoteCatalogGateway::new(&settings.base_url, settings.timeout())
            .context("configure catalog gateway")?;
        let mut state = CatalogViewState::new(Box::new(gateway));
        let events = state.subscribe();
        let launcher = Launcher::from_env(settings.players.clone());

        let mut app = Self {
            state,
            events,
            store,
            settings,
            launcher,
            input: Input::default(),
            log: Vec::new(),
            modal: None,
            pane: Pane::Creators,
            creator_cursor: 0,
            content_cursor: 0,
            quit: false,
        };
        let _ = app.state.reload_creators();
        app.pump_events();
        Ok(app)
    }

    /// Fold state events into the activity log and keep cursors in range.
    pub(super) fn pump_events(&mut self) {
        while let Ok(ev) = self.events.try_recv() {
            match ev {
                CatalogEvent::Status(text) => {
                    let kind = if text.starts_with("Failed") {
                        EntryKind::Error
                    } else {
                        EntryKind::Output
                    };
                    self.push_log(kind, text);
                }
                CatalogEvent::FocusChanged(Some(id)) => {
                    if let Some(pos) = self.state.creators().iter().position(|c| c.id == id) {
                        self.creator_cursor = pos;
                    }
                    self.content_cursor = 0;
                }
                CatalogEvent::ContentAdded(_) => {
                    self.content_cursor = self.state.content().len().saturating_sub(1);
                }
                _ => {}
            }
        }
        self.creator_cursor = self
            .creator_cursor
            .min(self.state.creators().len().saturating_sub(1));
        self.content_cursor = self
            .content_cursor
            .min(self.state.content().len().saturating_sub(1));
    }

    pub(super) fn push_log(&mut self, kind: EntryKind, text: String) {
        self.log.push(LogEntry {
            ts: now_ts(),
            kind,
            text,
        });
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    pub(super) fn prompt(&self) -> String {
        match self.state.focused_creator() {
            Some(c) => format!("{}>", c.name),
            None => "catalog>".to_string(),
        }
    }

    pub(super) fn selected_creator(&self) -> Option<CreatorId> {
        self.state.creators().get(self.creator_cursor).map(|c| c.id)
    }

    pub(super) fn selected_content(&self) -> Option<ContentId> {
        self.state.content().get(self.content_cursor).map(|c| c.id)
    }

    pub(super) fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.pane {
            Pane::Creators => (&mut self.creator_cursor, self.state.creators().len()),
            Pane::Content => (&mut self.content_cursor, self.state.content().len()),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub(super) fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Creators => Pane::Content,
            Pane::Content => Pane::Creators,
        };
    }

    /// Enter on an empty prompt: focus the selected creator, or play the
    /// selected item.
    pub(super) fn run_default_action(&mut self) {
        let cmd = match self.pane {
            Pane::Creators => self.selected_creator().map(ShellCommand::Focus),
            Pane::Content => self.selected_content().map(ShellCommand::Play),
        };
        if let Some(cmd) = cmd {
            self.execute(cmd);
        }
    }

    pub(super) fn run_current_input(&mut self) {
        let line = self.input.submit();
        if line.trim().is_empty() {
            return;
        }
        self.push_log(EntryKind::Command, line.trim().to_string());
        match parse_command(&line) {
            Ok(cmd) => self.execute(cmd),
            Err(err) => self.push_log(EntryKind::Error, err),
        }
    }

    pub(super) fn execute(&mut self, cmd: ShellCommand) {
        // Failures are already reported through the state's status events.
        match cmd {
            ShellCommand::Help => self.open_help(),
            ShellCommand::Quit => self.quit = true,
            ShellCommand::Reload => {
                if self.state.reload_creators().is_ok() && self.state.focused().is_some() {
                    let _ = self.state.reload_content();
                }
            }
            ShellCommand::Focus(id) => {
                if self.state.focus(id).is_ok() {
                    self.pane = Pane::Content;
                }
            }
            ShellCommand::Unfocus => {
                self.state.clear_focus();
                self.pane = Pane::Creators;
            }
            ShellCommand::CreatorAdd(name) => {
                self.state.forms_mut().creator_name = name;
                let _ = self.state.submit_creator_form();
            }
            ShellCommand::CreatorRm(id) => self.confirm_delete_creator(id),
            ShellCommand::Add {
                title,
                kind,
                target,
            } => {
                let forms = self.state.forms_mut();
                forms.content_title = title;
                forms.content_kind = kind;
                forms.content_target = target;
                let _ = self.state.submit_content_form();
            }
            ShellCommand::Edit(id) => {
                let _ = self.state.begin_edit(id);
            }
            ShellCommand::Set { id, field, value } => {
                let _ = match field {
                    EditField::Title => self.state.edit_draft(id, Some(&value), None),
                    EditField::Kind => self.state.edit_draft(id, None, Some(&value)),
                };
            }
            ShellCommand::Save(id) => {
                let _ = self.state.commit_edit(id);
            }
            ShellCommand::Cancel(id) => {
                let _ = self.state.cancel_edit(id);
            }
            ShellCommand::Rm(id) => self.confirm_delete_content(id),
            ShellCommand::File(path) => {
                let shown = path.display().to_string();
                self.state.forms_mut().selected_file = Some(path);
                self.push_log(EntryKind::Output, format!("Selected file {}", shown));
            }
            ShellCommand::Upload(id) => {
                let _ = self.state.upload_selected(id);
            }
            ShellCommand::Play(id) => self.play(id),
            ShellCommand::Download(id) => self.download(id),
            ShellCommand::Url(url) => self.set_base_url(&url),
        }
        self.pump_events();
    }

    fn open_help(&mut self) {
        let mut lines: Vec<String> = command_defs()
            .iter()
            .map(|d| format!("{:<44} {}", d.usage, d.help))
            .collect();
        lines.push(String::new());
        lines.push(NAV_HINT.to_string());
        self.modal = Some(Modal {
            title: "Help".to_string(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
        });
    }

    fn confirm_delete_creator(&mut self, id: CreatorId) {
        let Some(c) = self.state.creator(id) else {
            self.push_log(EntryKind::Error, format!("creator {} is not loaded", id));
            return;
        };
        let lines = vec![
            format!(
                "Remove creator \"{}\" ({} content items)?",
                c.name, c.content_count
            ),
            String::new(),
            "y/Enter: remove   n/Esc: keep".to_string(),
        ];
        self.modal = Some(Modal {
            title: "Confirm".to_string(),
            lines,
            scroll: 0,
            kind: ModalKind::Confirm(PendingAction::DeleteCreator(id)),
        });
    }

    fn confirm_delete_content(&mut self, id: ContentId) {
        let Some(item) = self.state.content_item(id) else {
            self.push_log(
                EntryKind::Error,
                format!("content {} is not in the displayed list", id),
            );
            return;
        };
        let lines = vec![
            format!("Remove \"{}\"?", item.title),
            String::new(),
            "y/Enter: remove   n/Esc: keep".to_string(),
        ];
        self.modal = Some(Modal {
            title: "Confirm".to_string(),
            lines,
            scroll: 0,
            kind: ModalKind::Confirm(PendingAction::DeleteContent(id)),
        });
    }

    pub(super) fn run_confirmed(&mut self, action: PendingAction) {
        match action {
            PendingAction::DeleteCreator(id) => {
                let _ = self.state.delete_creator(id);
            }
            PendingAction::DeleteContent(id) => {
                let _ = self.state.delete_content(id);
            }
        }
        self.pump_events();
    }

    fn play(&mut self, id: ContentId) {
        let url = match self.state.download_url(id) {
            Ok(url) => url,
            Err(err) => {
                self.push_log(EntryKind::Error, format!("Cannot play: {}", err));
                return;
            }
        };
        let Some(item) = self.state.content_item(id) else {
            return;
        };
        let title = item.title.clone();
        let file_path = item.file_path.clone().unwrap_or_default();
        let class = MediaClass::of(&file_path);
        let outcome = self.launcher.play(&file_path, &url, &mut ProcessSpawner);
        match outcome {
            LaunchOutcome::Started { program } => self.push_log(
                EntryKind::Output,
                format!("Playing {}: {} ({})", class.label(), title, program),
            ),
            LaunchOutcome::NoPlayer { .. } => self.push_log(
                EntryKind::Error,
                format!("No {} player found; use download.", class.label()),
            ),
        }
    }

    fn download(&mut self, id: ContentId) {
        let url = match self.state.download_url(id) {
            Ok(url) => url,
            Err(err) => {
                self.push_log(EntryKind::Error, format!("Cannot download: {}", err));
                return;
            }
        };
        let title = self
            .state
            .content_item(id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        match self.launcher.open_url(&url, &mut ProcessSpawner) {
            LaunchOutcome::Started { .. } => {
                self.push_log(EntryKind::Output, format!("Download started: {}", title))
            }
            LaunchOutcome::NoPlayer { .. } => self.push_log(
                EntryKind::Error,
                format!("Could not open a browser; download from {}", url),
            ),
        }
    }

    fn set_base_url(&mut self, raw: &str) {
        let gateway = match RemoteCatalogGateway::new(raw, self.settings.timeout()) {
            Ok(gw) => gw,
            Err(err) => {
                self.push_log(EntryKind::Error, err.to_string());
                return;
            }
        };
        self.state.replace_gateway(Box::new(gateway));
        self.settings.base_url = self.state.gateway().base_url().to_string();
        if let Err(err) = self.store.save(&self.settings) {
            self.push_log(EntryKind::Error, format!("{:#}", err));
        }
        let _ = self.state.reload_creators();
    }
}

fn now_ts() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

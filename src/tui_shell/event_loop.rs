use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::app::App;
use super::{modal, render};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => app.quit = true,
            KeyCode::Char('u') => app.input.clear(),
            KeyCode::Char('p') => app.input.history_up(),
            KeyCode::Char('n') => app.input.history_down(),
            _ => {}
        }
        return;
    }

    let empty = app.input.buf.is_empty();
    match key.code {
        KeyCode::Char('q') if empty => app.quit = true,
        KeyCode::Char('?') if empty => app.execute(super::commands::ShellCommand::Help),
        KeyCode::Char(c) => app.input.insert_char(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Esc => app.input.clear(),
        KeyCode::Tab => app.toggle_pane(),
        KeyCode::Up if empty => app.move_cursor(-1),
        KeyCode::Down if empty => app.move_cursor(1),
        KeyCode::Up => app.input.history_up(),
        KeyCode::Down => app.input.history_down(),
        KeyCode::Enter if empty => app.run_default_action(),
        KeyCode::Enter => app.run_current_input(),
        _ => {}
    }
}

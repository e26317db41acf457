use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::app::{App, Modal, ModalKind};

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = match modal.kind {
        ModalKind::Confirm(_) => 7.min(area.height),
        ModalKind::Viewer => area.height.saturating_sub(6).clamp(8, 26),
    };
    let box_area = ratatui::layout::Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let border = match modal.kind {
        ModalKind::Confirm(_) => Color::Yellow,
        ModalKind::Viewer => Color::White,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(modal.title.as_str());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    let body = Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0));
    frame.render_widget(body, inner);
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };

    if let ModalKind::Confirm(action) = modal.kind {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.modal = None;
                app.run_confirmed(action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.modal = None,
            _ => {}
        }
        return;
    }

    let last = modal.lines.len().saturating_sub(1);
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.modal = None,
        KeyCode::Up => modal.scroll = modal.scroll.saturating_sub(1),
        KeyCode::Down => modal.scroll = (modal.scroll + 1).min(last),
        KeyCode::PageUp => modal.scroll = modal.scroll.saturating_sub(10),
        KeyCode::PageDown => modal.scroll = (modal.scroll + 10).min(last),
        _ => {}
    }
}

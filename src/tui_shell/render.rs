use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::{App, EntryKind, Pane};
use super::modal;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    draw_creators(frame, app, panes[0]);
    draw_content(frame, app, panes[1]);
    draw_log(frame, app, chunks[2]);

    let prompt = app.prompt();
    let input_line = Line::from(vec![
        Span::styled(prompt.as_str(), fg(Color::Yellow)),
        Span::raw(" "),
        Span::raw(app.input.buf.as_str()),
    ]);
    let input_block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(input_line).block(input_block), chunks[3]);

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
        return;
    }

    let x = prompt.chars().count() as u16 + 2 + app.input.cursor as u16;
    frame.set_cursor_position((chunks[3].x + x, chunks[3].y + 1));
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled("Catalog", fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::raw(app.state.gateway().base_url().to_string()),
        Span::raw("  "),
        Span::styled(app.state.status().to_string(), fg(Color::DarkGray)),
    ];
    let header = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(header), area);
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn pane_block(title: String, active: bool) -> Block<'static> {
    let style = if active {
        fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_creators(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.state.focused();
    let items: Vec<ListItem> = app
        .state
        .creators()
        .iter()
        .map(|c| {
            let marker = if Some(c.id) == focused { "*" } else { " " };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} {:>4} ", marker, c.id)),
                Span::raw(c.name.clone()),
                Span::styled(format!("  ({})", c.content_count), fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = format!("Creators ({})", app.state.creators().len());
    let list = List::new(items)
        .block(pane_block(title, app.pane == Pane::Creators))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut st = ListState::default();
    if !app.state.creators().is_empty() {
        st.select(Some(app.creator_cursor));
    }
    frame.render_stateful_widget(list, area, &mut st);
}

fn draw_content(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let title = match app.state.focused_creator() {
        Some(c) => format!("Content of {} ({})", c.name, app.state.content().len()),
        None => "Content (focus a creator)".to_string(),
    };
    let items: Vec<ListItem> = app
        .state
        .content()
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::raw(format!("{:>4} ", item.id)),
                Span::raw(item.title.clone()),
                Span::styled(format!("  [{}]", item.kind), fg(Color::Blue)),
            ];
            if item.has_file() {
                spans.push(Span::styled("  file", fg(Color::Green)));
            }
            if item.is_editing() {
                spans.push(Span::styled("  editing", fg(Color::Yellow)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(title, app.pane == Pane::Content))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut st = ListState::default();
    if !app.state.content().is_empty() {
        st.select(Some(app.content_cursor));
    }
    frame.render_stateful_widget(list, area, &mut st);
}

fn draw_log(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let lines: Vec<Line> = app.log[start..]
        .iter()
        .map(|e| {
            let style = match e.kind {
                EntryKind::Output => fg(Color::White),
                EntryKind::Error => fg(Color::Red),
                EntryKind::Command => fg(Color::Cyan),
            };
            let prefix = if e.kind == EntryKind::Command { "> " } else { "" };
            Line::from(vec![
                Span::styled(format!("{} ", e.ts), fg(Color::DarkGray)),
                Span::styled(format!("{}{}", prefix, e.text), style),
            ])
        })
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Activity");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}

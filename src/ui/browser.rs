use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rawcull_models::FileKind;

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Files ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Rgb(60, 60, 60)));

    if app.entries.is_empty() {
        let hint = if app.folder.is_some() {
            "No JPG or NEF files here"
        } else {
            "Press 'o' to open a folder"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default()
                .fg(Color::Rgb(120, 120, 120))
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let (badge, color) = match entry.kind {
                FileKind::Preview => ("JPG", Color::Green),
                FileKind::RawData => ("NEF", Color::Magenta),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{badge} "), Style::default().fg(color)),
                Span::raw(entry.name.to_string()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 60))
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

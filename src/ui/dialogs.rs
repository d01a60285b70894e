use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use rawcull_models::DeletionMode;
use std::path::PathBuf;

use super::centered_rect;

pub fn draw_confirm(f: &mut Frame, mode: DeletionMode, targets: &[PathBuf]) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Move to trash ("),
            Span::styled(
                mode.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(")?"),
        ]),
        Line::from(""),
    ];
    lines.extend(targets.iter().map(|path| {
        let style = if path.exists() {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::Rgb(120, 120, 120))
                .add_modifier(Modifier::CROSSED_OUT)
        };
        Line::from(Span::styled(format!("  {}", path.display()), style))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y: delete   n/Esc: cancel",
        Style::default().fg(Color::Rgb(150, 150, 150)),
    )));

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Confirm deletion ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::uniform(1)),
        )
        .style(Style::default().bg(Color::Rgb(30, 20, 20)));

    f.render_widget(dialog, area);
}

pub fn draw_open_folder(f: &mut Frame, input: &str) {
    let area = centered_rect(70, 20, f.area());
    f.render_widget(Clear, area);

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            "Folder path:",
            Style::default().fg(Color::Rgb(150, 150, 150)),
        )),
        Line::from(vec![
            Span::styled(input, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
    ])
    .block(
        Block::default()
            .title(" Open folder ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    )
    .style(Style::default().bg(Color::Rgb(20, 20, 30)));

    f.render_widget(prompt, area);
}

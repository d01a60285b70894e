use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::{App, AppState};

mod browser;
mod dialogs;
mod preview;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // File list + preview
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    browser::draw(f, main_chunks[0], app);
    preview::draw(f, main_chunks[1], app);

    draw_status_bar(f, chunks[2], app);

    match app.state {
        AppState::Confirm(mode) => dialogs::draw_confirm(f, mode, &app.pending_targets),
        AppState::OpenFolder => dialogs::draw_open_folder(f, &app.input_buffer),
        AppState::Browse => {}
    }

    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let folder = app
        .folder
        .as_ref()
        .map_or_else(|| "no folder opened".to_string(), |p| p.display().to_string());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "📷 RawCull",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(Color::Rgb(100, 100, 100))),
        Span::styled(folder, Style::default().fg(Color::Rgb(180, 180, 180))),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60)))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(44),
            Constraint::Percentage(23),
        ])
        .split(area);

    let shortcuts = match app.state {
        AppState::Browse => "b:Both | p:JPG | n:NEF | o:Open | ?:Help",
        AppState::OpenFolder => "Enter:Open | Esc:Cancel",
        AppState::Confirm(_) => "y:Delete | n/Esc:Cancel",
    };

    let left = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        );

    let center_content = if let Some(error) = &app.error_message {
        Line::from(vec![
            Span::styled("❌ ", Style::default().fg(Color::Red)),
            Span::styled(error, Style::default().fg(Color::Red)),
        ])
    } else if let Some(success) = &app.success_message {
        Line::from(vec![
            Span::styled("✅ ", Style::default().fg(Color::Green)),
            Span::styled(success, Style::default().fg(Color::Green)),
        ])
    } else if let Some(info) = &app.info_message {
        Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(Color::Yellow)),
            Span::styled(info, Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled("Ready", Style::default().fg(Color::Rgb(100, 100, 100))))
    };

    let center = Paragraph::new(center_content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        );

    let position = app.selected_index().map_or(0, |idx| idx + 1);
    let stats = format!("Files: {} | {}/{}", app.entries.len(), position, app.entries.len());

    let right = Paragraph::new(stats)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        );

    f.render_widget(left, chunks[0]);
    f.render_widget(center, chunks[1]);
    f.render_widget(right, chunks[2]);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("Navigation"),
        Line::from("  ↑/k ↓/j    - Move selection"),
        Line::from("  Home/End   - First / last file"),
        Line::from(""),
        section("Folder"),
        Line::from("  o          - Open a folder"),
        Line::from("  r          - Refresh the list"),
        Line::from(""),
        section("Delete (to trash)"),
        Line::from("  b          - JPG and NEF"),
        Line::from("  p          - JPG only"),
        Line::from("  n          - NEF only"),
        Line::from(""),
        section("General"),
        Line::from("  ?/F1       - Show this help"),
        Line::from("  q/Esc      - Quit"),
        Line::from("  Ctrl-C     - Quit from anywhere"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default()
                .fg(Color::Rgb(150, 150, 150))
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(2)),
        )
        .style(Style::default().bg(Color::Rgb(20, 20, 30)));

    f.render_widget(help, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use rawcull_models::PreviewInfo;
use rawcull_utils::format_bytes;

use crate::app::App;

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<12}"),
            Style::default().fg(Color::Rgb(150, 150, 150)),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn preview_lines(info: &PreviewInfo) -> Vec<Line<'static>> {
    let name = info
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Type", info.kind.to_string()),
        field("Size", format_bytes(info.size)),
        field(
            "Modified",
            info.modified
                .map_or_else(|| "unknown".to_string(), |m| m.format("%Y-%m-%d %H:%M:%S").to_string()),
        ),
    ];

    if let Some((w, h)) = info.dimensions {
        lines.push(field("Dimensions", format!("{w} x {h}")));
    }
    if let Some((w, h)) = info.display_box() {
        lines.push(field("Display box", format!("{w} x {h}")));
    }
    let rotation = info.orientation.rotation_degrees();
    if rotation != 0 {
        lines.push(field("Rotation", format!("{rotation}° counter-clockwise")));
    }
    if let Some(model) = &info.camera_model {
        lines.push(field("Camera", model.clone()));
    }

    let color = if info.counterpart_exists {
        Color::Green
    } else {
        Color::Yellow
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        info.counterpart_label(),
        Style::default().fg(color),
    )));
    lines
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Rgb(60, 60, 60)));

    let lines = app.preview.as_ref().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Nothing selected",
                Style::default()
                    .fg(Color::Rgb(120, 120, 120))
                    .add_modifier(Modifier::ITALIC),
            ))]
        },
        preview_lines,
    );

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

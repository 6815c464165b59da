//! Rendering for the board screens.

use chrono::{Datelike, NaiveDate};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::calendar::{self, Marker};
use crate::status::{Status, STATUS_SEQUENCE};
use crate::storage::SlotStore;
use crate::task::{Priority, Task};

use super::app::{App, StatusKind};
use super::editor::{EditorKind, EditorState};
use super::model::{month_weeks, Tab};

const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(150, 155, 162);
const COLOR_ACCENT: Color = Color::Rgb(0, 123, 255);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_INFO: Color = Color::Rgb(126, 210, 146);
// Status dot colors, matching the marker palette
const COLOR_PENDING: Color = Color::Rgb(255, 75, 75);
const COLOR_IN_PROGRESS: Color = Color::Rgb(255, 185, 70);
const COLOR_DONE: Color = Color::Rgb(76, 175, 80);

const DAY_CELL_WIDTH: usize = 8;

pub fn render<S: SlotStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    match app.model.tab {
        Tab::Calendar => render_calendar(frame, app, chunks[2]),
        Tab::Profile => render_profile(frame, app, chunks[2]),
        _ => render_column(frame, app, chunks[2]),
    }
    render_alert(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);

    if let Some(editor) = &app.editor {
        render_editor(frame, editor, area);
    }
}

fn render_header<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.config.ui.title),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    let name = app.profile.profile().name.trim().to_string();
    if !name.is_empty() {
        spans.push(Span::styled(
            format!("· {name}"),
            Style::default().fg(COLOR_MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = Vec::new();
    for tab in Tab::ALL {
        let label = match tab.status() {
            Some(status) => format!(" {} ({}) ", tab.label(), app.tasks.count_by_status(status)),
            None => format!(" {} ", tab.label()),
        };
        let style = if tab == app.model.tab {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_column<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let Some(status) = app.model.tab.status() else {
        return;
    };
    let tasks = app.tasks.by_status(status);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_MUTED))
        .title(format!(" {} ", status.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tasks.is_empty() {
        let empty = Paragraph::new("no tasks here (press a to add one)")
            .style(Style::default().fg(COLOR_MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = Vec::new();
    for (idx, task) in tasks.iter().enumerate() {
        let selected = idx == app.model.selected;
        lines.extend(card_lines(task, selected, &app.config.ui.date_format));
    }
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((card_scroll(app.model.selected, inner.height), 0));
    frame.render_widget(paragraph, inner);
}

/// Keep the selected card in view for columns taller than the viewport.
fn card_scroll(selected: usize, viewport_height: u16) -> u16 {
    let card_height = 4u16;
    let top = selected as u16 * card_height;
    if top + card_height > viewport_height {
        top + card_height - viewport_height
    } else {
        0
    }
}

fn card_lines(task: &Task, selected: bool, date_format: &str) -> Vec<Line<'static>> {
    let marker = if selected { "▌ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(COLOR_TEXT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
    };

    let title = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(COLOR_ACCENT)),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", task.priority.label().to_uppercase()),
            Style::default().fg(priority_color(task.priority)),
        ),
    ]);
    let description = Line::from(Span::styled(
        format!("  {}", task.description),
        Style::default().fg(COLOR_MUTED),
    ));
    let dates = Line::from(Span::styled(
        format!(
            "  created {}   due {}",
            display_date(&task.creation_date, date_format),
            display_date(&task.due_date, date_format)
        ),
        Style::default().fg(COLOR_MUTED),
    ));

    vec![title, description, dates, Line::from("")]
}

/// Format a stored date for display, falling back to the raw string.
fn display_date(raw: &str, date_format: &str) -> String {
    match calendar::parse_due_date(raw) {
        Some(day) => day.format(date_format).to_string(),
        None if raw.trim().is_empty() => "—".to_string(),
        None => raw.to_string(),
    }
}

fn render_calendar<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_MUTED))
        .title(format!(" {} ", app.model.month.format("%B %Y")));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let markers = calendar::derive_markers(app.tasks.tasks());
    let mut lines = Vec::new();

    let header = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|name| Span::styled(pad_cell(name), Style::default().fg(COLOR_MUTED)))
        .collect::<Vec<_>>();
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    for week in month_weeks(app.model.month) {
        let mut spans = Vec::new();
        for cell in week {
            match cell {
                Some(day) => spans.extend(day_cell(day, markers.get(&day))),
                None => spans.push(Span::raw(pad_cell(""))),
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(legend_line());
    frame.render_widget(Paragraph::new(lines), inner);
}

fn day_cell(day: NaiveDate, markers: Option<&Vec<Marker>>) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("{:>2} ", day.day()),
        Style::default().fg(COLOR_TEXT),
    )];
    let mut used = 3;
    if let Some(markers) = markers {
        for marker in markers {
            spans.push(Span::styled(
                "●",
                Style::default().fg(status_color(marker.status)),
            ));
            used += 1;
        }
    }
    if used < DAY_CELL_WIDTH {
        spans.push(Span::raw(" ".repeat(DAY_CELL_WIDTH - used)));
    }
    spans
}

fn legend_line() -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Statuses: ",
        Style::default().fg(COLOR_MUTED),
    )];
    for status in STATUS_SEQUENCE {
        spans.push(Span::styled(
            "● ",
            Style::default().fg(status_color(status)),
        ));
        spans.push(Span::styled(
            format!("{}   ", status.label()),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    Line::from(spans)
}

fn pad_cell(text: &str) -> String {
    format!("{text:<width$}", width = DAY_CELL_WIDTH)
}

fn render_profile<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let profile = app.profile.profile();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_MUTED))
        .title(" Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_or_dash = |value: &str| {
        if value.trim().is_empty() {
            "—".to_string()
        } else {
            value.to_string()
        }
    };
    let lines = vec![
        profile_line("Name", value_or_dash(&profile.name)),
        profile_line("Email", value_or_dash(&profile.email)),
        profile_line("Role", value_or_dash(&profile.role)),
        profile_line(
            "Avatar",
            value_or_dash(profile.avatar.as_deref().unwrap_or("")),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "press e to edit",
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn profile_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<8}"), Style::default().fg(COLOR_MUTED)),
        Span::styled(value, Style::default().fg(COLOR_TEXT)),
    ])
}

fn render_alert<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let Some((kind, message)) = &app.alert else {
        return;
    };
    let color = match kind {
        StatusKind::Info => COLOR_INFO,
        StatusKind::Error => COLOR_ERROR,
    };
    let paragraph = Paragraph::new(format!(" {message}")).style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}

fn render_footer<S: SlotStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let help = if app.editor.is_some() {
        "tab/shift-tab fields · enter next/save · esc cancel"
    } else {
        match app.model.tab {
            Tab::Calendar => "tab switch · h/l month · q quit",
            Tab::Profile => "tab switch · e edit · q quit",
            _ => "tab switch · j/k select · h/l move task · a add · e edit · d delete · q quit",
        }
    };
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(COLOR_MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_editor(frame: &mut Frame, editor: &EditorState, area: Rect) {
    let width = area.width.min(60).max(30);
    let height = (editor.fields().len() as u16 + 6).min(area.height);
    let modal = centered_rect(area, width, height);
    frame.render_widget(Clear, modal);

    let title = match editor.kind() {
        EditorKind::NewTask => " New task ",
        EditorKind::EditTask => " Edit task ",
        EditorKind::Profile => " Edit profile ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(title);
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = Vec::new();
    for (idx, field) in editor.fields().iter().enumerate() {
        let active = idx == editor.active_index();
        let label_style = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        let required = if field.required { "*" } else { " " };
        let cursor = if active { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<12}", required, field.label), label_style),
            Span::styled(
                format!("{}{}", field.value, cursor),
                Style::default().fg(COLOR_TEXT),
            ),
        ]));
    }
    lines.push(Line::from(""));
    if editor.confirming() {
        lines.push(Line::from(Span::styled(
            "save? (y/n)",
            Style::default().fg(COLOR_INFO).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(error) = editor.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Pending => COLOR_PENDING,
        Status::InProgress => COLOR_IN_PROGRESS,
        Status::Done => COLOR_DONE,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => COLOR_PENDING,
        Priority::Medium => COLOR_IN_PROGRESS,
        Priority::Low => COLOR_DONE,
    }
}

//! Modifier breakdown tab - shows where each attribute's modifier comes from

use super::section_header;
use crate::app::App;
use attr_core::Attribute;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_breakdown(f, app, chunks[0]);
    draw_sources(f, app, chunks[1]);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    for (i, row) in app.rows().iter().enumerate() {
        let selected = i == app.selected;
        lines.push(section_header(&row.attribute.to_string()));
        lines.extend(attribute_breakdown(app, row.attribute, row.base, row.max, selected));
        lines.push(Line::from(vec![
            Span::styled("  innate base   ", Style::default().fg(Color::Gray)),
            Span::styled(row.innate.to_string(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Modifier Breakdown "),
    );
    f.render_widget(paragraph, area);
}

fn attribute_breakdown(
    app: &App,
    attribute: Attribute,
    base: i32,
    max: i32,
    selected: bool,
) -> Vec<Line<'static>> {
    let breakdown = app.breakdown(attribute);

    let title_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("  {:14}", "max"), title_style),
        Span::styled(format!("= {}", max), Style::default().fg(Color::Yellow)),
    ])];

    let mut parts = vec![
        Span::styled("  ", Style::default()),
        Span::styled(format!("{}", base), Style::default().fg(Color::Cyan)),
    ];
    for contribution in breakdown.contributions() {
        let color = if contribution.amount >= 0 {
            Color::Green
        } else {
            Color::Red
        };
        parts.push(Span::styled(
            format!(" {:+}", contribution.amount),
            Style::default().fg(color),
        ));
        parts.push(Span::styled(
            format!("({})", contribution.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(parts));
    lines
}

fn draw_sources(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![section_header("Sources (by priority)"), Line::from("")];

    for id in app.rules.sources().ids() {
        lines.push(Line::from(Span::styled(
            format!("  {}", id),
            Style::default().fg(Color::White),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Rules"));
    let constants = &app.rules.constants;
    lines.push(Line::from(format!(
        "  max attribute {}, max loss {}",
        constants.limits.max_stat, constants.limits.max_stat_loss
    )));
    lines.push(Line::from(format!(
        "  zero recovery {}-{} turns, paralysis {}-{}",
        constants.zero.recovery_turns.min,
        constants.zero.recovery_turns.max,
        constants.zero.paralysis_turns.min,
        constants.zero.paralysis_turns.max
    )));
    lines.push(Line::from(
        "  sustain halves unforced loss once per level",
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Reference "),
    );
    f.render_widget(paragraph, area);
}

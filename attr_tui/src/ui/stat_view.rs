//! Stats tab view

use super::{channel_color, drain_color, section_header, value_line};
use crate::app::App;
use attr_core::{DrainState, DurationKind};
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

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(chunks[0]);

    draw_attributes(f, app, left[0]);
    draw_status(f, app, left[1]);
    draw_log(f, app, chunks[1]);
}

fn draw_attributes(f: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(Span::styled(
        format!(
            "  {:14}{:>6}{:>6}{:>6}{:>6}{:>6}  {}",
            "", "Base", "Max", "Cur", "Loss", "Zero", "State"
        ),
        Style::default().fg(Color::DarkGray),
    ));
    let mut lines = vec![header];

    for (i, row) in app.rows().iter().enumerate() {
        let marker = if i == app.selected { "▶ " } else { "  " };
        let mut name_style = Style::default().fg(Color::White);
        if row.dirty {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:14}", row.attribute.to_string()), name_style),
            Span::styled(format!("{:>6}", row.base), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:>6}", row.max), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:>6}", row.current),
                Style::default().fg(drain_color(row.state)),
            ),
            Span::styled(format!("{:>6}", row.loss), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:>6}", row.zero), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("  {}", state_name(row.state)),
                Style::default().fg(drain_color(row.state)),
            ),
        ]));
    }

    if app.state.stat_gain_prompt {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "A level-up choice is pending [g]",
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Attributes "),
    );
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let world = &app.world;
    let mut durations: Vec<String> = world
        .durations
        .iter()
        .map(|d| format!("{:?}", d).to_lowercase())
        .collect();
    durations.sort();

    let hp_color = if world.hp * 3 < world.hp_max {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        section_header("Player"),
        value_line("Turn", world.turn.to_string(), Color::White),
        value_line("HP", format!("{}/{}", world.hp, world.hp_max), hp_color),
        value_line("Deaths", world.deaths.to_string(), Color::White),
        value_line(
            "Paralysis",
            world.paralysis.to_string(),
            if world.paralysis > 0 {
                Color::Red
            } else {
                Color::White
            },
        ),
        Line::from(""),
        section_header("Protection"),
        value_line("Sustain", world.sustain.to_string(), Color::White),
        value_line(
            "Divine stamina",
            if world.durations.contains(&DurationKind::DivineStamina) {
                format!("+{}", world.stamina)
            } else {
                "off".to_string()
            },
            Color::LightMagenta,
        ),
        value_line("Favor", format!("+{}", world.favor), Color::LightMagenta),
        value_line("God", world.god.clone(), Color::White),
        Line::from(""),
        section_header("Effects"),
        value_line("Form", world.form_name().to_string(), Color::White),
        value_line(
            "Durations",
            if durations.is_empty() {
                "none".to_string()
            } else {
                durations.join(", ")
            },
            Color::White,
        ),
    ];

    if app.redraw.armour_class || app.redraw.evasion {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "AC / EV need recalculation",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status "),
    );
    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = app.world.log.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = app.world.log[start..end]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{:>4} ", entry.turn),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.text.clone(),
                    Style::default().fg(channel_color(entry.channel)),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages "),
    );
    f.render_widget(paragraph, area);
}

fn state_name(state: DrainState) -> &'static str {
    match state {
        DrainState::Healthy => "healthy",
        DrainState::Drained => "drained",
        DrainState::Zeroed => "ZEROED",
        DrainState::Recovering => "recovering",
    }
}

//! UI rendering

mod breakdown_view;
mod help_view;
mod stat_view;

use crate::app::{App, Tab};
use attr_core::{DrainState, MessageChannel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Stats => stat_view::draw(f, app, chunks[1]),
        Tab::Breakdown => breakdown_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = if app.prompting {
        vec![("s/i/d", "Choose"), ("Esc", "Re-ask"), ("Ctrl+C", "Defer")]
    } else {
        match app.current_tab {
            Tab::Stats => vec![
                ("↑/↓", "Select"),
                ("x/X", "Drain"),
                ("r/R", "Restore"),
                ("t", "Turn"),
                ("g", "Level up"),
                ("p", "Deity"),
            ],
            Tab::Breakdown => vec![("↑/↓", "Select"), ("e", "Ego"), ("w", "Form")],
            Tab::Help => vec![],
        }
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Attribute Sandbox "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", name),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn drain_color(state: DrainState) -> Color {
    match state {
        DrainState::Healthy => Color::White,
        DrainState::Drained => Color::Yellow,
        DrainState::Zeroed => Color::Red,
        DrainState::Recovering => Color::Magenta,
    }
}

pub fn channel_color(channel: MessageChannel) -> Color {
    match channel {
        MessageChannel::Plain => Color::Gray,
        MessageChannel::Prompt => Color::Cyan,
        MessageChannel::Warn => Color::Yellow,
        MessageChannel::Danger => Color::Red,
        MessageChannel::IntrinsicGain => Color::Green,
        MessageChannel::Recovery => Color::LightGreen,
        MessageChannel::God => Color::LightMagenta,
    }
}

pub fn value_line(name: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:16}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-3", "Jump to tab (Stats/Modifiers/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select attribute"),
        key_line("PgUp / PgDn", "Scroll messages"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Drain & Recovery"),
        key_line("x", "Drain selected attribute (sustain applies)"),
        key_line("X", "Forced drain (ignores sustain and divine stamina)"),
        key_line("z", "Drain a random attribute"),
        key_line("m", "Drain from a monster"),
        key_line("r", "Restore selected attribute fully"),
        key_line("y", "Restore one point of a random drained attribute"),
        key_line("R", "Restore every attribute"),
        key_line("t / T", "Pass 1 / 10 turns"),
        Line::from(""),
        section_header("Growth"),
        key_line("g", "Level-up attribute choice"),
        key_line("+ / -", "Change base of selected attribute"),
        key_line("p", "Deity rebalancing step"),
        Line::from(""),
        section_header("Modifiers"),
        key_line("e", "Toggle attribute ego on selected"),
        key_line("u / n", "Toggle positive / negative mutation on selected"),
        key_line("w", "Cycle body form"),
        key_line("f / o", "Toggle might / fortitude"),
        key_line("b / a", "Toggle brilliance / agility"),
        key_line("v", "Toggle divine stamina"),
        key_line("s", "Cycle sustain level"),
        key_line("F", "Cycle divine favor"),
        key_line("c", "Reset character"),
        Line::from(""),
        section_header("Mechanics"),
        Line::from(Span::styled(
            "Current = min(72, Base + Modifiers) - Loss",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Reaching zero starts a 10-19 turn timer and paralyses"),
        Line::from("  Draining a zeroed attribute causes convulsions"),
        Line::from("  The timer counts down only once the value is positive"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

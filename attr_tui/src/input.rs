//! Keyboard and scripted answers for the level-up prompt

use attr_core::{KeyInput, KeyPress, StatGainResponder};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::warn;

/// Blocking reads from the terminal; Ctrl-C stands in for a hangup
#[derive(Debug, Default)]
pub struct TerminalKeys {
    interrupted: bool,
}

impl KeyInput for TerminalKeys {
    fn read_key(&mut self) -> KeyPress {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    match (key.code, key.modifiers) {
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                            self.interrupted = true;
                            return KeyPress::Escape;
                        }
                        (KeyCode::Esc, _) => return KeyPress::Escape,
                        (KeyCode::Char(c), _) => return KeyPress::Char(c),
                        _ => {}
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "terminal read failed during prompt");
                    self.interrupted = true;
                    return KeyPress::Escape;
                }
            }
        }
    }

    fn session_interrupted(&self) -> bool {
        self.interrupted
    }
}

/// Answer configured in the sandbox file
#[derive(Debug, Clone, Default)]
pub struct ConfiguredResponder {
    pub answer: Option<char>,
}

impl StatGainResponder for ConfiguredResponder {
    fn choose_stat_gain(&mut self) -> Option<char> {
        self.answer
    }
}

// Key input for the menus and prompts
// Turns crossterm events into the handful of keys the loops care about

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Backspace,
    Char(char),
    /// Ctrl+C. Raw mode swallows SIGINT, so this is the only way out.
    Interrupt,
    /// Anything else, including resizes. Callers just redraw.
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Key::Interrupt,
                // Ctrl+J and Ctrl+M are LF (10) and CR (13)
                KeyCode::Char('j') | KeyCode::Char('m') => Key::Confirm,
                _ => Key::Other,
            };
        }

        match key.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Key::Confirm,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(c) if !c.is_control() => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// Where the interactive loops get their keys from.
pub trait KeySource {
    /// Blocks until the next key arrives.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads keys from the real terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(Key::from(key)),
                Event::Resize(_, _) => return Ok(Key::Other),
                _ => continue,
            }
        }
    }
}

/// Replays a fixed list of keys. Running dry is an `UnexpectedEof` error,
/// the same shape a closed terminal has.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            keys: keys.into_iter().collect(),
        }
    }

    /// Queues every character of `text` followed by Enter.
    pub fn typed(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self.keys.push_back(Key::Confirm);
        self
    }

    pub fn then(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

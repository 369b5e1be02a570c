// One-line text entry with echo

use ratatui::backend::Backend;
use ratatui::text::Span;
use std::ops::{Deref, DerefMut};

use super::keys::{Key, KeySource};
use super::screen::{Row, Screen};
use super::UiError;

pub const QUERY_MAX_LEN: usize = 60;
pub const ID_MAX_LEN: usize = 20;

/// Echo held on for as long as the guard lives. Dropping it turns echo off
/// again, whichever way the prompt ends.
pub struct Echo<'a, B: Backend> {
    screen: &'a mut Screen<B>,
}

impl<'a, B: Backend> Echo<'a, B> {
    pub fn on(screen: &'a mut Screen<B>) -> Self {
        screen.set_echo(true);
        Echo { screen }
    }
}

impl<B: Backend> Deref for Echo<'_, B> {
    type Target = Screen<B>;

    fn deref(&self) -> &Screen<B> {
        self.screen
    }
}

impl<B: Backend> DerefMut for Echo<'_, B> {
    fn deref_mut(&mut self) -> &mut Screen<B> {
        self.screen
    }
}

impl<B: Backend> Drop for Echo<'_, B> {
    fn drop(&mut self) {
        self.screen.set_echo(false);
    }
}

/// Shows `body` plus `label` at row `y` and reads what the user types after
/// the label. At most `max_len` characters are accepted; Enter finishes and
/// the text comes back trimmed, possibly empty.
pub fn read_line<B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    body: &[Row],
    y: u16,
    label: &str,
    max_len: usize,
) -> Result<String, UiError>
where
    B: Backend,
    K: KeySource,
{
    let mut screen = Echo::on(screen);
    let mut input = String::new();
    let mut rows = body.to_vec();
    rows.push(Row::plain(y, label));
    let label_width = Span::raw(label).width();

    loop {
        if let Some(last) = rows.last_mut() {
            last.text = format!("{label}{input}");
        }
        let x = label_width + Span::raw(input.as_str()).width();
        screen.render(&rows, Some((x as u16, y)))?;

        match keys.next_key()? {
            Key::Confirm => break,
            Key::Char(c) => {
                if input.chars().count() < max_len {
                    input.push(c);
                }
            }
            Key::Backspace => {
                input.pop();
            }
            Key::Interrupt => return Err(UiError::Interrupted),
            _ => {}
        }
    }

    Ok(input.trim().to_string())
}

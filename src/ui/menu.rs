// Arrow-key menu
// Up/Down move a wrapping highlight, Enter picks it

use ratatui::backend::Backend;
use tracing::debug;

use super::keys::{Key, KeySource};
use super::screen::{Row, Screen};
use super::UiError;

/// Highlighted index into a non-empty list. Moving past either end wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// Starts at the first entry. `None` for an empty list.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Selection { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

/// Runs the menu until Enter and returns the confirmed index.
///
/// The page is redrawn after every key, including keys that change nothing,
/// so a resize or a stray key always leaves a consistent screen.
pub fn navigate<B, K>(
    screen: &mut Screen<B>,
    keys: &mut K,
    caption: &[Row],
    options: &[String],
    start_y: u16,
) -> Result<usize, UiError>
where
    B: Backend,
    K: KeySource,
{
    let mut selection = Selection::new(options.len()).ok_or(UiError::EmptyMenu)?;

    loop {
        screen.render_menu(caption, options, selection.index(), start_y)?;

        match keys.next_key()? {
            Key::Up => selection.up(),
            Key::Down => selection.down(),
            Key::Confirm => {
                debug!(index = selection.index(), option = %options[selection.index()], "menu confirmed");
                return Ok(selection.index());
            }
            Key::Interrupt => return Err(UiError::Interrupted),
            _ => {}
        }
    }
}

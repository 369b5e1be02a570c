// Terminal user interface: rendering, key input and the interactive loops

pub mod app;
pub mod keys;
pub mod menu;
pub mod prompt;
pub mod screen;
pub mod search;
pub mod session;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("interrupted")]
    Interrupted,

    #[error("menu has no options")]
    EmptyMenu,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::screen::{Screen, Theme};
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    pub const THEME: Theme = Theme {
        header: "Welcome to Test Mode!",
        accent: Color::Cyan,
    };

    pub fn screen(width: u16, height: u16) -> Screen<TestBackend> {
        Screen::new(TestBackend::new(width, height), THEME).unwrap()
    }

    /// The visible text of every row, trailing blanks trimmed.
    pub fn text_rows(screen: &Screen<TestBackend>) -> Vec<String> {
        let buffer = screen.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

// Terminal renderer
// Every page is a header, an instruction line and some body rows at fixed positions

use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Clear, Paragraph},
    Frame, Terminal,
};
use std::io;

pub const HEADER_ROW: u16 = 0;
pub const INSTRUCTION_ROW: u16 = 2;
pub const BODY_ROW: u16 = 4;
pub const LIST_ROW: u16 = 6;

const INSTRUCTION: &str = "Use the arrow keys to pick an option and Enter to confirm.";

/// Per-mode look: the greeting and its accent color. The accent is drawn
/// over the terminal's own background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: &'static str,
    pub accent: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Reversed,
}

/// One line of body text pinned to a screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub y: u16,
    pub text: String,
    pub emphasis: Emphasis,
}

impl Row {
    pub fn plain(y: u16, text: impl Into<String>) -> Self {
        Row {
            y,
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn reversed(y: u16, text: impl Into<String>) -> Self {
        Row {
            y,
            text: text.into(),
            emphasis: Emphasis::Reversed,
        }
    }
}

pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    // One past the last body row drawn by the previous page
    body_end: u16,
    echo: bool,
}

impl<B: Backend> Screen<B> {
    pub fn new(backend: B, theme: Theme) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Screen {
            terminal,
            theme,
            body_end: BODY_ROW,
            echo: false,
        })
    }

    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    /// Echo decides whether the cursor is shown at the typing position.
    pub fn set_echo(&mut self, on: bool) {
        self.echo = on;
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Draws a menu: `caption` rows first, then one row per option starting at
    /// `start_y`, the highlighted one in reverse video.
    pub fn render_menu(
        &mut self,
        caption: &[Row],
        options: &[String],
        highlighted: usize,
        start_y: u16,
    ) -> io::Result<()> {
        let mut rows = caption.to_vec();
        rows.extend(options.iter().enumerate().map(|(i, option)| {
            let y = start_y.saturating_add(i as u16);
            if i == highlighted {
                Row::reversed(y, option.as_str())
            } else {
                Row::plain(y, option.as_str())
            }
        }));
        self.render(&rows, None)
    }

    /// Draws a full page. `cursor` is only honored while echo is on.
    pub fn render(&mut self, rows: &[Row], cursor: Option<(u16, u16)>) -> io::Result<()> {
        let theme = self.theme;
        let cursor = cursor.filter(|_| self.echo);
        let new_end = rows
            .iter()
            .map(|row| row.y.saturating_add(1))
            .max()
            .unwrap_or(BODY_ROW)
            .max(BODY_ROW);
        let stale_end = self.body_end.max(new_end);

        self.terminal.draw(|frame| {
            Self::clear_body(frame, stale_end);
            Self::draw_chrome(frame, theme);
            for row in rows {
                Self::draw_row(frame, row);
            }
            if let Some((x, y)) = cursor {
                let area = frame.size();
                frame.set_cursor(
                    x.min(area.width.saturating_sub(1)),
                    y.min(area.height.saturating_sub(1)),
                );
            }
        })?;

        self.body_end = new_end;
        Ok(())
    }

    fn clear_body(frame: &mut Frame, end: u16) {
        let area = frame.size();
        let end = end.min(area.height);
        if end > BODY_ROW {
            let rows = Rect::new(0, BODY_ROW, area.width, end - BODY_ROW);
            frame.render_widget(Clear, rows);
        }
    }

    fn draw_chrome(frame: &mut Frame, theme: Theme) {
        let header = Span::styled(theme.header, Style::default().fg(theme.accent));
        Self::draw_line(frame, HEADER_ROW, header);
        Self::draw_line(frame, INSTRUCTION_ROW, Span::raw(INSTRUCTION));
    }

    fn draw_row(frame: &mut Frame, row: &Row) {
        let style = match row.emphasis {
            Emphasis::Plain => Style::default(),
            Emphasis::Reversed => Style::default().add_modifier(Modifier::REVERSED),
        };
        Self::draw_line(frame, row.y, Span::styled(row.text.as_str(), style));
    }

    fn draw_line(frame: &mut Frame, y: u16, span: Span) {
        let area = frame.size();
        // Rows past the bottom edge are dropped, not wrapped
        if y >= area.height {
            return;
        }
        let line = Rect::new(0, y, area.width, 1);
        frame.render_widget(Paragraph::new(span), line);
    }
}

//! Newsletter signup form: a single email field with local-only state.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//! - `Enter` submits. A non-empty address marks the form as subscribed and
//!   clears the field; an empty one is ignored. Nothing is sent anywhere.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub const HEADLINE: &str = "Stories and interviews";
pub const PITCH: &str =
    "Subscribe to learn about new product features, the latest in technology, solutions, and updates.";
pub const THANKS: &str = "Thank you for subscribing to our newsletter!";
const PLACEHOLDER: &str = "Enter your email";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SignupState {
    pub email: String,
    /// Byte offset of the cursor within `email`.
    pub cursor: usize,
    pub subscribed: bool,
}

impl SignupState {
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.email.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.email[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.email.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.email[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.email.len() {
                    self.cursor = self.email[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.email.len());
                }
            }
            AppEvent::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    /// Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        if self.email.trim().is_empty() {
            tracing::debug!("signup: empty email ignored");
            return false;
        }
        tracing::debug!("signup: subscribed");
        self.subscribed = true;
        self.email.clear();
        self.cursor = 0;
        true
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SignupForm<'a> {
    state: &'a SignupState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SignupForm<'a> {
    pub fn new(state: &'a SignupState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    fn input_area(area: Rect) -> Rect {
        let [_, _, input, _] = Self::rows(area);
        input
    }

    fn rows(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    /// Absolute terminal position of the text cursor within `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let input = Self::input_area(area);
        let col = self.state.email[..self.state.cursor].chars().count() as u16;
        let x = (input.x + 1 + col).min(input.right().saturating_sub(2));
        (x, input.y + 1)
    }
}

impl Widget for SignupForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let [headline, pitch, input, footer] = Self::rows(area);

        Paragraph::new(Line::from(Span::styled(
            HEADLINE,
            theme.title.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(headline, buf);

        Paragraph::new(Span::styled(PITCH, theme.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(pitch, buf);

        let block = Block::bordered()
            .title(" Email ")
            .title_bottom(Line::from(" Enter to subscribe ").right_aligned())
            .border_style(theme.border(self.focused));
        let field = block.inner(input);
        block.render(input, buf);

        let text = if self.state.email.is_empty() && !self.focused {
            Line::from(Span::styled(
                format!("{PLACEHOLDER} (press /)"),
                theme.muted.add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(Span::styled(self.state.email.as_str(), theme.body))
        };
        Paragraph::new(text).render(field, buf);

        if self.state.subscribed {
            Paragraph::new(Line::from(Span::styled(THANKS, theme.success)))
                .alignment(Alignment::Center)
                .render(footer, buf);
        }
    }
}

/// Rows the form needs.
pub const FORM_HEIGHT: u16 = 7;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab` / `Shift+Tab`     | `NextTab` / `PrevTab`      |
//! | `1`–`4`                 | `GoTab(n)`                 |
//! | `t`                     | `ToggleTheme`              |
//! | `←` / `h` / `[`         | `PreviousPage`             |
//! | `→` / `l` / `]`         | `NextPage`                 |
//! | `G`                     | `LastPage`                 |
//! | `↑` / `k`, `↓` / `j`    | `Nav(Up)`, `Nav(Down)`     |
//! | `o`                     | `Open`                     |
//! | `r`                     | `Reload`                   |
//! | `/`                     | `InputFocus`               |
//! | `:`                     | `CommandMode`              |
//! | `?`                     | `Help`                     |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While a text input (newsletter email, command bar) is focused the loop
//! calls [`to_app_event_insert`] instead: every printable key becomes
//! `Char`, and only `Ctrl+c`, `Escape`, `Enter`, `Tab`, `Backspace` and the
//! arrow keys keep special meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextTab,
    PrevTab,
    /// Jump to a tab by its 1-based number.
    GoTab(usize),
    ToggleTheme,
    PreviousPage,
    NextPage,
    LastPage,
    /// Move the article selection (or the text cursor in insert mode).
    Nav(Direction),
    /// Open the selected article in the system browser.
    Open,
    /// Remount the current page.
    Reload,
    /// Focus the text input on the current page, if it has one.
    InputFocus,
    CommandMode,
    Help,
    Char(char),
    Backspace,
    Enter,
    Escape,
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal mode).
///
/// Returns `None` for events with no meaning to the application (mouse
/// events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for insert mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    let plain = key.modifiers == Mod::NONE;
    match key.code {
        Char('q') if plain => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if plain => Some(AppEvent::NextTab),
        BackTab => Some(AppEvent::PrevTab),
        Char(c @ '1'..='4') if plain => c.to_digit(10).map(|n| AppEvent::GoTab(n as usize)),

        Char('t') if plain => Some(AppEvent::ToggleTheme),

        Left | Char('h') | Char('[') if plain => Some(AppEvent::PreviousPage),
        Right | Char('l') | Char(']') if plain => Some(AppEvent::NextPage),
        // Uppercase G arrives with or without SHIFT depending on the terminal
        Char('G') => Some(AppEvent::LastPage),

        Up | Char('k') if plain => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if plain => Some(AppEvent::Nav(Direction::Down)),

        Char('o') if plain => Some(AppEvent::Open),
        Char('r') if plain => Some(AppEvent::Reload),
        Char('/') if plain => Some(AppEvent::InputFocus),
        Char(':') => Some(AppEvent::CommandMode),
        Char('?') => Some(AppEvent::Help),

        Enter if plain => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::NextTab),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

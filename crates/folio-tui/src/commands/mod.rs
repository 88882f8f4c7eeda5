// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use folio_core::ThemeMode;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Flip the theme preference, or set it explicitly
    Theme(Option<ThemeMode>),
    // Jump the blog listing to a page
    Page(u32),
    // Remount the current page
    Reload,
    // Open the selected article
    Open,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "reload" | "r" => Ok(Command::Reload),
            "open" | "o" => Ok(Command::Open),
            "theme" => match rest.to_ascii_lowercase().as_str() {
                "" | "toggle" => Ok(Command::Theme(None)),
                "light" => Ok(Command::Theme(Some(ThemeMode::Light))),
                "dark" => Ok(Command::Theme(Some(ThemeMode::Dark))),
                _ => Err("usage: theme [light|dark]".to_string()),
            },
            "page" | "p" => match rest.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(Command::Page(n)),
                _ => Err("usage: page <n>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

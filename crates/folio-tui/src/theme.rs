//! Colour palettes for the folio TUI.
//!
//! There are exactly two palettes, one per [`ThemeMode`]. Both are TOML files
//! embedded in the binary via [`include_str!`], so the application works
//! without any files on disk. [`Theme::for_mode`] picks the palette matching
//! the shared theme preference.

use config::{Config, File, FileFormat};
use folio_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawApp {
    background: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    body: RawStyle,
    muted: RawStyle,
    accent: RawStyle,
    title: RawStyle,
    error: RawStyle,
    success: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawNav {
    active: RawStyle,
    inactive: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPagination {
    current: RawStyle,
    page: RawStyle,
    disabled: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBadges {
    tag: RawStyle,
    author: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    app: RawApp,
    text: RawText,
    nav: RawNav,
    borders: RawBorders,
    pagination: RawPagination,
    badges: RawBadges,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Resolved colour palette.
///
/// All styles are pre-resolved ratatui [`Style`] values, so rendering does
/// no parsing.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    /// Whole-screen foreground/background.
    pub background: Style,

    pub body: Style,
    pub muted: Style,
    /// Publish dates and other highlights.
    pub accent: Style,
    pub title: Style,
    pub error: Style,
    pub success: Style,

    /// Header navigation.
    pub nav_active: Style,
    pub nav_inactive: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Pagination strip.
    pub page_current: Style,
    pub page: Style,
    pub page_disabled: Style,

    pub tag: Style,
    pub author: Style,
}

impl Theme {
    /// The embedded palette for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if an embedded palette is malformed. Both are covered by unit
    /// tests, so this cannot happen in a tested build.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::from_toml_str(LIGHT_THEME_SRC, mode)
                .expect("embedded light theme must be valid TOML"),
            ThemeMode::Dark => Self::from_toml_str(DARK_THEME_SRC, mode)
                .expect("embedded dark theme must be valid TOML"),
        }
    }

    /// Parse a palette from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str, mode: ThemeMode) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            mode,
            background: raw.app.background.into_style(),
            body: raw.text.body.into_style(),
            muted: raw.text.muted.into_style(),
            accent: raw.text.accent.into_style(),
            title: raw.text.title.into_style(),
            error: raw.text.error.into_style(),
            success: raw.text.success.into_style(),
            nav_active: raw.nav.active.into_style(),
            nav_inactive: raw.nav.inactive.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            page_current: raw.pagination.current.into_style(),
            page: raw.pagination.page.into_style(),
            page_disabled: raw.pagination.disabled.into_style(),
            tag: raw.badges.tag.into_style(),
            author: raw.badges.author.into_style(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Configuration types for folio.
//!
//! [`Config::load`] reads `~/.config/folio/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url   = "https://dev.to/api"
user_agent = "folio/0.1"

[home]
per_page       = 6
fallback_total = 100

[projects]
per_page = 6

[newsletter]
per_page = 3

[ui]
tag_limit = 3

[site]
owner   = "Anurag"
about   = [
    "I'm a developer and designer who builds digital products, with a focus on frontend work, UI/UX and accessible applications.",
    "When I'm not coding you can find me hiking, reading, or trying out new tools. I also write about web development, design patterns and productivity.",
]
skills  = ["JavaScript / TypeScript", "React / Next.js", "HTML / CSS", "UI/UX Design", "Node.js", "Tailwind CSS"]
contact = "email@example.com"
links   = ["Twitter", "LinkedIn", "Email", "RSS feed", "Add to Feedly"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub projects: FixedViewConfig,
    #[serde(default = "default_newsletter")]
    pub newsletter: FixedViewConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String { "https://dev.to/api".to_string() }
fn default_user_agent() -> String { "folio/0.1".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// `[home]` section: the paged blog view.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_home_per_page")]
    pub per_page: u32,
    /// Item count assumed when the API sends no total.
    #[serde(default = "default_fallback_total")]
    pub fallback_total: u64,
}

fn default_home_per_page() -> u32 { 6 }
fn default_fallback_total() -> u64 { 100 }

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            per_page: default_home_per_page(),
            fallback_total: default_fallback_total(),
        }
    }
}

/// `[projects]` / `[newsletter]`: single-shot views.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedViewConfig {
    #[serde(default = "default_fixed_per_page")]
    pub per_page: u32,
}

fn default_fixed_per_page() -> u32 { 6 }

fn default_newsletter() -> FixedViewConfig {
    FixedViewConfig { per_page: 3 }
}

impl Default for FixedViewConfig {
    fn default() -> Self {
        Self { per_page: default_fixed_per_page() }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Tags shown per article card.
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,
}

fn default_tag_limit() -> usize { 3 }

impl Default for UiConfig {
    fn default() -> Self {
        Self { tag_limit: default_tag_limit() }
    }
}

/// `[site]` section: static content for the header, about page and footer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/folio/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_dir().join("config.toml");

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Layer a TOML snippet over the defaults without touching the filesystem.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/folio`, or `~/.config/folio`.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("folio")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

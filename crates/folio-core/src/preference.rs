//! Theme preference store: the one piece of state every page shares.
//!
//! The composition root builds exactly one [`ThemeStore`] and hands an
//! `Rc<ThemeStore>` to each page. Pages read it with [`ThemeStore::get`] and
//! register for changes with [`ThemeStore::subscribe`]; only a direct user
//! action calls [`ThemeStore::toggle`]. Listeners run synchronously on the UI
//! thread, so no locking is involved.
//!
//! Persistence goes through a [`PreferenceBackend`]: [`FileBackend`] keeps a
//! small JSON document in the config directory, [`MemoryBackend`] keeps it in
//! memory for tests.

use crate::error::PreferenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn flipped(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Where the preference survives between runs.
pub trait PreferenceBackend {
    /// Read the stored value. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<ThemeMode>, PreferenceError>;
    fn save(&self, mode: ThemeMode) -> Result<(), PreferenceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    dark: bool,
    updated_at: DateTime<Utc>,
}

/// JSON file backend.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/folio/preference.json`, falling back to
    /// `~/.config/folio/preference.json`.
    pub fn default_location() -> Self {
        Self::new(crate::config::config_dir().join("preference.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceBackend for FileBackend {
    fn load(&self) -> Result<Option<ThemeMode>, PreferenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreference = serde_json::from_str(&text)?;
        Ok(Some(ThemeMode::from_dark(stored.dark)))
    }

    fn save(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredPreference {
            dark: mode.is_dark(),
            updated_at: Utc::now(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}

/// In-memory backend. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Rc<Cell<Option<ThemeMode>>>,
}

impl MemoryBackend {
    pub fn stored(&self) -> Option<ThemeMode> {
        self.slot.get()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self) -> Result<Option<ThemeMode>, PreferenceError> {
        Ok(self.slot.get())
    }

    fn save(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        self.slot.set(Some(mode));
        Ok(())
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ThemeMode)>;

/// The shared theme preference.
pub struct ThemeStore {
    mode: Cell<ThemeMode>,
    backend: Box<dyn PreferenceBackend>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl ThemeStore {
    /// Build the store, reading the persisted value. A missing or unreadable
    /// record falls back to [`ThemeMode::Light`].
    pub fn open(backend: impl PreferenceBackend + 'static) -> Rc<Self> {
        let mode = match backend.load() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable, using default");
                ThemeMode::default()
            }
        };
        tracing::debug!(%mode, "theme store opened");
        Rc::new(Self {
            mode: Cell::new(mode),
            backend: Box::new(backend),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip the preference, persist it and notify every listener before
    /// returning. A failed write is logged; the in-memory value still flips.
    pub fn toggle(&self) -> ThemeMode {
        self.set(self.get().flipped())
    }

    /// Set an explicit mode. Listeners are only notified on an actual change.
    pub fn set(&self, mode: ThemeMode) -> ThemeMode {
        if mode == self.mode.get() {
            return mode;
        }
        self.mode.set(mode);
        tracing::debug!(%mode, "theme preference changed");
        if let Err(e) = self.backend.save(mode) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }

        // Snapshot first so a listener may (un)subscribe without a re-borrow.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(mode);
        }
        mode
    }

    pub fn subscribe(&self, listener: impl Fn(ThemeMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

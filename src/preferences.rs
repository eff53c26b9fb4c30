//! Best-effort persistence of the user's plates and bar overrides.
//!
//! Each preference lives under its own key. Reading never fails: a missing
//! or undecodable value is replaced by its default and the problem is only
//! logged.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::inventory::Inventory;

pub const BARBELL_PLATES_KEY: &str = "barbell-plates";
pub const DUMBBELL_PLATES_KEY: &str = "dumbbell-plates";
pub const CUSTOM_BAR_WEIGHT_KEY: &str = "custom-bar-weight";
pub const DUMBBELL_HANDLE_WEIGHT_KEY: &str = "dumbbell-handle-weight";

pub const DEFAULT_CUSTOM_BAR_WEIGHT: f64 = 20.0;
pub const DEFAULT_DUMBBELL_HANDLE_WEIGHT: f64 = 0.5;

/// String values addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// If the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read preference");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create store directory {}", self.dir.display()))?;
        let path = self.path(key);
        fs::write(&path, value)
            .with_context(|| format!("failed to write preference {}", path.display()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub barbell_plates: Inventory,
    pub dumbbell_plates: Inventory,
    pub custom_bar_weight: f64,
    pub dumbbell_handle_weight: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            barbell_plates: Inventory::default_barbell(),
            dumbbell_plates: Inventory::default_dumbbell(),
            custom_bar_weight: DEFAULT_CUSTOM_BAR_WEIGHT,
            dumbbell_handle_weight: DEFAULT_DUMBBELL_HANDLE_WEIGHT,
        }
    }
}

impl Preferences {
    /// Reads every key independently, substituting defaults as needed.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let defaults = Preferences::default();
        Preferences {
            barbell_plates: load_json(store, BARBELL_PLATES_KEY, defaults.barbell_plates),
            dumbbell_plates: load_json(store, DUMBBELL_PLATES_KEY, defaults.dumbbell_plates),
            custom_bar_weight: load_json(store, CUSTOM_BAR_WEIGHT_KEY, defaults.custom_bar_weight),
            dumbbell_handle_weight: load_json(
                store,
                DUMBBELL_HANDLE_WEIGHT_KEY,
                defaults.dumbbell_handle_weight,
            ),
        }
    }

    /// # Errors
    /// If the store cannot be written.
    pub fn save_barbell_plates(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save_json(store, BARBELL_PLATES_KEY, &self.barbell_plates)
    }

    /// # Errors
    /// If the store cannot be written.
    pub fn save_dumbbell_plates(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save_json(store, DUMBBELL_PLATES_KEY, &self.dumbbell_plates)
    }

    /// # Errors
    /// If the store cannot be written.
    pub fn save_custom_bar_weight(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save_json(store, CUSTOM_BAR_WEIGHT_KEY, &self.custom_bar_weight)
    }

    /// # Errors
    /// If the store cannot be written.
    pub fn save_dumbbell_handle_weight(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save_json(store, DUMBBELL_HANDLE_WEIGHT_KEY, &self.dumbbell_handle_weight)
    }

    /// # Errors
    /// If any key cannot be written.
    pub fn save_all(&self, store: &mut impl KeyValueStore) -> Result<()> {
        self.save_barbell_plates(store)?;
        self.save_dumbbell_plates(store)?;
        self.save_custom_bar_weight(store)?;
        self.save_dumbbell_handle_weight(store)
    }
}

fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, fallback: T) -> T {
    let Some(raw) = store.get(key) else {
        tracing::debug!(key, "preference not set, using default");
        return fallback;
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored preference is invalid, using default");
            fallback
        }
    }
}

fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("failed to serialize preference {key}"))?;
    store.set(key, &raw)
}

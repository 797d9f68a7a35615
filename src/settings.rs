use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::CliError;
use crate::registry::{OptValue, OptionRegistry};

/// Options that drive the persistence workflow itself. They are action
/// requests, not state, so `save` filters them out regardless of any
/// persist flag.
const ACTION_OPTIONS: [&str; 5] = ["save", "load", "print", "help", "debug"];

/// Persistence layer for an [`OptionRegistry`].
///
/// Stateless: every method borrows the registry it operates on. The saved
/// blob is a flat JSON object of booleans and strings; loading merges it
/// over the registry's current values (loaded values win, absent keys keep
/// their defaults, unknown keys are introduced).
#[derive(Debug)]
pub struct SettingsStore;

impl SettingsStore {
    /// Registers the action options (`save`, `load`, `print`) and pins the
    /// `help`/`debug` built-ins as non-persisted. Call once after building
    /// the registry, before parsing.
    pub fn install(registry: &mut OptionRegistry) {
        registry.register("save", false, false);
        registry.register("load", false, false);
        registry.register("print", false, false);
        registry.register("help", false, false);
        registry.register("debug", false, false);
    }

    /// Reads a settings blob from `path` and merges it over the registry.
    ///
    /// An unreadable or empty file, or a blob that does not decode, is a
    /// [`CliError::SettingsLoad`]; the registry is untouched in every
    /// failure case because the blob is decoded in full before merging.
    pub fn load(registry: &mut OptionRegistry, path: impl AsRef<Path>) -> Result<(), CliError> {
        let path = path.as_ref();
        debug!("loading settings from {}", path.display());

        let load_err = |reason: String| CliError::SettingsLoad {
            path: path.display().to_string(),
            reason,
        };

        let bytes = fs::read(path).map_err(|e| load_err(e.to_string()))?;
        if bytes.is_empty() {
            return Err(load_err("file is empty".to_string()));
        }
        let stored: BTreeMap<String, OptValue> =
            serde_json::from_slice(&bytes).map_err(|e| load_err(e.to_string()))?;

        // Stored values overwrite defaults; everything else keeps its default.
        for (name, value) in stored {
            registry.assign(&name, value);
        }
        info!("settings loaded from {}", path.display());
        Ok(())
    }

    /// Writes the persist-eligible slice of the registry to `path`,
    /// creating missing parent directories and overwriting any existing
    /// file.
    ///
    /// An empty path, a directory-creation failure, or a write failure is a
    /// [`CliError::SettingsSave`]; on the empty-path case nothing touches
    /// the filesystem.
    pub fn save(registry: &OptionRegistry, path: &str) -> Result<(), CliError> {
        let save_err = |reason: String| CliError::SettingsSave {
            path: path.to_string(),
            reason,
        };

        if path.is_empty() {
            return Err(save_err("save path is empty".to_string()));
        }
        let target = Path::new(path);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
            }
        }

        let filtered: BTreeMap<&str, &OptValue> = registry
            .names()
            .filter(|name| registry.persists(name) && !ACTION_OPTIONS.contains(name))
            .filter_map(|name| registry.get(name).map(|value| (name, value)))
            .collect();

        debug!(
            "saving {} option(s) to {}",
            filtered.len(),
            target.display()
        );
        let blob = serde_json::to_vec(&filtered).map_err(|e| save_err(e.to_string()))?;
        fs::write(target, blob).map_err(|e| save_err(e.to_string()))?;
        info!("settings saved to {}", target.display());
        Ok(())
    }

    /// Resolves a truthy `save`/`load` action value to a concrete path: an
    /// explicit `=path` value wins, a bare flag falls back to the
    /// conventional location for `app_name`.
    pub fn target_path(value: &OptValue, app_name: &str) -> PathBuf {
        match value.as_text() {
            Some(path) => PathBuf::from(path),
            None => Self::default_path(app_name),
        }
    }

    /// Conventional settings location for `app_name`, under the user's
    /// config directory.
    pub fn default_path(app_name: &str) -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_name)
            .join("settings.json")
    }
}

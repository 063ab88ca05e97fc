//! Configuration module - Settings, paths and constants

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file looked up in the program directory
pub const SETTINGS_FILE: &str = "smoothie.toml";

/// Recipe directory defaults
pub mod recipes {
    /// Directory holding local recipe files
    pub const DIR: &str = "recipes";
}

/// Transient file naming for URL recipes
pub mod transient {
    /// Prefix of the cached copy of a remote recipe
    pub const PREFIX: &str = "temp_recipe";

    /// Extension of the cached copy
    pub const SUFFIX: &str = ".txt";

    /// Name used when a URL has no usable file name
    pub const FALLBACK_NAME: &str = "temp_recipe.txt";
}

/// Simulated delays
pub mod timing {
    /// Time spent adding one ingredient
    pub const ADD_MS: u64 = 500;

    /// Time spent blending
    pub const BLEND_MS: u64 = 2000;
}

/// HTTP defaults
pub mod fetch {
    pub const TIMEOUT_SECS: u64 = 30;

    pub const USER_AGENT: &str = concat!("smoothie/", env!("CARGO_PKG_VERSION"));
}

/// Runtime settings, optionally read from `smoothie.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub recipes_dir: String,
    pub timing: Timing,
    pub fetch: Fetch,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub add_ms: u64,
    pub blend_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Fetch {
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipes_dir: recipes::DIR.to_string(),
            timing: Timing::default(),
            fetch: Fetch::default(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            add_ms: timing::ADD_MS,
            blend_ms: timing::BLEND_MS,
        }
    }
}

impl Default for Fetch {
    fn default() -> Self {
        Self {
            timeout_secs: fetch::TIMEOUT_SECS,
        }
    }
}

impl Timing {
    /// No delays at all
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            add_ms: 0,
            blend_ms: 0,
        }
    }

    pub fn add_delay(&self) -> Duration {
        Duration::from_millis(self.add_ms)
    }

    pub fn blend_delay(&self) -> Duration {
        Duration::from_millis(self.blend_ms)
    }
}

impl Fetch {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Load settings from `<base>/smoothie.toml`, falling back to defaults
    /// when the file is absent
    pub fn load(base: &Path) -> Result<Self> {
        let path = base.join(SETTINGS_FILE);
        if !path.exists() {
            log::debug!("no {} in {}, using defaults", SETTINGS_FILE, base.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .context(format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).context(format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Directory holding local recipes for the given program directory
    pub fn recipes_path(&self, base: &Path) -> PathBuf {
        base.join(&self.recipes_dir)
    }
}

/// Get the program directory
pub fn base_dir() -> Result<PathBuf> {
    // Running under cargo: recipes live next to Cargo.toml
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return Ok(PathBuf::from(manifest_dir));
    }

    let exe = std::env::current_exe().context("Failed to locate the smoothie executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.recipes_dir, "recipes");
        assert_eq!(settings.timing.add_delay(), Duration::from_millis(500));
        assert_eq!(settings.timing.blend_delay(), Duration::from_millis(2000));
        assert_eq!(settings.fetch.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
[timing]
add_ms = 10
"#,
        )
        .unwrap();
        assert_eq!(settings.timing.add_ms, 10);
        assert_eq!(settings.timing.blend_ms, 2000);
        assert_eq!(settings.recipes_dir, "recipes");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.timing.add_ms, 500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "recipes_dir = \"menu\"\n[fetch]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.recipes_dir, "menu");
        assert_eq!(settings.fetch.timeout_secs, 5);
        assert_eq!(settings.recipes_path(dir.path()), dir.path().join("menu"));
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "[timing\nadd_ms = ").unwrap();
        assert!(Settings::load(dir.path()).is_err());
    }
}

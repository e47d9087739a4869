//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dewdrop/dewdrop.toml`
//! 3. Project config: `<project_dir>/.dewdrop.toml`
//! 4. Environment variables: `DEWDROP_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// When to style terminal output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the choice against whether output goes to a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(ApplicationError::Config {
                message: format!("invalid color choice '{other}' (expected auto, always or never)"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (all fields optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<ColorChoice>,
    pub which_path: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub executables: Option<BTreeMap<String, String>>,
}

/// Unified configuration for the dewdrop runner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output styling (default: auto)
    pub color: ColorChoice,
    /// `which` binary used to locate executables (default: /usr/bin/which)
    pub which_path: PathBuf,
    /// Home directory for `~` expansion (default: platform home)
    pub home_dir: Option<PathBuf>,
    /// Executable overrides by tool name, consulted before `which`
    pub executables: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            which_path: PathBuf::from("/usr/bin/which"),
            home_dir: None,
            executables: BTreeMap::new(),
        }
    }
}

/// Get the XDG config directory for dewdrop.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dewdrop").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dewdrop.toml"))
}

/// Get the path to the project config file.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".dewdrop.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned as-is.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.which_path = PathBuf::from(expand_env_vars(&self.which_path.to_string_lossy()));
        self.home_dir = self
            .home_dir
            .as_ref()
            .map(|home| PathBuf::from(expand_env_vars(&home.to_string_lossy())));
    }

    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - `executables`: merged per key, overlay wins on conflicts
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut executables = self.executables.clone();
        if let Some(extra) = &overlay.executables {
            executables.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Self {
            color: overlay.color.unwrap_or(self.color),
            which_path: overlay
                .which_path
                .clone()
                .unwrap_or_else(|| self.which_path.clone()),
            home_dir: overlay.home_dir.clone().or_else(|| self.home_dir.clone()),
            executables,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory for the local `.dewdrop.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(project) = project_dir {
            let local_path = project_config_path(project);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply DEWDROP_* environment variables as explicit overrides.
    ///
    /// `DEWDROP_EXECUTABLES__<NAME>` adds or replaces a single executable override.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("DEWDROP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("color") {
            settings.color = val.parse()?;
        }
        if let Ok(val) = config.get_string("which_path") {
            settings.which_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("home_dir") {
            settings.home_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get::<BTreeMap<String, String>>("executables") {
            settings.executables.extend(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dewdrop configuration
#
# Locations (by precedence, lowest to highest):
#   Global:  ~/.config/dewdrop/dewdrop.toml
#   Project: <project_dir>/.dewdrop.toml
#   Env:     DEWDROP_* environment variables

# Output styling: auto, always or never
# color = "auto"

# which binary used to locate external tools
# which_path = "/usr/bin/which"

# Home directory used when expanding "~" in path arguments
# home_dir = "~"

[executables]
# Tool overrides, consulted before which
# phpunit = "vendor/bin/phpunit"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

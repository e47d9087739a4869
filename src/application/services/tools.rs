//! Tool service
//!
//! Helpers shared by commands that shell out: `~` expansion for path
//! arguments, executable lookup, and passthru of external programs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::infrastructure::traits::{CommandRunner, FileSystem};

/// Service for locating and running external tools.
pub struct ToolService {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl ToolService {
    /// Create a new tool service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        settings: Arc<Settings>,
    ) -> Self {
        Self { fs, cmd, settings }
    }

    /// Home directory used for `~` expansion.
    ///
    /// `settings.home_dir` wins over the platform home directory.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.settings.home_dir.clone().or_else(|| {
            directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
        })
    }

    /// Expand a leading `~` in a path argument to the home directory.
    ///
    /// Shells do not expand `~` inside `--path=~/x`, so commands taking paths
    /// run their values through here. Only `~` and `~/...` are expanded;
    /// anything else, including `~user`, is returned unchanged.
    pub fn eval_path_argument(&self, path: &str) -> PathBuf {
        if !path.starts_with('~') {
            return PathBuf::from(path);
        }

        match self.home_dir() {
            Some(home) => {
                let home = home.to_string_lossy().into_owned();
                let expanded = shellexpand::tilde_with_context(path, || Some(home));
                PathBuf::from(expanded.into_owned())
            }
            None => PathBuf::from(path),
        }
    }

    /// Locate an executable by name.
    ///
    /// Lookup order:
    /// 1. `settings.executables` override
    /// 2. output of `settings.which_path <name>`, if that binary exists
    /// 3. the bare name, left for `$PATH` resolution
    #[instrument(skip(self))]
    pub fn auto_detect_executable(&self, name: &str) -> String {
        if let Some(path) = self.settings.executables.get(name) {
            debug!("using configured executable: {}", path);
            return path.clone();
        }

        let which = &self.settings.which_path;
        if !self.fs.is_file(which) {
            debug!("which not available at {}", which.display());
            return name.to_string();
        }

        match self.cmd.run(&which.to_string_lossy(), &[name]) {
            Ok(output) => {
                let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if found.is_empty() {
                    name.to_string()
                } else {
                    found
                }
            }
            Err(e) => {
                debug!("which failed for {}: {}", name, e);
                name.to_string()
            }
        }
    }

    /// Run an external program attached to the current terminal.
    ///
    /// Returns the program's exit status.
    #[instrument(skip(self))]
    pub fn passthru(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> ApplicationResult<i32> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let status = self
            .cmd
            .passthru(program, &args, cwd)
            .with_context("run", program)?;
        debug!("{} exited with status {}", program, status);
        Ok(status)
    }
}

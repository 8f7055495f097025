use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::{HomeDirError, Result};
use crate::os::Platform;

/// Snapshot of environmental variables, usable as a [`Platform`].
///
/// Lookups are case-insensitive on Windows, like the Windows environment itself. Changes to the
/// process environment are only observed after [`Env::reload`].
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,

    home: Option<PathBuf>,
}

impl Env {
    /// Create new default [`Env`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `keys` as existing environmental variables.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use std::ffi::OsString;
    ///
    /// use knowndirs::os::env::Env;
    /// use knowndirs::{Dirs, Xdg};
    ///
    /// let vars = HashMap::from([(
    ///     OsString::from("XDG_CONFIG_HOME"),
    ///     OsString::from("/etc/custom-cfg"),
    /// )]);
    /// let env = Env::new_from(vars).with_home("/home/alice");
    /// let dirs = Xdg::with_platform(env);
    /// assert_eq!(dirs.config_dir().unwrap().to_str(), Some("/etc/custom-cfg"));
    /// ```
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(env.clone()),
            keys: env,
            home: None,
        }
    }

    /// Pin the home directory, instead of deriving it from `$HOME` (`%USERPROFILE%` on Windows).
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }
    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Reload environmental variables from `env`. A pinned home directory is kept.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        let normalised = Env::normalize_map(env.clone());
        self.keys = env;
        self.normalised_keys = normalised;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }
}

impl Platform for Env {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get_os(key).map(OsStr::to_os_string)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        if let Some(home) = &self.home {
            return Ok(home.clone());
        }
        let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        match self.get_os(key) {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => {
                tracing::debug!(var = key, "home directory not set in environment snapshot");
                Err(HomeDirError)
            }
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

//! XDG Base Directory Specification, plus the `xdg-user-dirs` variables.
//!
//! Every directory but the home and the runtime one has a fallback under the home directory, used
//! when its variable is unset or empty. Values of set variables are returned verbatim.

use std::path::PathBuf;

use crate::dirs::{Dirs, env_or_home, env_override};
use crate::error::Result;
use crate::os::{Platform, System};

/// Resolver for Linux and other Unix-like desktops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Xdg<P = System> {
    platform: P,
}

impl Xdg {
    /// [`Xdg`] reading the live process environment.
    pub fn new() -> Self {
        Self::with_platform(System)
    }
}

impl<P: Platform> Xdg<P> {
    pub fn with_platform(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: Platform> Dirs for Xdg<P> {
    fn home_dir(&self) -> Result<PathBuf> {
        self.platform.home_dir()
    }

    fn cache_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_CACHE_HOME", &[".cache"])
    }

    fn config_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_CONFIG_HOME", &[".config"])
    }

    fn data_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_DATA_HOME", &[".local", "share"])
    }

    fn data_local_dir(&self) -> Result<PathBuf> {
        self.data_dir()
    }

    fn executable_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_BIN_HOME", &[".local", "bin"])
    }

    fn preference_dir(&self) -> Result<PathBuf> {
        self.config_dir()
    }

    fn runtime_dir(&self) -> Result<PathBuf> {
        // No fallback: an unset `$XDG_RUNTIME_DIR` means there is none.
        Ok(env_override(&self.platform, "XDG_RUNTIME_DIR").unwrap_or_default())
    }

    fn state_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_STATE_HOME", &[".local", "state"])
    }

    fn audio_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_MUSIC_DIR", &["Music"])
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_DESKTOP_DIR", &["Desktop"])
    }

    fn document_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_DOCUMENTS_DIR", &["Documents"])
    }

    fn download_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_DOWNLOAD_DIR", &["Downloads"])
    }

    fn font_dir(&self) -> Result<PathBuf> {
        let mut path = self.data_dir()?;
        path.push("fonts");
        Ok(path)
    }

    fn picture_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_PICTURES_DIR", &["Pictures"])
    }

    fn public_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_PUBLICSHARE_DIR", &["Public"])
    }

    fn template_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_TEMPLATES_DIR", &["Templates"])
    }

    fn video_dir(&self) -> Result<PathBuf> {
        env_or_home(&self.platform, "XDG_VIDEOS_DIR", &["Videos"])
    }
}

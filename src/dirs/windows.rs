//! Windows: folders come from `%LOCALAPPDATA%`, `%APPDATA%`, `%USERPROFILE%` and `%PUBLIC%`.
//!
//! A missing variable is read as empty and never reported as an error. Only
//! [`Dirs::home_dir`] can fail.

use std::path::PathBuf;

use crate::dirs::Dirs;
use crate::error::Result;
use crate::os::{Platform, System};

/// Resolver for Windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Windows<P = System> {
    platform: P,
}

impl Windows {
    /// [`Windows`] reading the live process environment.
    pub fn new() -> Self {
        Self::with_platform(System)
    }
}

impl<P: Platform> Windows<P> {
    pub fn with_platform(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// `%var%`, empty if unset.
    fn var(&self, var: &str) -> PathBuf {
        PathBuf::from(self.platform.var_os(var).unwrap_or_default())
    }

    fn profile(&self, folder: &str) -> PathBuf {
        self.var("USERPROFILE").join(folder)
    }
}

impl<P: Platform> Dirs for Windows<P> {
    fn home_dir(&self) -> Result<PathBuf> {
        self.platform.home_dir()
    }

    fn cache_dir(&self) -> Result<PathBuf> {
        Ok(self.var("LOCALAPPDATA"))
    }

    fn config_dir(&self) -> Result<PathBuf> {
        Ok(self.var("APPDATA"))
    }

    fn data_dir(&self) -> Result<PathBuf> {
        Ok(self.var("APPDATA"))
    }

    fn data_local_dir(&self) -> Result<PathBuf> {
        Ok(self.var("LOCALAPPDATA"))
    }

    fn executable_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn preference_dir(&self) -> Result<PathBuf> {
        self.config_dir()
    }

    fn runtime_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn state_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn audio_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Music"))
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Desktop"))
    }

    fn document_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Documents"))
    }

    fn download_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Downloads"))
    }

    fn font_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn picture_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Pictures"))
    }

    fn public_dir(&self) -> Result<PathBuf> {
        Ok(self.var("PUBLIC"))
    }

    fn template_dir(&self) -> Result<PathBuf> {
        let mut path = self.var("APPDATA");
        path.extend(["Microsoft", "Windows", "Templates"]);
        Ok(path)
    }

    fn video_dir(&self) -> Result<PathBuf> {
        Ok(self.profile("Videos"))
    }
}

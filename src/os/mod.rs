//! Platform primitives: environment variables and the home directory.
//!
//! Resolvers never touch [`std::env`] directly. They go through a [`Platform`], which is
//! [`System`] for the live process, or an [`Env`](env::Env) snapshot when the environment needs
//! to be controlled.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{HomeDirError, Result};

pub mod env;

/// Source of environment variables and of the current user's home directory.
pub trait Platform {
    /// Get environmental variable `key`, [`None`] if it is not set.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Home directory of the current user.
    ///
    /// # Errors
    /// [`HomeDirError`] if no home directory can be resolved.
    fn home_dir(&self) -> Result<PathBuf>;

    /// Like [`Platform::var_os`], but an empty value counts as unset.
    fn var_non_empty(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        (**self).home_dir()
    }
}

/// The running process. Every call reads the environment anew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct System;

impl Platform for System {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        match std::env::home_dir() {
            Some(home) if !home.as_os_str().is_empty() => Ok(home),
            _ => {
                tracing::debug!("home directory lookup failed");
                Err(HomeDirError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_none;

    #[test]
    fn system_reads_live_environment() {
        assert_eq!(System.var_os("PATH"), std::env::var_os("PATH"));
        assert_none!(System.var_os("KNOWNDIRS_SURELY_NOT_SET_8d1c"));
    }

    #[test]
    fn system_home_matches_std() {
        match std::env::home_dir() {
            Some(home) if !home.as_os_str().is_empty() => {
                assert_eq!(System.home_dir(), Ok(home));
            }
            _ => assert_eq!(System.home_dir(), Err(HomeDirError)),
        }
    }

    #[test]
    fn platform_through_reference() {
        let system = &System;
        assert_eq!(system.var_os("PATH"), System.var_os("PATH"));
    }
}

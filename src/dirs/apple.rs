//! macOS and iOS: fixed locations under `~/Library` and the home directory.
//!
//! No environment variable overrides anything here.

use std::path::PathBuf;

use crate::dirs::{Dirs, home_join};
use crate::error::Result;
use crate::os::{Platform, System};

/// Resolver for Apple platforms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Apple<P = System> {
    platform: P,
}

impl Apple {
    /// [`Apple`] reading the live process environment.
    pub fn new() -> Self {
        Self::with_platform(System)
    }
}

impl<P: Platform> Apple<P> {
    pub fn with_platform(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn library(&self, folder: &str) -> Result<PathBuf> {
        home_join(&self.platform, &["Library", folder])
    }
}

impl<P: Platform> Dirs for Apple<P> {
    fn home_dir(&self) -> Result<PathBuf> {
        self.platform.home_dir()
    }

    fn cache_dir(&self) -> Result<PathBuf> {
        self.library("Caches")
    }

    fn config_dir(&self) -> Result<PathBuf> {
        self.library("Application Support")
    }

    fn data_dir(&self) -> Result<PathBuf> {
        self.library("Application Support")
    }

    fn data_local_dir(&self) -> Result<PathBuf> {
        // Nothing roams, local data is plain data.
        self.data_dir()
    }

    fn executable_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn preference_dir(&self) -> Result<PathBuf> {
        self.library("Preferences")
    }

    fn runtime_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn state_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn audio_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Music"])
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Desktop"])
    }

    fn document_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Documents"])
    }

    fn download_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Downloads"])
    }

    fn font_dir(&self) -> Result<PathBuf> {
        self.library("Fonts")
    }

    fn picture_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Pictures"])
    }

    fn public_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Public"])
    }

    fn template_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::new())
    }

    fn video_dir(&self) -> Result<PathBuf> {
        home_join(&self.platform, &["Movies"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirs::{DirKind, Resolution};
    use crate::error::HomeDirError;
    use crate::os::env::Env;
    use claim::assert_ok;
    use std::collections::HashMap;
    use std::ffi::OsString;

    const HOME: &str = "/Users/bob";

    fn apple() -> Apple<Env> {
        Apple::with_platform(Env::new_from(HashMap::new()).with_home(HOME))
    }

    fn home(components: &[&str]) -> PathBuf {
        let mut path = PathBuf::from(HOME);
        path.extend(components);
        path
    }

    #[test]
    fn library_and_home_folders() {
        let dirs = apple();
        let expected = [
            (DirKind::Home, home(&[])),
            (DirKind::Cache, home(&["Library", "Caches"])),
            (DirKind::Config, home(&["Library", "Application Support"])),
            (DirKind::Data, home(&["Library", "Application Support"])),
            (DirKind::DataLocal, home(&["Library", "Application Support"])),
            (DirKind::Preference, home(&["Library", "Preferences"])),
            (DirKind::Font, home(&["Library", "Fonts"])),
            (DirKind::Audio, home(&["Music"])),
            (DirKind::Desktop, home(&["Desktop"])),
            (DirKind::Document, home(&["Documents"])),
            (DirKind::Download, home(&["Downloads"])),
            (DirKind::Picture, home(&["Pictures"])),
            (DirKind::Public, home(&["Public"])),
            (DirKind::Video, home(&["Movies"])),
        ];
        for (kind, path) in expected {
            let resolved = assert_ok!(kind.resolve(&dirs));
            assert_eq!(resolved.into_path(), path, "{kind}");
        }
    }

    #[test]
    #[cfg(unix)]
    fn videos_are_movies() {
        assert_eq!(assert_ok!(apple().video_dir()), PathBuf::from("/Users/bob/Movies"));
    }

    #[test]
    fn not_applicable_kinds() {
        let dirs = apple();
        for kind in [
            DirKind::Executable,
            DirKind::Runtime,
            DirKind::State,
            DirKind::Template,
        ] {
            assert_eq!(assert_ok!(kind.resolve(&dirs)), Resolution::NotApplicable, "{kind}");
        }
    }

    #[test]
    fn xdg_variables_are_ignored() {
        let vars = HashMap::from([
            (OsString::from("XDG_CONFIG_HOME"), OsString::from("/etc/custom-cfg")),
            (OsString::from("XDG_RUNTIME_DIR"), OsString::from("/run/user/501")),
        ]);
        let dirs = Apple::with_platform(Env::new_from(vars).with_home(HOME));
        assert_eq!(
            assert_ok!(dirs.config_dir()),
            home(&["Library", "Application Support"])
        );
        assert_eq!(assert_ok!(dirs.runtime_dir()), PathBuf::new());
    }

    #[test]
    fn preference_is_independent_of_config() {
        let dirs = apple();
        assert_ne!(assert_ok!(dirs.preference_dir()), assert_ok!(dirs.config_dir()));
    }

    #[test]
    fn missing_home() {
        let dirs = Apple::with_platform(Env::new_from(HashMap::new()));
        assert_eq!(dirs.cache_dir(), Err(HomeDirError));
        assert_eq!(dirs.data_local_dir(), Err(HomeDirError));
        assert_eq!(dirs.video_dir(), Err(HomeDirError));
        // Not applicable never fails.
        assert_eq!(assert_ok!(dirs.state_dir()), PathBuf::new());
        assert_eq!(assert_ok!(dirs.template_dir()), PathBuf::new());
    }
}

//! Knowndirs - platform-aware locations of well-known user directories.
//!
//! Cache, config, data, state and runtime directories, and user folders like Documents or
//! Downloads, resolved the way each platform expects: the XDG Base Directory Specification on
//! Linux and other Unix-likes, `~/Library` on macOS, environment variables on Windows.
//!
//! Paths are only computed, never created or checked for existence.
//!
//! ```rust,no_run
//! # use knowndirs::Dirs;
//! # fn main() -> Result<(), knowndirs::HomeDirError> {
//! let dirs = knowndirs::platform_dirs();
//! let cache = dirs.cache_dir()?.join("my-app");
//! # Ok(())
//! # }
//! ```

pub mod dirs;
pub mod error;
pub mod os;

pub use dirs::{Apple, DirKind, Dirs, PlatformDirs, Resolution, Windows, Xdg, platform_dirs};
pub use error::{HomeDirError, Result, UnknownDirKind};

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_ok;

    // Relations which hold for whatever the live environment is.
    #[test]
    fn platform_dirs_smoke() {
        let dirs = platform_dirs();
        let Ok(home) = dirs.home_dir() else { return };
        assert!(!home.as_os_str().is_empty());

        if cfg!(windows) {
            assert_eq!(dirs.preference_dir(), dirs.config_dir());
            assert_eq!(dirs.font_dir(), Ok(Default::default()));
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            assert_eq!(dirs.data_local_dir(), dirs.data_dir());
            assert_eq!(dirs.template_dir(), Ok(Default::default()));
        } else {
            assert_eq!(dirs.data_local_dir(), dirs.data_dir());
            assert_eq!(dirs.preference_dir(), dirs.config_dir());
            let data = dirs.data_dir().expect("home is known");
            assert_eq!(dirs.font_dir(), Ok(data.join("fonts")));
        }
        assert_ok!(dirs.executable_dir());
    }
}

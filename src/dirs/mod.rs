//! Well-known directories and their per-platform resolvers.
//!
//! [`Dirs`] is implemented by [`Xdg`], [`Apple`] and [`Windows`]. [`PlatformDirs`] names the one
//! matching the compilation target.
//!
//! ```rust,no_run
//! # use knowndirs::{DirKind, Dirs, platform_dirs};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dirs = platform_dirs();
//! let config = dirs.config_dir()?;
//!
//! // Empty means "no such directory on this platform".
//! let runtime = DirKind::Runtime.resolve(&dirs)?;
//! if let Some(path) = runtime.path() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, UnknownDirKind};
use crate::os::Platform;

mod apple;
mod windows;
mod xdg;

pub use apple::Apple;
pub use windows::Windows;
pub use xdg::Xdg;

#[cfg(windows)]
/// Resolver for the compilation target.
pub type PlatformDirs = Windows;
#[cfg(any(target_os = "macos", target_os = "ios"))]
/// Resolver for the compilation target.
pub type PlatformDirs = Apple;
#[cfg(not(any(windows, target_os = "macos", target_os = "ios")))]
/// Resolver for the compilation target.
pub type PlatformDirs = Xdg;

/// Resolver for the compilation target, reading the live process environment.
pub fn platform_dirs() -> PlatformDirs {
    PlatformDirs::new()
}

/// Getters for every well-known directory.
///
/// Each getter is computed from scratch on every call. A returned empty path means the directory
/// has no conventional location on this platform; it is not an error.
///
/// # Errors
/// Getters which need the home directory fail with [`HomeDirError`](crate::HomeDirError) when it
/// cannot be determined. All others never fail.
pub trait Dirs {
    /// Home directory of the current user.
    fn home_dir(&self) -> Result<PathBuf>;
    /// User-specific non-essential (cached) data.
    fn cache_dir(&self) -> Result<PathBuf>;
    /// User-specific configuration files.
    fn config_dir(&self) -> Result<PathBuf>;
    /// User-specific data files.
    fn data_dir(&self) -> Result<PathBuf>;
    /// User-specific data files which must not roam.
    fn data_local_dir(&self) -> Result<PathBuf>;
    /// User-specific executables.
    fn executable_dir(&self) -> Result<PathBuf>;
    /// User preferences.
    fn preference_dir(&self) -> Result<PathBuf>;
    /// User-specific runtime files, like sockets.
    fn runtime_dir(&self) -> Result<PathBuf>;
    /// User-specific state, like logs and history.
    fn state_dir(&self) -> Result<PathBuf>;
    /// Music.
    fn audio_dir(&self) -> Result<PathBuf>;
    /// Desktop.
    fn desktop_dir(&self) -> Result<PathBuf>;
    /// Documents.
    fn document_dir(&self) -> Result<PathBuf>;
    /// Downloads.
    fn download_dir(&self) -> Result<PathBuf>;
    /// User-installed fonts.
    fn font_dir(&self) -> Result<PathBuf>;
    /// Pictures.
    fn picture_dir(&self) -> Result<PathBuf>;
    /// Publicly shared files.
    fn public_dir(&self) -> Result<PathBuf>;
    /// Document templates.
    fn template_dir(&self) -> Result<PathBuf>;
    /// Videos.
    fn video_dir(&self) -> Result<PathBuf>;
}

/// One of the well-known directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirKind {
    Home,
    Cache,
    Config,
    Data,
    DataLocal,
    Executable,
    Preference,
    Runtime,
    State,
    Audio,
    Desktop,
    Document,
    Download,
    Font,
    Picture,
    Public,
    Template,
    Video,
}

macro_rules! dir_kinds {
    (
        $(
            $kind:ident = $name:literal, $getter:ident, $xdg:expr
        ),*$(,)?
    ) => {
        impl DirKind {
            /// Every kind, in declaration order.
            pub const ALL: [DirKind; 18] = [$(DirKind::$kind),*];

            /// Lowercase name, as accepted by [`FromStr`].
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(DirKind::$kind => $name,)*
                }
            }

            /// Environment variable overriding this directory on XDG platforms.
            ///
            /// [`None`] for [`DirKind::Home`] and for kinds derived from another directory.
            pub const fn xdg_var(self) -> Option<&'static str> {
                match self {
                    $(DirKind::$kind => $xdg,)*
                }
            }

            /// Resolve `self` with `dirs`.
            ///
            /// # Errors
            /// Same as the matching [`Dirs`] getter.
            pub fn resolve<D: Dirs + ?Sized>(self, dirs: &D) -> Result<Resolution> {
                let path = match self {
                    $(DirKind::$kind => dirs.$getter()?,)*
                };
                Ok(Resolution::from(path))
            }
        }

        impl FromStr for DirKind {
            type Err = UnknownDirKind;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($name => Ok(DirKind::$kind),)*
                    _ => Err(UnknownDirKind(s.to_owned())),
                }
            }
        }
    };
}

dir_kinds!(
    Home = "home", home_dir, None,
    Cache = "cache", cache_dir, Some("XDG_CACHE_HOME"),
    Config = "config", config_dir, Some("XDG_CONFIG_HOME"),
    Data = "data", data_dir, Some("XDG_DATA_HOME"),
    DataLocal = "data-local", data_local_dir, None,
    Executable = "executable", executable_dir, Some("XDG_BIN_HOME"),
    Preference = "preference", preference_dir, None,
    Runtime = "runtime", runtime_dir, Some("XDG_RUNTIME_DIR"),
    State = "state", state_dir, Some("XDG_STATE_HOME"),
    Audio = "audio", audio_dir, Some("XDG_MUSIC_DIR"),
    Desktop = "desktop", desktop_dir, Some("XDG_DESKTOP_DIR"),
    Document = "document", document_dir, Some("XDG_DOCUMENTS_DIR"),
    Download = "download", download_dir, Some("XDG_DOWNLOAD_DIR"),
    Font = "font", font_dir, None,
    Picture = "picture", picture_dir, Some("XDG_PICTURES_DIR"),
    Public = "public", public_dir, Some("XDG_PUBLICSHARE_DIR"),
    Template = "template", template_dir, Some("XDG_TEMPLATES_DIR"),
    Video = "video", video_dir, Some("XDG_VIDEOS_DIR"),
);

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful outcome of resolving a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The directory lives at this path.
    Resolved(PathBuf),
    /// The directory has no conventional location on this platform.
    NotApplicable,
}

impl Resolution {
    /// The resolved path, [`None`] if not applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Resolved(path) => Some(path.as_path()),
            Resolution::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Back to the getter form: [`Resolution::NotApplicable`] becomes an empty path.
    pub fn into_path(self) -> PathBuf {
        match self {
            Resolution::Resolved(path) => path,
            Resolution::NotApplicable => PathBuf::new(),
        }
    }
}

impl From<PathBuf> for Resolution {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str().is_empty() {
            Resolution::NotApplicable
        } else {
            Resolution::Resolved(path)
        }
    }
}

/// `$var` verbatim if set and non-empty.
fn env_override<P: Platform>(platform: &P, var: &str) -> Option<PathBuf> {
    let value = platform.var_non_empty(var)?;
    tracing::trace!(var, value = ?value, "using environment override");
    Some(PathBuf::from(value))
}

/// `~/<components...>`.
fn home_join<P: Platform>(platform: &P, components: &[&str]) -> Result<PathBuf> {
    let mut path = platform.home_dir()?;
    path.extend(components);
    Ok(path)
}

/// `$var` if set and non-empty, `~/<components...>` otherwise.
fn env_or_home<P: Platform>(platform: &P, var: &str, components: &[&str]) -> Result<PathBuf> {
    if let Some(path) = env_override(platform, var) {
        return Ok(path);
    }
    let path = home_join(platform, components)?;
    tracing::trace!(var, path = %path.display(), "using fallback");
    Ok(path)
}

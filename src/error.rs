//! Error types.

use thiserror::Error;

/// The home directory of the current user could not be determined.
///
/// This is the only way a directory getter can fail. Directories which have no meaning on the
/// current platform are reported as an empty path, never as this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot determine home directory of the current user")]
pub struct HomeDirError;

/// Returned by [`DirKind::from_str`](std::str::FromStr::from_str) for names not naming any
/// [`DirKind`](crate::DirKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown directory kind `{0}`")]
pub struct UnknownDirKind(pub String);

/// Result of a directory getter.
pub type Result<T> = std::result::Result<T, HomeDirError>;

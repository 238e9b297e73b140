//! Error types for the shim
//!
//! None of these errors ever reach the application that called
//! `SDL_DisableScreenSaver()` - the intercepted function has no error
//! channel. They only shape internal control flow and diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for shim operations
pub type Result<T> = std::result::Result<T, ShimError>;

/// Error type for shim operations
#[derive(Debug, Error)]
pub enum ShimError {
	/// Neither `$XDG_CONFIG_HOME` nor `$HOME` is set, so there is no
	/// place to look for a banlist
	#[error("could not find $HOME")]
	NoConfigDir,

	/// The config file could not be stat'd (usually: it does not exist)
	#[error("could not stat {path}: {source}")]
	Stat {
		path: PathBuf,
		source: nix::Error,
	},

	/// An I/O error occurred
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

//! Config file location
//!
//! The banlist lives at a fixed subpath below the XDG config home:
//! `$XDG_CONFIG_HOME/sdl_screensaver_shim/banlist.conf`, or
//! `$HOME/.config/sdl_screensaver_shim/banlist.conf` when
//! `$XDG_CONFIG_HOME` is unset. Callers cache the result once per
//! process; the path is assumed stable.

use crate::error::{Result, ShimError};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Fixed subpath of the config file below the config home.
pub const CONFIG_SUBPATH: &str = "sdl_screensaver_shim/banlist.conf";

/// Compute the banlist path from the process environment.
///
/// # Errors
///
/// Returns [`ShimError::NoConfigDir`] when neither `$XDG_CONFIG_HOME` nor
/// `$HOME` is set; callers must treat that as "no config, nothing is ever
/// suppressed".
pub fn locate() -> Result<PathBuf> {
	locate_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

/// Compute the banlist path from explicit environment values.
///
/// Split out from [`locate`] so the derivation is testable without
/// mutating the process environment.
pub fn locate_from(config_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
	if let Some(dir) = config_home {
		return Ok(PathBuf::from(dir).join(CONFIG_SUBPATH));
	}
	match home {
		Some(home) => Ok(PathBuf::from(home).join(".config").join(CONFIG_SUBPATH)),
		None => Err(ShimError::NoConfigDir),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::Path;

	#[test]
	fn prefers_xdg_config_home() {
		let path = locate_from(Some("/custom/config".into()), Some("/home/user".into())).unwrap();
		assert_eq!(
			path,
			Path::new("/custom/config/sdl_screensaver_shim/banlist.conf")
		);
	}

	#[test]
	fn falls_back_to_home_dot_config() {
		let path = locate_from(None, Some("/home/user".into())).unwrap();
		assert_eq!(
			path,
			Path::new("/home/user/.config/sdl_screensaver_shim/banlist.conf")
		);
	}

	#[test]
	fn errors_when_no_home_is_discoverable() {
		assert!(matches!(
			locate_from(None, None),
			Err(ShimError::NoConfigDir)
		));
	}
}

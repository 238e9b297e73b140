//! Shim state and decision logic
//!
//! All process-wide caches live in one owned [`ShimState`]: the resolved
//! process identity, the located config path, the banlist, and the real
//! function pointer. The exported entry point drives a lazily-initialized
//! global instance; tests construct fresh instances with pinned inputs.

use crate::banlist::Banlist;
use crate::config;
use crate::error::ShimError;
use crate::identity;
use crate::logging::diag;
use crate::resolver::{self, DisableScreenSaverFn};
use std::path::PathBuf;
use tracing::debug;

/// Process-wide shim state.
///
/// Everything here is resolved lazily on first use and cached: the
/// identity and config path for the lifetime of the process, the real
/// function pointer once resolution succeeds, and the banlist per
/// config-file modification.
#[derive(Debug, Default)]
pub struct ShimState {
	banlist: Banlist,
	identity: Option<String>,
	/// `None` = not yet computed; `Some(None)` = no config discoverable.
	config_path: Option<Option<PathBuf>>,
	real_fn: Option<DisableScreenSaverFn>,
}

impl ShimState {
	/// Create a state with nothing resolved yet.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			banlist: Banlist::new(),
			identity: None,
			config_path: None,
			real_fn: None,
		}
	}

	/// Create a state with a pinned identity and config path, bypassing
	/// the `/proc/self/exe` and environment lookups.
	#[must_use]
	pub fn with_config(identity: impl Into<String>, config_path: Option<PathBuf>) -> Self {
		Self {
			banlist: Banlist::new(),
			identity: Some(identity.into()),
			config_path: Some(config_path),
			real_fn: None,
		}
	}

	/// The identity of this process: the absolute path of its executable,
	/// resolved once.
	pub fn identity(&mut self) -> &str {
		self.identity.get_or_insert_with(identity::resolve_exe)
	}

	/// The banlist path, located once. `None` means no config is in play
	/// and nothing is ever suppressed.
	fn config_path(&mut self) -> Option<PathBuf> {
		if self.config_path.is_none() {
			let located = match config::locate() {
				Ok(path) => Some(path),
				Err(e) => {
					debug!("no config path: {e}");
					diag(self.identity(), "Error: could not find $HOME!");
					None
				},
			};
			self.config_path = Some(located);
		}
		self.config_path.clone().flatten()
	}

	/// Decide whether the current call should be suppressed.
	///
	/// Refreshes the banlist first (a stat-only no-op while the config
	/// file is unchanged), then tests the process identity against the
	/// patterns in file order. Default-allow: an empty, missing, or
	/// unreadable banlist suppresses nothing.
	pub fn should_suppress(&mut self) -> bool {
		let identity = self.identity().to_owned();

		if let Some(path) = self.config_path() {
			if let Err(e) = self.banlist.refresh(&path) {
				let message = match e {
					ShimError::Stat { .. } => "Can't find config file!",
					_ => "Could not open config file!",
				};
				diag(&identity, message);
				debug!("banlist refresh failed: {e}");
			}
		}

		self.banlist.matches(&identity)
	}

	/// Full interceptor behavior for one `SDL_DisableScreenSaver()` call.
	///
	/// Suppressed calls are dropped with a diagnostic; allowed calls are
	/// forwarded to the real implementation when it can be resolved. No
	/// outcome is ever reported to the caller - the original function has
	/// no return channel.
	pub fn disable_screensaver(&mut self) {
		if self.should_suppress() {
			diag(self.identity(), "Prevented SDL_DisableScreenSaver().");
			return;
		}
		self.forward();
	}

	/// Forward to the real implementation, resolving it on first need.
	///
	/// Resolution failure is not fatal and not cached: the call becomes a
	/// logged no-op and the lookup is retried next time.
	fn forward(&mut self) {
		if self.real_fn.is_none() {
			self.real_fn = resolver::resolve_real();
			if self.real_fn.is_some() {
				diag(self.identity(), "Successfully linked SDL_DisableScreenSaver().");
			}
		}

		match self.real_fn {
			Some(real) => {
				diag(self.identity(), "Allowing SDL_DisableScreenSaver().");
				// SAFETY: the pointer came from the dynamic linker for a
				// symbol whose ABI is fixed by SDL.
				unsafe { real() };
			},
			None => diag(self.identity(), "Could not link SDL_DisableScreenSaver()."),
		}
	}

	/// The current banlist.
	#[must_use]
	pub const fn banlist(&self) -> &Banlist {
		&self.banlist
	}

	/// How many times the config file has been parsed by this state.
	#[must_use]
	pub const fn reload_count(&self) -> u64 {
		self.banlist.reload_count()
	}

	/// Whether the real function pointer has been resolved yet.
	#[must_use]
	pub const fn real_fn_resolved(&self) -> bool {
		self.real_fn.is_some()
	}
}

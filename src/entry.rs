//! The exported entry point
//!
//! The replacement `SDL_DisableScreenSaver` that the dynamic linker binds
//! instead of SDL's own when this library is preloaded. It drives one
//! process-wide [`ShimState`] behind a mutex; the original function
//! carries no thread-safety contract, but serializing here keeps the
//! banlist rebuild and pointer caches coherent if the host application
//! calls from several threads anyway.

use crate::logging;
use crate::shim::ShimState;
use once_cell::sync::Lazy;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

static SHIM: Lazy<Mutex<ShimState>> = Lazy::new(|| Mutex::new(ShimState::new()));

/// Replacement for SDL's `SDL_DisableScreenSaver`.
///
/// Same signature as the original: no arguments, no return value. Never
/// signals failure to its caller, and never unwinds across the C
/// boundary.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn SDL_DisableScreenSaver() {
	logging::init_logging();

	let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
		let mut shim = match SHIM.lock() {
			Ok(guard) => guard,
			Err(poisoned) => poisoned.into_inner(),
		};
		shim.disable_screensaver();
	}));

	if outcome.is_err() {
		eprintln!("[{}] panic inside SDL_DisableScreenSaver shim", logging::ARCH_TAG);
	}
}

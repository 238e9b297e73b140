//! Real-symbol resolution
//!
//! Finds the implementation of `SDL_DisableScreenSaver()` that this shim
//! is shadowing. The lookup is version-qualified first - the function only
//! exists since SDL 2.0, and pinning the version avoids ambiguity when
//! several SDL builds are loaded into one process - and falls back to a
//! plain `RTLD_NEXT` lookup otherwise. The caller memoizes a successful
//! result; an unresolved symbol is retried on the next call.

use std::ffi::{CStr, c_char, c_void};
use tracing::debug;

/// Signature of the intercepted function: no arguments, no return value.
pub type DisableScreenSaverFn = unsafe extern "C" fn();

/// Name of the symbol this shim replaces.
pub const SYMBOL: &CStr = c"SDL_DisableScreenSaver";

/// Version identifier for the version-qualified lookup.
pub const SDL2_SONAME: &CStr = c"libSDL2-2.0.so.0";

// dlvsym is a GNU extension and not exposed by the libc crate on every
// target, so it is declared here the same way glibc declares it.
unsafe extern "C" {
	fn dlvsym(handle: *mut c_void, symbol: *const c_char, version: *const c_char) -> *mut c_void;
}

/// Look up `symbol` in the next object after this shim in the dynamic
/// symbol search order, optionally qualified by a version identifier.
///
/// Returns `None` when the dynamic linker has no such definition.
#[must_use]
pub fn lookup_next(symbol: &CStr, version: Option<&CStr>) -> Option<*mut c_void> {
	let address = unsafe {
		match version {
			Some(version) => dlvsym(libc::RTLD_NEXT, symbol.as_ptr(), version.as_ptr()),
			None => libc::dlsym(libc::RTLD_NEXT, symbol.as_ptr()),
		}
	};
	if address.is_null() { None } else { Some(address) }
}

/// Resolve the real `SDL_DisableScreenSaver`, trying the version-qualified
/// lookup first and the unqualified one second.
#[must_use]
pub fn resolve_real() -> Option<DisableScreenSaverFn> {
	let address = lookup_next(SYMBOL, Some(SDL2_SONAME)).or_else(|| {
		debug!("version-qualified lookup of {SYMBOL:?} failed, retrying unqualified");
		lookup_next(SYMBOL, None)
	})?;

	// SAFETY: the dynamic linker returned this address for a symbol whose
	// ABI is fixed by SDL as `void SDL_DisableScreenSaver(void)`.
	Some(unsafe { std::mem::transmute::<*mut c_void, DisableScreenSaverFn>(address) })
}

//! Process identity resolution
//!
//! The match subject for the banlist is the absolute path of the running
//! executable, read from the `/proc/self/exe` self-link. Callers cache the
//! result for the lifetime of the process (the link never changes within
//! one process image).

use std::fs;
use tracing::debug;

/// Placeholder identity used when `/proc/self/exe` cannot be read.
///
/// It is deliberately non-empty so every diagnostic line still has a
/// subject, and unlikely to match any real banlist pattern, so matching
/// degrades to "allow".
pub const UNKNOWN_IDENTITY: &str = "(unknown)";

/// Resolve the absolute path of the currently running executable.
pub fn resolve_exe() -> String {
	match fs::read_link("/proc/self/exe") {
		Ok(path) => path.to_string_lossy().into_owned(),
		Err(e) => {
			debug!("could not read /proc/self/exe: {e}");
			UNKNOWN_IDENTITY.to_string()
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_an_absolute_path() {
		let exe = resolve_exe();
		assert!(!exe.is_empty());
		// On any Linux box running the test harness, the self-link is
		// readable and absolute.
		assert!(exe.starts_with('/'), "unexpected identity: {exe}");
	}
}

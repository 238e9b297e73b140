//! Logging for the shim
//!
//! Two layers: the user-facing diagnostic line on stderr (the only output
//! the original debugging workflow relies on), and `tracing` for anything
//! more verbose.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build-time tag identifying the target architecture, so the 32-bit and
/// 64-bit copies of the preloaded library can be told apart in the logs.
#[cfg(target_arch = "x86")]
pub const ARCH_TAG: &str = "i386";
#[cfg(target_arch = "x86_64")]
pub const ARCH_TAG: &str = "amd64";
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub const ARCH_TAG: &str = std::env::consts::ARCH;

// Initialize logging once
static INIT: Once = Once::new();

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Uses the `SDL_SHIM_DEBUG` environment variable to control logging level
/// - Only logs warnings and errors by default
///
/// All output goes to stderr; the host application owns stdout.
pub fn init_logging() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env()
			.or_else(|_| {
				if std::env::var("SDL_SHIM_DEBUG").is_ok() {
					Ok::<EnvFilter, Box<dyn std::error::Error>>(EnvFilter::new("sdl_screensaver_shim=debug"))
				} else {
					Ok::<EnvFilter, Box<dyn std::error::Error>>(EnvFilter::new("sdl_screensaver_shim=warn"))
				}
			})
			.unwrap();

		tracing_subscriber::registry()
			.with(fmt::layer().with_target(true).with_writer(std::io::stderr))
			.with(filter)
			.init();
	});
}

/// Write one diagnostic line to stderr, in the form
/// `[<arch-tag>] <resolved-exe-path>: <message>`.
pub fn diag(exe: &str, message: &str) {
	eprintln!("[{ARCH_TAG}] {exe}: {message}");
}

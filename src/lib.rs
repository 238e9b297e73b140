//! sdl-screensaver-shim - keep your screensaver working while Steam runs
//!
//! On Linux, Steam periodically calls `SDL_DisableScreenSaver()` so the
//! desktop screensaver never kicks in while the client is open, even when
//! no game is running. This crate builds an `LD_PRELOAD` library that
//! interposes on that one symbol: if the calling executable matches a
//! glob pattern in a user-editable banlist, the call is silently dropped;
//! otherwise it is forwarded to the real SDL implementation.
//!
//! The banlist lives at `$XDG_CONFIG_HOME/sdl_screensaver_shim/banlist.conf`
//! (falling back to `$HOME/.config/...`), one shell-glob pattern per line,
//! and is hot-reloaded whenever its modification time changes.
//!
//! # Usage
//!
//! ```bash
//! LD_PRELOAD=/path/to/libsdl_screensaver_shim.so steam
//! ```
//!
//! Everything degrades toward "allow": a missing config, an unreadable
//! `/proc/self/exe`, or a failed symbol lookup never breaks the host
//! application, it only changes what gets logged.

pub mod banlist;
pub mod config;
pub mod entry;
pub mod error;
pub mod identity;
pub mod logging;
pub mod resolver;
pub mod shim;

pub use banlist::Banlist;
pub use error::{Result, ShimError};
pub use shim::ShimState;

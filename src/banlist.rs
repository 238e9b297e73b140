//! Banlist loading and matching
//!
//! The banlist is an ordered list of shell-glob patterns, one per line in
//! the config file. It is rebuilt wholesale whenever the file's
//! modification time (seconds + nanoseconds) changes, and left alone
//! otherwise, so the steady-state cost of a refresh is a single `stat`.

use crate::error::{Result, ShimError};
use glob::Pattern;
use nix::sys::stat;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Modification time as the kernel reports it: seconds and nanoseconds.
type Mtime = (i64, i64);

/// Ordered list of glob patterns identifying executables whose
/// screensaver-disable calls should be suppressed.
///
/// Matching is first-match-wins in file order; an empty list means nothing
/// is ever suppressed.
#[derive(Debug, Default)]
pub struct Banlist {
	patterns: Vec<Pattern>,
	/// Last mtime the config file was seen with. `None` until the first
	/// successful stat, so the first refresh always loads.
	last_mtime: Option<Mtime>,
	reloads: u64,
}

impl Banlist {
	/// Create an empty banlist that has never seen a config file.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			patterns: Vec::new(),
			last_mtime: None,
			reloads: 0,
		}
	}

	/// Bring the in-memory pattern list up to date with the file at `path`.
	///
	/// Fast path: if the file's mtime matches the last one seen, this is a
	/// no-op beyond the `stat` itself.
	///
	/// # Errors
	///
	/// - [`ShimError::Stat`] when the file cannot be stat'd; the previous
	///   pattern list is left untouched.
	/// - [`ShimError::Io`] when the file changed but cannot be read; the
	///   previous list is likewise retained, and the stored mtime still
	///   advances so the failed read is retried once per modification, not
	///   once per call.
	pub fn refresh(&mut self, path: &Path) -> Result<()> {
		let attr = stat::stat(path).map_err(|source| ShimError::Stat {
			path: path.to_path_buf(),
			source,
		})?;
		let mtime = (i64::from(attr.st_mtime), i64::from(attr.st_mtime_nsec));

		if self.last_mtime == Some(mtime) {
			return Ok(());
		}
		self.last_mtime = Some(mtime);

		let content = fs::read_to_string(path)?;
		self.patterns = content
			.split('\n')
			.filter(|line| !line.is_empty())
			.filter_map(|line| match Pattern::new(line) {
				Ok(pattern) => Some(pattern),
				Err(e) => {
					// An invalid glob can never match anything, so it
					// simply does not make it into the list.
					debug!("skipping unparseable pattern {line:?}: {e}");
					None
				},
			})
			.collect();
		self.reloads += 1;
		debug!("loaded {} banlist pattern(s) from {}", self.patterns.len(), path.display());
		Ok(())
	}

	/// Test an executable path against the list, in file order.
	///
	/// Glob semantics follow `fnmatch(3)` with no flags: `*` and `?` match
	/// across `/`, bracket classes work, and leading dots get no special
	/// treatment.
	#[must_use]
	pub fn matches(&self, identity: &str) -> bool {
		self.patterns.iter().any(|pattern| pattern.matches(identity))
	}

	/// Number of patterns currently loaded.
	#[must_use]
	pub fn len(&self) -> usize {
		self.patterns.len()
	}

	/// Whether the list is currently empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.patterns.is_empty()
	}

	/// How many times the config file has actually been parsed.
	///
	/// Stays constant while the file's mtime does, which is what makes the
	/// reload behavior observable from the outside.
	#[must_use]
	pub const fn reload_count(&self) -> u64 {
		self.reloads
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn write_banlist(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
		let path = dir.path().join("banlist.conf");
		let mut file = fs::File::create(&path).unwrap();
		file.write_all(content.as_bytes()).unwrap();
		path
	}

	#[test]
	fn loads_patterns_in_file_order() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "steam\n*/steam\n\n*/heroic\n");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert_eq!(banlist.len(), 3);
		assert!(banlist.matches("steam"));
		assert!(banlist.matches("/usr/bin/steam"));
		assert!(banlist.matches("/opt/heroic"));
		assert!(!banlist.matches("/usr/bin/my_game"));
	}

	#[test]
	fn missing_trailing_newline_is_fine() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "steam");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert_eq!(banlist.len(), 1);
		assert!(banlist.matches("steam"));
	}

	#[test]
	fn glob_star_crosses_path_separators() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "*/steam\n");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert!(banlist.matches("/home/user/.local/share/Steam/ubuntu12_32/steam"));
	}

	#[test]
	fn question_mark_and_bracket_classes() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "/usr/bin/game?\n/usr/bin/[st]eam\n");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert!(banlist.matches("/usr/bin/game2"));
		assert!(!banlist.matches("/usr/bin/game22"));
		assert!(banlist.matches("/usr/bin/seam"));
		assert!(banlist.matches("/usr/bin/team"));
		assert!(!banlist.matches("/usr/bin/beam"));
	}

	#[test]
	fn stat_failure_keeps_previous_list() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "steam\n");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert!(banlist.matches("steam"));

		fs::remove_file(&path).unwrap();
		assert!(matches!(banlist.refresh(&path), Err(ShimError::Stat { .. })));
		// Conservative: a transient stat failure must not wipe a
		// previously valid list.
		assert!(banlist.matches("steam"));
	}

	#[test]
	fn unchanged_mtime_skips_the_reparse() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "steam\n");

		let mut banlist = Banlist::new();
		for _ in 0..10 {
			banlist.refresh(&path).unwrap();
		}
		assert_eq!(banlist.reload_count(), 1);
	}

	#[test]
	fn unreadable_file_is_retried_once_per_modification() {
		let dir = tempfile::tempdir().unwrap();
		// A directory stats fine but cannot be read as a file.
		let path = dir.path().join("banlist.conf");
		fs::create_dir(&path).unwrap();

		let mut banlist = Banlist::new();
		assert!(matches!(banlist.refresh(&path), Err(ShimError::Io(_))));
		// The stamp advanced on the successful stat, so the failed read
		// is not retried while the mtime is unchanged.
		banlist.refresh(&path).unwrap();
		assert_eq!(banlist.reload_count(), 0);
		assert!(banlist.is_empty());
	}

	#[test]
	fn invalid_globs_never_match() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_banlist(&dir, "[unclosed\nsteam\n");

		let mut banlist = Banlist::new();
		banlist.refresh(&path).unwrap();
		assert!(banlist.matches("steam"));
		assert!(!banlist.matches("[unclosed"));
	}
}

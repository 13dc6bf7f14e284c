//! Reading the target file and writing the spliced result back.

use crate::error::{Result, SedrError};
use std::fs::{self, File, Permissions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Content and permissions of the target file, read once before matching.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
	/// Resolved path of the file (symlinks followed).
	pub path: PathBuf,

	/// Raw bytes of the file.
	pub content: Vec<u8>,

	/// Permission bits restored on the rewritten file.
	pub permissions: Permissions,
}

impl FileSnapshot {
	/// Read the whole file and its permission bits.
	pub fn read(path: &Path) -> Result<Self> {
		let read_error = |source| SedrError::Read {
			path: path.to_path_buf(),
			source,
		};

		let resolved = fs::canonicalize(path).map_err(read_error)?;
		let mut file = File::open(&resolved).map_err(read_error)?;

		let metadata = file.metadata().map_err(|source| SedrError::Stat {
			path: path.to_path_buf(),
			source,
		})?;

		let mut content = Vec::with_capacity(metadata.len() as usize);
		file.read_to_end(&mut content).map_err(read_error)?;

		Ok(FileSnapshot {
			path: resolved,
			content,
			permissions: metadata.permissions(),
		})
	}
}

/// Write `prefix + substitution + suffix` over the snapshot's file.
///
/// The bytes go to a temporary file in the same directory which is then
/// renamed over the original, so a failure leaves the original untouched.
/// With `sync` set the temporary file is flushed to disk before the rename.
/// Read-only files are refused, since the rename would otherwise replace them.
pub fn write_spliced(
	snapshot: &FileSnapshot,
	prefix: &[u8],
	substitution: &[u8],
	suffix: &[u8],
	sync: bool,
) -> Result<()> {
	let path = &snapshot.path;
	let write_error = |source| SedrError::Write {
		path: path.clone(),
		source,
	};

	if snapshot.permissions.readonly() {
		return Err(write_error(std::io::Error::new(
			std::io::ErrorKind::PermissionDenied,
			"file is read-only",
		)));
	}

	let parent = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(write_error)?;

	temp.write_all(prefix).map_err(write_error)?;
	temp.write_all(substitution).map_err(write_error)?;
	temp.write_all(suffix).map_err(write_error)?;
	temp.flush().map_err(write_error)?;

	temp.as_file()
		.set_permissions(snapshot.permissions.clone())
		.map_err(write_error)?;

	if sync {
		temp.as_file().sync_all().map_err(|source| SedrError::Close {
			path: path.clone(),
			source,
		})?;
	}

	temp.persist(path).map_err(|e| write_error(e.error))?;

	Ok(())
}

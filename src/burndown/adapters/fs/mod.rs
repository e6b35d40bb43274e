//! Filesystem adapters rooted in capability directories.
//!
//! Each adapter opens its root once and never touches paths outside it.
//! Writes go to a temporary sibling first and are renamed into place.

mod sprint;
mod store;

pub use sprint::{DEFAULT_SPRINT_FILE, FsSprintSource};
pub use store::{DEFAULT_SNAPSHOT_TEMPLATE, FsSnapshotStore};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;

fn open_root(root: &Utf8Path) -> io::Result<Dir> {
    Dir::create_ambient_dir_all(root, ambient_authority())?;
    Dir::open_ambient_dir(root, ambient_authority())
}

fn replace_file(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let staging = format!("{file_name}.tmp");
    dir.write(&staging, contents)?;
    dir.rename(&staging, dir, file_name)
}

fn read_if_present(dir: &Dir, file_name: &str) -> io::Result<Option<String>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

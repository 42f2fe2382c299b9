//! Shared helpers for the tilevox command-line tools.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default `.vox` path: the input with its extension replaced.
pub fn default_vox_path(input: &Path) -> PathBuf {
    input.with_extension("vox")
}

/// Default horizontal strip path: `_h` appended to the input's file stem.
pub fn default_horizontal_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push("_h.png");
    input.with_file_name(name)
}

//! Output file commit: write beside the destination, then rename over it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Temporary sibling used while `path` is being written.
///
/// Keeps the original extension last so format detection by extension
/// still works on the temporary file.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Write a file through a temporary sibling and move it into place.
///
/// `write` receives the temporary path. The destination is only replaced
/// once `write` succeeds; on any error the temporary file is removed and an
/// existing destination stays as it was.
pub fn commit_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let tmp = temp_path_for(path);
    let result = write(&tmp).and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileError;

    fn temp_dir() -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("tilevox_output_{id}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        let tmp = temp_path_for(Path::new("out/walk_h.png"));
        assert_eq!(tmp, Path::new("out/.walk_h.png.tmp.png"));
    }

    #[test]
    fn test_commit_writes_destination() {
        let dir = temp_dir();
        let path = dir.join("model.vox");

        commit_file(&path, |tmp| Ok(fs::write(tmp, b"VOX ")?)).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"VOX ");
        assert!(!temp_path_for(&path).exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = temp_dir();
        let path = dir.join("model.vox");
        fs::write(&path, b"old").unwrap();

        let result = commit_file(&path, |tmp| {
            fs::write(tmp, b"partial")?;
            Err(TileError::PaletteOverflow { limit: 254 })
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), b"old");
        assert!(!temp_path_for(&path).exists());
        fs::remove_dir_all(dir).unwrap();
    }
}

use std::fs::File;
use std::io;
use std::path::Path;

/// Open `path` for reading. Directories are rejected here rather than at the
/// first read so callers see them as open failures.
pub fn open_file(path: &Path) -> io::Result<File> {
    let f = File::open(path)?;
    if f.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory, not a readable file",
        ));
    }
    Ok(f)
}

use crate::codec::Text;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the sample file
pub const DEFAULT_SAMPLE_DIR: &str = "./sample_data";
pub const DEFAULT_SAMPLE_FILE: &str = "out.txt";

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

pub fn default_sample_path() -> PathBuf {
    Path::new(DEFAULT_SAMPLE_DIR).join(DEFAULT_SAMPLE_FILE)
}

/// Write raw bytes to `path`, creating missing parent directories
/// An existing file is truncated and overwritten
pub fn write_sample(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    write_file(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote sample file");
    Ok(())
}

/// Read a file back verbatim as raw text
pub fn read_sample(path: &Path) -> Result<Text> {
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read sample file");
    Ok(Text::new(bytes))
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(unix)]
fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    file.write_all(contents)?;
    Ok(())
}

#[cfg(not(unix))]
fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;
    use crate::random::{Charset, TextGenerator};
    use tempfile::tempdir;

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample_data").join("nested").join("out.txt");

        let text = TextGenerator::new(11).generate(200, &Charset::default());
        write_sample(&path, text.as_bytes()).unwrap();

        let read = read_sample(&path).unwrap();
        assert_eq!(read, text);
        assert_eq!(Digest::sha256(read.as_bytes()), Digest::sha256(text.as_bytes()));
    }

    #[test]
    fn test_overwrite_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_sample(&path, b"a much longer first payload").unwrap();
        write_sample(&path, b"short").unwrap();
        assert_eq!(read_sample(&path).unwrap(), "short");
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("sample_data");
        let path = data_dir.join("out.txt");
        write_sample(&path, b"x").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, FILE_MODE);
        // umask may only clear bits
        let dir_mode = fs::metadata(&data_dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode & !DIR_MODE, 0);
        assert_ne!(dir_mode & 0o700, 0);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_sample(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_default_path() {
        assert!(default_sample_path().ends_with("sample_data/out.txt"));
    }
}

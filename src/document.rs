use crate::error::{CorrectError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read the whole input file as UTF-8 text.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CorrectError::FileNotFound(path.to_path_buf()),
        _ => CorrectError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write the corrected text, truncating or creating the file.
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| CorrectError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match read(&path) {
            Err(CorrectError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(matches!(read(&path), Err(CorrectError::Read { .. })));
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        write(&path, "short").unwrap();
        assert_eq!(read(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");

        assert!(matches!(
            write(&path, "text"),
            Err(CorrectError::Write { .. })
        ));
    }
}

//! Input acquisition: files, directory scans, and standard input.
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File extension picked up by directory-scan mode.
pub const SCAN_EXTENSION: &str = "json";

/// Reads one explicitly named inspect file. A missing path or a directory is
/// [`Error::InputNotFound`]; anything failing after that is a read failure.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Err(Error::InputNotFound(path.to_path_buf())),
        Ok(_) => {}
        Err(_) => return Err(Error::InputNotFound(path.to_path_buf())),
    }

    fs::read_to_string(path).map_err(|source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads standard input until the stream closes. Blocks indefinitely if the
/// producer never closes it.
pub fn read_stdin() -> Result<String> {
    let mut data = String::new();
    io::stdin()
        .read_to_string(&mut data)
        .map_err(|source| Error::ReadFailure {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(data)
}

/// Label used when reporting results for a named input.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Non-recursive listing of `dir`, keeping entries with the scan extension,
/// sorted by file name.
pub fn scan_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadFailure {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_match = path.is_file()
            && path
                .extension()
                .map(|ext| ext == SCAN_EXTENSION)
                .unwrap_or(false);
        if is_match {
            matches.push(path);
        }
    }

    matches.sort();
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_read_file_missing_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match read_file(dir.path().join("nope.json")) {
            Err(Error::InputNotFound(_)) => {}
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match read_file(dir.path()) {
            Err(Error::InputNotFound(_)) => {}
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.json");
        let mut file = File::create(&path).unwrap();
        write!(file, "[{{}}]").unwrap();

        assert_eq!(read_file(&path).unwrap(), "[{}]");
    }

    #[test]
    fn test_scan_dir_filters_and_orders() {
        let dir = tempfile::tempdir().unwrap();
        for name in &["b.json", "c.txt", "a.json"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("sub.json")).unwrap();

        let found = scan_dir(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}

//! Reading input lines from disk.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads every line of `path` into memory.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; terminators are stripped.
/// A missing file is reported as [`Error::Input`] with the offending path.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&text);
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Splits on `\n`, `\r\n` and `\r`. A trailing terminator does not produce
/// an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(rest[..pos].to_string());
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file_sizes.txt");
        std::fs::write(&path, "100\n200\r\nabc\n\n9").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["100", "200", "abc", "", "9"]);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match read_lines(&path) {
            Err(Error::Input { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected input error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [b'1', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        assert!(matches!(read_lines(&path), Err(Error::Input { .. })));
    }

    #[test]
    fn test_carriage_return_only_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classic_mac.txt");
        std::fs::write(&path, "100\r200\r15\r9\r").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["100", "200", "15", "9"]);
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\r\r"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(read_lines(&path).unwrap().is_empty());
    }
}

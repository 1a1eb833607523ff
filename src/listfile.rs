//! Sequential reader for plaintext list files.
//!
//! A list file names one item per line (template paths, for instance), with
//! `#` comments and blank lines ignored. Lines are consumed front to back.

use crate::error::{ArtgenError, Result};
use std::collections::VecDeque;
use std::path::Path;

/// A queue of non-empty, comment-stripped lines from a plaintext file.
#[derive(Debug, Clone)]
pub struct ListFile {
    lines: VecDeque<String>,
}

impl ListFile {
    /// Read a list file, stripping comments and skipping blank lines.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ArtgenError::UserError(format!(
                "failed to read list file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let lines = text
            .lines()
            .map(|raw| match raw.split_once('#') {
                Some((before, _)) => before.trim(),
                None => raw.trim(),
            })
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();

        Ok(Self { lines })
    }

    /// Pop the next line, front to back.
    pub fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Number of lines left to consume.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Iterator for ListFile {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_list(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_skips_comments_and_blanks_preserving_order() {
        let (_dir, path) = write_list("first.txt\n\n# a comment\nsecond.txt # trailing\n   \nthird.txt\n");
        let mut list = ListFile::load(&path).unwrap();

        assert_eq!(list.remaining(), 3);
        assert_eq!(list.next_line().as_deref(), Some("first.txt"));
        assert_eq!(list.next_line().as_deref(), Some("second.txt"));
        assert_eq!(list.next_line().as_deref(), Some("third.txt"));
        assert_eq!(list.next_line(), None);
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn test_empty_file() {
        let (_dir, path) = write_list("# nothing here\n\n");
        let mut list = ListFile::load(&path).unwrap();
        assert_eq!(list.remaining(), 0);
        assert_eq!(list.next_line(), None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ListFile::load(dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_iterator_adapter() {
        let (_dir, path) = write_list("a\nb\nc\n");
        let list = ListFile::load(&path).unwrap();
        let collected: Vec<String> = list.collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }
}

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File sink that appends one formatted line per call.
///
/// Only the path is stored. Each append opens the file in append mode,
/// creating it if absent, writes the line bytes, and drops the handle, so
/// the file is never held open between calls and is released on failure
/// paths as well. Lines already carry their terminator; no extra byte is
/// written.
#[derive(Clone, Debug)]
pub(crate) struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn append_creates_the_file_when_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.log");
        let sink = FileSink::new(&path);

        sink.append_line("first\r\n").expect("append succeeds");

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\r\n");
    }

    #[test]
    fn append_never_truncates_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.log");
        fs::write(&path, "existing\r\n").unwrap();

        let sink = FileSink::new(&path);
        sink.append_line("appended\r\n").expect("append succeeds");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "existing\r\nappended\r\n"
        );
    }

    #[test]
    fn append_fails_when_the_parent_directory_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("out.log");
        let sink = FileSink::new(&path);

        assert!(sink.append_line("line\r\n").is_err());
    }
}

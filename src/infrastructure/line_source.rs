// Infrastructure: Streaming line reader for input files
// Reads one line at a time so large inputs are never loaded whole

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::domain::{FormatError, Result};

/// Iterator over the lines of an input, with terminators stripped.
///
/// The underlying reader is dropped together with the source, so the file
/// handle is released as soon as iteration stops, whether it ran to the end
/// or was cut short by an error.
pub struct LineSource<R> {
    lines: Lines<R>,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(FormatError::EmptyPath);
        }
        if !path.exists() {
            return Err(FormatError::MissingFile(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(FormatError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_line_terminators() {
        let source = LineSource::from_reader(Cursor::new("a : 1\r\nb : 2\nc : 3\n"));
        let lines: Vec<String> = source.collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["a : 1", "b : 2", "c : 3"]);
    }

    #[test]
    fn test_keeps_blank_lines_in_the_middle() {
        let source = LineSource::from_reader(Cursor::new("a\n\nb"));
        let lines: Vec<String> = source.collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_path() {
        let err = LineSource::open("").err().unwrap();
        assert!(matches!(err, FormatError::EmptyPath));
        assert_eq!(err.to_string(), "File path is empty");
    }

    #[test]
    fn test_missing_file() {
        let err = LineSource::open("wrong_file_path").err().unwrap();
        assert!(matches!(err, FormatError::MissingFile(_)));
        assert!(err.to_string().starts_with("File doesn't exist"));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let mut source = LineSource::from_reader(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = source.next().unwrap().unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}

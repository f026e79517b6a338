use std::io::BufRead;
use std::path::Path;

use sortl_engine::MergeSorter;

use crate::LoadError;

/// The lines of one input file, in file order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    lines: Vec<String>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads every line of the file at `path` into a new sequence.
    ///
    /// On failure the error keeps whatever was read up to that point.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut sequence = Sequence::new();

        let result = std::fs::File::open(path)
            .map(std::io::BufReader::new)
            .and_then(|reader| sequence.extend_from_reader(reader));

        match result {
            Ok(()) => Ok(sequence),
            Err(source) => Err(LoadError::new(path.to_path_buf(), sequence, source)),
        }
    }

    /// Appends lines from `reader` until end of input or the first I/O error.
    ///
    /// A line ends at `\n`, `\r` or `\r\n`; the terminator is dropped and a
    /// final unterminated line is kept. Bytes that are not valid UTF-8 become
    /// U+FFFD. Lines read before an error stay in the sequence.
    pub fn extend_from_reader<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<()> {
        let mut line = Vec::new();
        let mut after_cr = false;

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            for &byte in buf {
                match byte {
                    // Second half of a `\r\n` pair.
                    b'\n' if after_cr => after_cr = false,
                    b'\n' | b'\r' => {
                        after_cr = byte == b'\r';
                        self.push_raw(&mut line);
                    }
                    _ => {
                        after_cr = false;
                        line.push(byte);
                    }
                }
            }

            let consumed = buf.len();
            reader.consume(consumed);
        }

        if !line.is_empty() {
            self.push_raw(&mut line);
        }
        Ok(())
    }

    fn push_raw(&mut self, raw: &mut Vec<u8>) {
        self.lines.push(String::from_utf8_lossy(raw).into_owned());
        raw.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Sorts the lines in ordinal order with a one-shot sorter.
    pub fn sort(&mut self) {
        self.sort_with(&mut MergeSorter::new());
    }

    /// Sorts the lines reusing `sorter`'s scratch buffer.
    pub fn sort_with(&mut self, sorter: &mut MergeSorter<String>) {
        sorter.sort(&mut self.lines);
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

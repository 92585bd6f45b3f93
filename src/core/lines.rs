// LoadSleuth - core/lines.rs
//
// Bounded, lossy line reader over any BufRead.
// Core layer: works on trait objects only, never opens files itself.
//
// Rule 11 compliance:
//   - A single line never buffers more than `max_bytes`; the remainder of an
//     over-long line is consumed and discarded without being stored.
//   - Invalid UTF-8 is replaced (U+FFFD) rather than aborting the stream.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, yielding owned `String`s without the
/// trailing `\n` / `\r\n`.
pub struct BoundedLines<R> {
    reader: R,
    max_bytes: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> BoundedLines<R> {
    pub fn new(reader: R, max_bytes: usize) -> Self {
        Self {
            reader,
            max_bytes,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        let mut read_any = false;
        let mut truncated = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if available.is_empty() {
                self.done = true;
                break;
            }
            read_any = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let chunk = match newline {
                Some(i) => &available[..i],
                None => available,
            };

            let room = self.max_bytes.saturating_sub(self.buf.len());
            let take = chunk.len().min(room);
            if take < chunk.len() {
                truncated = true;
            }
            self.buf.extend_from_slice(&chunk[..take]);

            let consumed = chunk.len() + usize::from(newline.is_some());
            self.reader.consume(consumed);
            if newline.is_some() {
                break;
            }
        }

        if !read_any {
            return None;
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if truncated {
            tracing::debug!(
                max_bytes = self.max_bytes,
                "Over-long input line truncated"
            );
        }

        Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn collect(input: &[u8], max: usize) -> Vec<String> {
        BoundedLines::new(Cursor::new(input), max)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_splits_lf_and_crlf() {
        assert_eq!(collect(b"a\r\nb\nc", 64), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_newline_yields_no_empty_line() {
        assert_eq!(collect(b"a\n", 64), vec!["a"]);
        assert!(collect(b"", 64).is_empty());
    }

    #[test]
    fn test_blank_lines_preserved() {
        assert_eq!(collect(b"a\n\nb\n", 64), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_line_truncated_and_next_line_intact() {
        let mut input = vec![b'x'; 100];
        input.extend_from_slice(b"\nshort\n");
        // Tiny BufReader capacity forces the line across several fill_buf calls.
        let reader = BufReader::with_capacity(7, Cursor::new(input));
        let lines: Vec<String> = BoundedLines::new(reader, 10)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["x".repeat(10), "short".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = collect(b"ok \xff\xfe end\n", 64);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ok "));
        assert!(lines[0].ends_with(" end"));
        assert!(lines[0].contains('\u{FFFD}'));
    }
}

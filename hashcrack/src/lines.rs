use std::io::{self, BufRead, Read};

/// Longest line accepted from either input, in bytes (terminator excluded).
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// One line produced by [`Lines`].
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Non-blank text with its terminator stripped.
    Text(&'a [u8]),
    /// Longer than the configured limit; the content is dropped.
    TooLong { len: usize },
}

/// Reads a stream line by line, stripping `\n` / `\r\n` and skipping blank lines.
///
/// Lines are raw bytes. There is no fixed buffer, but lines over `max_len`
/// are reported as [`Line::TooLong`] instead of being returned.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    max_len: usize,
    line_no: u64,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self { reader, buf: Vec::with_capacity(128), max_len, line_no: 0 }
    }

    /// 1-based number of the line most recently returned.
    pub fn line_no(&self) -> u64 {
        self.line_no
    }

    /// Returns the next non-blank line with its 1-based number, or `None` at end of stream.
    ///
    /// At most `max_len + 2` bytes of a line are buffered; the rest of an
    /// over-long line is consumed from the reader without being stored.
    pub fn next_line(&mut self) -> io::Result<Option<(u64, Line<'_>)>> {
        // room for a "\r\n" terminator after a line of exactly max_len bytes
        let limit = self.max_len as u64 + 2;
        loop {
            self.buf.clear();
            let n = (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf)?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            if n as u64 == limit && self.buf.last() != Some(&b'\n') {
                let len = self.skip_rest_of_line(n)?;
                return Ok(Some((self.line_no, Line::TooLong { len })));
            }

            let len = trimmed_len(&self.buf);
            if len == 0 {
                continue;
            }
            if len > self.max_len {
                return Ok(Some((self.line_no, Line::TooLong { len })));
            }
            return Ok(Some((self.line_no, Line::Text(&self.buf[..len]))));
        }
    }

    /// Discards input up to and including the next `\n`.
    ///
    /// `len` bytes of the line were already read; returns the full line
    /// length, terminator excluded.
    fn skip_rest_of_line(&mut self, mut len: usize) -> io::Result<usize> {
        let mut prev = self.buf.last().copied();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(len);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    let before = if i > 0 { Some(available[i - 1]) } else { prev };
                    let cr = usize::from(before == Some(b'\r'));
                    self.reader.consume(i + 1);
                    return Ok(len + i - cr);
                }
                None => {
                    let used = available.len();
                    prev = available.last().copied();
                    self.reader.consume(used);
                    len += used;
                }
            }
        }
    }
}

/// Length of `line` once trailing `\n` and `\r` characters are removed.
#[inline]
fn trimmed_len(line: &[u8]) -> usize {
    let mut len = line.len();
    while len > 0 && matches!(line[len - 1], b'\n' | b'\r') {
        len -= 1;
    }
    len
}

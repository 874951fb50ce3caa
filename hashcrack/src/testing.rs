//! Readers for exercising I/O failure paths.

use std::io::{self, Read};

/// Returns `data` and then fails every read after it.
pub struct FailingReader {
    data: &'static [u8],
}

impl FailingReader {
    pub fn new(data: &'static [u8]) -> Self {
        Self { data }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

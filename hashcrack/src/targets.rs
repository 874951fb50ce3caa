use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::digest::Algorithm;
use crate::error::{Error, Source};
use crate::lines::{Line, Lines};

/// The digests an attack is trying to match, loaded once and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct TargetSet {
    digests: HashSet<String>,
}

impl TargetSet {
    /// Reads one digest per line from `reader`.
    ///
    /// Lines are stored verbatim after terminator stripping, so matching stays
    /// exact and case-sensitive. Lines that do not look like an `algorithm`
    /// digest are kept but logged, since they can only match by accident.
    pub fn load<R: BufRead>(
        reader: R,
        algorithm: Algorithm,
        max_line_len: usize,
    ) -> Result<Self, Error> {
        let mut lines = Lines::new(reader, max_line_len);
        let mut digests = HashSet::new();
        let mut suspicious = 0usize;

        loop {
            let (line_no, line) = match lines.next_line() {
                Ok(Some(next)) => next,
                Ok(None) => break,
                Err(source) => {
                    return Err(Error::Read {
                        source_kind: Source::Hashes,
                        line: lines.line_no() + 1,
                        source,
                    });
                }
            };

            let text = match line {
                Line::Text(text) => text,
                Line::TooLong { len } => {
                    warn!(line = line_no, len, "skipping over-long hash line");
                    continue;
                }
            };

            let Ok(digest) = std::str::from_utf8(text) else {
                warn!(line = line_no, "skipping hash line that is not valid UTF-8");
                continue;
            };

            if !algorithm.looks_like_digest(digest) {
                suspicious += 1;
                warn!(line = line_no, %algorithm, digest, "hash line is not a well-formed digest");
            }

            digests.insert(digest.to_owned());
        }

        debug!(targets = digests.len(), suspicious, "loaded target hashes");
        Ok(Self { digests })
    }

    /// Opens and loads the hash file at `path`.
    pub fn from_path(
        path: &Path,
        algorithm: Algorithm,
        max_line_len: usize,
    ) -> Result<Self, Error> {
        let reader = crate::open_input(path, Source::Hashes)?;
        Self::load(reader, algorithm, max_line_len)
    }

    /// Returns the stored entry equal to `digest`, if any.
    #[inline]
    pub fn get(&self, digest: &str) -> Option<&str> {
        self.digests.get(digest).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(digest)
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TargetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { digests: iter.into_iter().map(Into::into).collect() }
    }
}

use std::io::BufRead;

use tracing::{trace, warn};

use crate::collector::MatchRecord;
use crate::digest::Digester;
use crate::engine::Matcher;
use crate::error::{Error, Source};
use crate::lines::{Line, Lines};

/// Counters for one pass over a dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Words handed to the matcher.
    pub words: u64,
    /// Lines rejected for exceeding the length limit.
    pub too_long: u64,
    /// Words whose digest could not be computed.
    pub digest_failures: u64,
    /// Matches produced, duplicates included.
    pub hits: u64,
}

/// Streams a dictionary through a [`Matcher`], yielding one record per hit.
///
/// Reading stops at the first I/O error, which is yielded once.
pub struct Driver<'t, R, D> {
    lines: Lines<R>,
    matcher: Matcher<'t, D>,
    stats: ScanStats,
    done: bool,
}

impl<'t, R: BufRead, D: Digester> Driver<'t, R, D> {
    pub fn new(reader: R, matcher: Matcher<'t, D>, max_line_len: usize) -> Self {
        Self {
            lines: Lines::new(reader, max_line_len),
            matcher,
            stats: ScanStats::default(),
            done: false,
        }
    }

    pub fn stats(&self) -> ScanStats {
        ScanStats { digest_failures: self.matcher.failures(), ..self.stats }
    }
}

impl<R: BufRead, D: Digester> Iterator for Driver<'_, R, D> {
    type Item = Result<MatchRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let (line_no, line) = match self.lines.next_line() {
                Ok(Some(next)) => next,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(source) => {
                    self.done = true;
                    let line = self.lines.line_no() + 1;
                    return Some(Err(Error::Read { source_kind: Source::Dictionary, line, source }));
                }
            };

            let word = match line {
                Line::Text(word) => word,
                Line::TooLong { len } => {
                    self.stats.too_long += 1;
                    warn!(line = line_no, len, "skipping over-long dictionary line");
                    continue;
                }
            };

            self.stats.words += 1;
            if let Some(digest) = self.matcher.try_word(word) {
                self.stats.hits += 1;
                trace!(line = line_no, digest, "hit");
                return Some(Ok(MatchRecord::new(digest, word)));
            }
        }
    }
}

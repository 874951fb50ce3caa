use std::borrow::Cow;
use std::collections::HashSet;

use tracing::{debug, error};

use crate::error::Error;

/// A target digest paired with the dictionary word that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub digest: String,
    pub word: Vec<u8>,
}

impl MatchRecord {
    pub fn new(digest: impl Into<String>, word: impl Into<Vec<u8>>) -> Self {
        Self { digest: digest.into(), word: word.into() }
    }

    /// The word as text, with invalid UTF-8 replaced.
    pub fn word_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }
}

/// Everything a run discovered, in first-discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub cracked: Vec<MatchRecord>,
    /// Set when collection stopped early because memory ran out.
    pub truncated: bool,
}

impl Report {
    /// Number of distinct digests cracked.
    pub fn count(&self) -> usize {
        self.cracked.len()
    }
}

/// Accumulates match records, keeping only the first record per digest.
#[derive(Debug, Default)]
pub struct Collector {
    seen: HashSet<String>,
    cracked: Vec<MatchRecord>,
    limit: Option<usize>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector that holds at most `limit` records.
    ///
    /// Accepting past the limit fails exactly like running out of memory.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    /// Takes ownership of `record` unless its digest was already cracked.
    ///
    /// Returns the stored record when it is new and `None` for a duplicate.
    /// If memory for the record cannot be reserved, nothing is stored and
    /// [`Error::ResourceExhausted`] is returned; earlier records are kept.
    pub fn accept(&mut self, record: MatchRecord) -> Result<Option<&MatchRecord>, Error> {
        if self.seen.contains(&record.digest) {
            debug!(digest = %record.digest, word = %record.word_lossy(), "duplicate crack ignored");
            return Ok(None);
        }

        let collected = self.cracked.len();
        if self.limit.is_some_and(|limit| collected >= limit) {
            return Err(Error::ResourceExhausted { collected });
        }
        self.seen
            .try_reserve(1)
            .and_then(|()| self.cracked.try_reserve(1))
            .map_err(|_| Error::ResourceExhausted { collected })?;

        self.seen.insert(record.digest.clone());
        self.cracked.push(record);
        Ok(self.cracked.last())
    }

    pub fn is_cracked(&self, digest: &str) -> bool {
        self.seen.contains(digest)
    }

    pub fn count(&self) -> usize {
        self.cracked.len()
    }

    pub fn into_report(self) -> Report {
        Report { cracked: self.cracked, truncated: false }
    }

    /// Drains `records` into a [`Report`], stopping early if memory runs out.
    pub fn collect<I>(records: I) -> Report
    where
        I: IntoIterator<Item = MatchRecord>,
    {
        Self::new().collect_from(records)
    }

    /// Like [`Collector::collect`], keeping whatever this collector already holds.
    pub fn collect_from<I>(mut self, records: I) -> Report
    where
        I: IntoIterator<Item = MatchRecord>,
    {
        for record in records {
            if let Err(e) = self.accept(record) {
                error!(error = %e, "stopping early, reporting what was found");
                let mut report = self.into_report();
                report.truncated = true;
                return report;
            }
        }
        self.into_report()
    }
}

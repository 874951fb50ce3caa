//! Dictionary attack against unsalted password digests.
//!
//! A [`TargetSet`] is loaded from a file of hex digests, one per line. Every
//! word of a dictionary is then hashed and looked up in it by a [`Matcher`],
//! driven line by line by a [`Driver`]. A [`Collector`] keeps the first word
//! found for each digest so every cracked hash is reported exactly once, in
//! the order it was discovered.
//!
//! Both inputs are plain text, one entry per line. `\n` and `\r\n`
//! terminators are stripped and blank lines are ignored. Matching is exact:
//! `5D41...` in a hash file will never match the lowercase digest of a word.
//!
//! ```
//! use hashcrack::{Config, crack};
//!
//! let hashes = &b"5d41402abc4b2a76b9719d911017c592\n"[..];
//! let dictionary = &b"world\nhello\n"[..];
//!
//! let (report, _stats) = crack(hashes, dictionary, &Config::default()).unwrap();
//! assert_eq!(report.count(), 1);
//! assert_eq!(report.cracked[0].word, b"hello");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error};

pub mod collector;
pub mod digest;
pub mod driver;
pub mod engine;
pub mod error;
pub mod lines;
pub mod targets;

#[cfg(test)]
mod testing;

pub use collector::{Collector, MatchRecord, Report};
pub use digest::{Algorithm, Digester};
pub use driver::{Driver, ScanStats};
pub use engine::Matcher;
pub use error::{DigestError, Error, Source};
pub use lines::DEFAULT_MAX_LINE_LEN;
pub use targets::TargetSet;

/// Settings shared by both input readers and the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    /// Lines longer than this many bytes are skipped.
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { algorithm: Algorithm::default(), max_line_len: DEFAULT_MAX_LINE_LEN }
    }
}

/// Opens one of the two input files for buffered line reading.
pub fn open_input(path: &Path, source_kind: Source) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        source_kind,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Runs a whole attack over two in-memory or already-open streams.
///
/// Read errors on either stream abort the run. If memory runs out while
/// collecting, the partial report is returned with `truncated` set.
pub fn crack<H, W>(hashes: H, dictionary: W, config: &Config) -> Result<(Report, ScanStats), Error>
where
    H: BufRead,
    W: BufRead,
{
    let targets = TargetSet::load(hashes, config.algorithm, config.max_line_len)?;
    let matcher = Matcher::new(&targets, config.algorithm);
    let mut driver = Driver::new(dictionary, matcher, config.max_line_len);
    let mut collector = Collector::new();

    while let Some(record) = driver.next() {
        if let Err(e) = collector.accept(record?) {
            error!(error = %e, "stopping early, reporting what was found");
            let mut report = collector.into_report();
            report.truncated = true;
            return Ok((report, driver.stats()));
        }
    }

    let stats = driver.stats();
    debug!(?stats, cracked = collector.count(), "scan finished");
    Ok((collector.into_report(), stats))
}

use std::fmt;
use std::path::PathBuf;

/// Which of the two input streams an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Hashes,
    Dictionary,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Hashes => f.write_str("hash file"),
            Source::Dictionary => f.write_str("dictionary file"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {source_kind} '{path}': {source}")]
    Open {
        source_kind: Source,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {source_kind} at line {line}: {source}")]
    Read {
        source_kind: Source,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("out of memory after collecting {collected} cracked hashes")]
    ResourceExhausted { collected: usize },
}

/// A digest could not be computed for one candidate word.
///
/// This never aborts a scan; the word is skipped.
#[derive(Debug, thiserror::Error)]
#[error("{algorithm} digest failed: {reason}")]
pub struct DigestError {
    pub algorithm: &'static str,
    pub reason: String,
}

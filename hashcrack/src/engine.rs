//! Matching of single candidate words against the target set.

use std::cell::Cell;

use tracing::warn;

use crate::digest::Digester;
use crate::error::DigestError;
use crate::targets::TargetSet;

/// Tests candidate words against a loaded [`TargetSet`].
///
/// Holds only shared borrows: trying a word never mutates the targets.
pub struct Matcher<'t, D> {
    targets: &'t TargetSet,
    digester: D,
    failures: Cell<u64>,
}

impl<'t, D: Digester> Matcher<'t, D> {
    pub fn new(targets: &'t TargetSet, digester: D) -> Self {
        Self { targets, digester, failures: Cell::new(0) }
    }

    /// Words [`Matcher::try_word`] skipped because their digest failed.
    pub fn failures(&self) -> u64 {
        self.failures.get()
    }

    /// Hashes `word` and looks the digest up.
    ///
    /// Returns the target set's own entry on a hit and `Ok(None)` on a miss.
    /// An `Err` means the digest could not be computed at all.
    #[inline]
    pub fn check(&self, word: &[u8]) -> Result<Option<&'t str>, DigestError> {
        if self.targets.is_empty() {
            return Ok(None);
        }
        let digest = self.digester.digest(word)?;
        Ok(self.targets.get(&digest))
    }

    /// Like [`Matcher::check`], but a digest failure is logged and treated as a miss.
    pub fn try_word(&self, word: &[u8]) -> Option<&'t str> {
        match self.check(word) {
            Ok(found) => found,
            Err(e) => {
                self.failures.set(self.failures.get() + 1);
                warn!(word = %String::from_utf8_lossy(word), error = %e, "skipping word");
                None
            }
        }
    }
}

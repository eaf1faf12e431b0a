//! At most one save in flight

use crate::error::{Result, SolaceError};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SaveGuard {
    saving: AtomicBool,
}

/// Held for the duration of a save; releases the guard when dropped.
#[derive(Debug)]
pub struct SavePermit<'a> {
    saving: &'a AtomicBool,
}

impl SaveGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard, or fail with `SaveInProgress` naming `what`.
    pub fn begin(&self, what: &'static str) -> Result<SavePermit<'_>> {
        self.saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SolaceError::SaveInProgress(what))?;
        Ok(SavePermit {
            saving: &self.saving,
        })
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }
}

impl Drop for SavePermit<'_> {
    fn drop(&mut self) {
        self.saving.store(false, Ordering::Release);
    }
}

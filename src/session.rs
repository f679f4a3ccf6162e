//! Transient per-user session state between showing a suggestion dialog and
//! applying the accepted correction.

/// The cell a correction dialog was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEditTarget {
    pub sheet_id: String,
    pub cell_address: String,
}

impl PendingEditTarget {
    pub fn new(sheet_id: impl Into<String>, cell_address: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            cell_address: cell_address.into(),
        }
    }
}

/// One-slot mailbox for the pending edit target.
///
/// Each new check overwrites the slot, which quietly invalidates the
/// write-back of any dialog still open from an earlier check; write-back is
/// best effort so that is acceptable.
#[derive(Debug, Default)]
pub struct ProofSession {
    pending: Option<PendingEditTarget>,
}

impl ProofSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember_target(&mut self, target: PendingEditTarget) {
        if let Some(previous) = &self.pending {
            tracing::debug!(
                sheet_id = %previous.sheet_id,
                cell = %previous.cell_address,
                "Overwriting pending edit target"
            );
        }
        self.pending = Some(target);
    }

    /// Take the pending target, leaving the slot empty.
    pub fn take_target(&mut self) -> Option<PendingEditTarget> {
        self.pending.take()
    }

    pub fn pending_target(&self) -> Option<&PendingEditTarget> {
        self.pending.as_ref()
    }
}

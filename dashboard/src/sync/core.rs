//! Sync state machine - pure logic, no RSX, no signals.
//!
//! One instance is shared by the shell and the mounted settings page. The
//! page pushes its dirty state here; the shell drives Save/Revert/Reset
//! transitions and the navigation guard reads it.

/// Save/sync state for the mounted settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No pending edits.
    Clean,
    /// The page has edits not yet persisted.
    Dirty,
    /// A save request is in flight.
    Saving,
    /// A reset-to-defaults request is in flight.
    Resetting,
}

#[derive(Debug, Clone)]
pub struct SyncCore {
    state: SyncState,
    /// Latches edits reported while a save was in flight, so a successful
    /// save lands back on `Dirty` instead of silently discarding them.
    dirty_while_saving: bool,
    /// State to resume if a reset fails (no state change applied).
    resume_dirty: bool,
}

impl SyncCore {
    pub fn new() -> Self {
        Self {
            state: SyncState::Clean,
            dirty_while_saving: false,
            resume_dirty: false,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SyncState::Dirty
    }

    pub fn is_saving(&self) -> bool {
        self.state == SyncState::Saving
    }

    pub fn is_resetting(&self) -> bool {
        self.state == SyncState::Resetting
    }

    /// Navigation is blocked for the whole duration of a pending write,
    /// not just while dirty.
    pub fn blocks_navigation(&self) -> bool {
        self.state != SyncState::Clean
    }

    /// A page finished mounting with a fresh snapshot; nothing is pending.
    pub fn page_mounted(&mut self) {
        *self = Self::new();
    }

    /// Pushed by the page on every edit, including edits that restore the
    /// original values. Idempotent.
    pub fn report_dirty(&mut self, dirty: bool) {
        match (self.state, dirty) {
            (SyncState::Clean, true) => self.state = SyncState::Dirty,
            (SyncState::Dirty, false) => self.state = SyncState::Clean,
            (SyncState::Saving, _) => self.dirty_while_saving = dirty,
            _ => {}
        }
    }

    /// Returns false (and does nothing) unless there are edits to save;
    /// a second click while a save is in flight is ignored.
    pub fn begin_save(&mut self) -> bool {
        if self.state != SyncState::Dirty {
            return false;
        }
        self.state = SyncState::Saving;
        self.dirty_while_saving = false;
        true
    }

    pub fn finish_save(&mut self, ok: bool) {
        if self.state != SyncState::Saving {
            return;
        }
        self.state = if !ok || self.dirty_while_saving {
            SyncState::Dirty
        } else {
            SyncState::Clean
        };
        self.dirty_while_saving = false;
    }

    /// Discarding edits is synchronous and always succeeds client-side.
    /// Idempotent: once clean, further reverts are no-ops.
    pub fn revert(&mut self) -> bool {
        if self.state != SyncState::Dirty {
            return false;
        }
        self.state = SyncState::Clean;
        true
    }

    pub fn begin_reset(&mut self) -> bool {
        match self.state {
            SyncState::Clean | SyncState::Dirty => {
                self.resume_dirty = self.state == SyncState::Dirty;
                self.state = SyncState::Resetting;
                true
            }
            _ => false,
        }
    }

    pub fn finish_reset(&mut self, ok: bool) {
        if self.state != SyncState::Resetting {
            return;
        }
        self.state = if !ok && self.resume_dirty {
            SyncState::Dirty
        } else {
            SyncState::Clean
        };
        self.resume_dirty = false;
    }
}

impl Default for SyncCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clean_and_unblocked() {
        let core = SyncCore::new();
        assert_eq!(core.state(), SyncState::Clean);
        assert!(!core.blocks_navigation());
    }

    #[test]
    fn edits_toggle_between_clean_and_dirty() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        assert_eq!(core.state(), SyncState::Dirty);
        // Editing back to the original values clears dirty without a save.
        core.report_dirty(false);
        assert_eq!(core.state(), SyncState::Clean);
        // Idempotent in both directions.
        core.report_dirty(false);
        assert_eq!(core.state(), SyncState::Clean);
        core.report_dirty(true);
        core.report_dirty(true);
        assert_eq!(core.state(), SyncState::Dirty);
    }

    #[test]
    fn save_only_starts_from_dirty() {
        let mut core = SyncCore::new();
        assert!(!core.begin_save());

        core.report_dirty(true);
        assert!(core.begin_save());
        assert_eq!(core.state(), SyncState::Saving);
        // Re-entrant click while in flight is ignored.
        assert!(!core.begin_save());
    }

    #[test]
    fn successful_save_clears_dirty() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        core.finish_save(true);
        assert_eq!(core.state(), SyncState::Clean);
    }

    #[test]
    fn failed_save_keeps_dirty() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        core.finish_save(false);
        assert_eq!(core.state(), SyncState::Dirty);
    }

    #[test]
    fn edits_during_save_stay_pending_after_success() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        core.report_dirty(true);
        core.finish_save(true);
        assert_eq!(core.state(), SyncState::Dirty);
    }

    #[test]
    fn edits_undone_during_save_finish_clean() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        core.report_dirty(true);
        core.report_dirty(false);
        core.finish_save(true);
        assert_eq!(core.state(), SyncState::Clean);
    }

    #[test]
    fn revert_is_idempotent() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        assert!(core.revert());
        assert_eq!(core.state(), SyncState::Clean);
        assert!(!core.revert());
        assert_eq!(core.state(), SyncState::Clean);
    }

    #[test]
    fn navigation_blocks_while_dirty_saving_and_resetting() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        assert!(core.blocks_navigation());

        core.begin_save();
        assert!(core.blocks_navigation());
        core.finish_save(true);
        assert!(!core.blocks_navigation());

        core.begin_reset();
        assert!(core.blocks_navigation());
        core.finish_reset(true);
        assert!(!core.blocks_navigation());
    }

    #[test]
    fn failed_reset_restores_prior_state() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_reset();
        core.finish_reset(false);
        assert_eq!(core.state(), SyncState::Dirty);

        let mut core = SyncCore::new();
        core.begin_reset();
        core.finish_reset(false);
        assert_eq!(core.state(), SyncState::Clean);
    }

    #[test]
    fn successful_reset_lands_clean() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_reset();
        core.finish_reset(true);
        assert_eq!(core.state(), SyncState::Clean);
    }

    #[test]
    fn reset_rejected_while_saving() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        assert!(!core.begin_reset());
        assert_eq!(core.state(), SyncState::Saving);
    }

    #[test]
    fn mount_resets_everything() {
        let mut core = SyncCore::new();
        core.report_dirty(true);
        core.begin_save();
        core.report_dirty(true);
        core.page_mounted();
        assert_eq!(core.state(), SyncState::Clean);
        core.finish_save(true);
        assert_eq!(core.state(), SyncState::Clean);
    }
}

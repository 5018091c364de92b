//! Original/current snapshot pair for one settings page - pure logic,
//! no RSX, no signals.

/// Holds the last-persisted snapshot alongside the edited one. Dirty is
/// always structural inequality between the two, never a sticky flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PageForm<T> {
    original: T,
    current: T,
}

impl<T: Clone + PartialEq> PageForm<T> {
    pub fn new(snapshot: T) -> Self {
        Self {
            original: snapshot.clone(),
            current: snapshot,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Apply one edit and return the new dirty state. The result must be
    /// re-reported after every edit: editing back to the original values
    /// flips dirty off again.
    pub fn edit(&mut self, mutate: impl FnOnce(&mut T)) -> bool {
        mutate(&mut self.current);
        self.is_dirty()
    }

    /// Discard edits; `current` becomes `original` again.
    pub fn revert(&mut self) {
        self.current = self.original.clone();
    }

    /// Accept `persisted` as the new baseline after a successful save.
    /// Edits made while the save was in flight stay pending: dirty is
    /// recomputed against what was actually persisted, not cleared.
    pub fn commit(&mut self, persisted: T) {
        self.original = persisted;
    }

    /// Replace both sides (initial fetch, reload after a reset).
    pub fn replace(&mut self, snapshot: T) {
        *self = Self::new(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_types::{AutoRoleSettings, BasicSettings};

    #[test]
    fn dirty_tracks_structural_equality_across_edits() {
        let mut form = PageForm::new(BasicSettings::default());
        assert!(!form.is_dirty());

        assert!(form.edit(|s| s.prefix = "?".to_string()));
        assert!(form.edit(|s| s.nickname = Some("Guildbot".to_string())));

        // Editing everything back to the original clears dirty with no save.
        assert!(form.edit(|s| s.nickname = None));
        assert!(!form.edit(|s| s.prefix = "!".to_string()));
        assert!(!form.is_dirty());
    }

    #[test]
    fn revert_is_idempotent() {
        let mut form = PageForm::new(BasicSettings::default());
        form.edit(|s| s.prefix = "$".to_string());

        form.revert();
        assert!(!form.is_dirty());
        assert_eq!(form.current(), form.original());

        form.revert();
        assert!(!form.is_dirty());
        assert_eq!(form.current().prefix, "!");
    }

    #[test]
    fn save_round_trip_moves_the_baseline() {
        let mut form = PageForm::new(BasicSettings::default());
        form.edit(|s| s.prefix = "?".to_string());

        // The shell collected `current` and the POST succeeded.
        let persisted = form.current().clone();
        form.commit(persisted);

        assert!(!form.is_dirty());
        assert_eq!(form.original().prefix, "?");
    }

    #[test]
    fn edits_during_a_save_stay_pending() {
        let mut form = PageForm::new(BasicSettings::default());
        form.edit(|s| s.prefix = "?".to_string());

        // Snapshot collected for the in-flight save.
        let persisted = form.current().clone();

        // User keeps typing while the request is pending.
        form.edit(|s| s.prefix = "??".to_string());

        form.commit(persisted);
        assert!(form.is_dirty());
        assert_eq!(form.current().prefix, "??");
        assert_eq!(form.original().prefix, "?");
    }

    #[test]
    fn reload_replaces_both_sides() {
        let mut form = PageForm::new(BasicSettings::default());
        form.edit(|s| s.prefix = "?".to_string());

        form.replace(BasicSettings::default());
        assert!(!form.is_dirty());
        assert_eq!(form.current().prefix, "!");
    }

    #[test]
    fn auto_role_add_then_revert_scenario() {
        let mut form = PageForm::new(AutoRoleSettings::default());
        assert!(form.current().user_roles.is_empty());
        assert!(form.current().bot_roles.is_empty());

        let dirty = form.edit(|s| s.user_roles.push("123".to_string()));
        assert!(dirty);

        form.revert();
        assert!(!form.is_dirty());
        assert!(form.current().user_roles.is_empty());
        assert!(form.current().bot_roles.is_empty());
    }
}

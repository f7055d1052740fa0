//! Window State Store: the single source of truth for per-application window records, the
//! active application, and the stacking counter.
//!
//! Every operation is total. Operations on an application that has no record (or whose record is
//! in the wrong state) leave the store untouched and report `false`; nothing here panics or
//! returns an error.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{AppId, Point, Size, WindowRecord};

/// Value of the stacking counter before the first raise.
pub const INITIAL_Z_INDEX: u32 = 10;
/// Origin used when a record has to be synthesized on first open.
pub const FALLBACK_WINDOW_POSITION: Point = Point::new(100, 100);

/// What [`WindowStore::open`] did to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The window was closed (or had no record) and is now open on top.
    Opened,
    /// The window was minimized and is now restored on top.
    Restored,
    /// The window was already visible but not active; it was raised.
    Raised,
    /// The window was already the active one, so the click minimized it.
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStore {
    windows: BTreeMap<AppId, WindowRecord>,
    active: Option<AppId>,
    max_z: u32,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
            active: None,
            max_z: INITIAL_Z_INDEX,
        }
    }
}

impl WindowStore {
    /// Builds a store from pre-seeded records. The record map is keyed by id, so a later record
    /// for the same id replaces an earlier one.
    pub fn seeded(records: impl IntoIterator<Item = WindowRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            store.windows.insert(record.id, record);
        }
        store
    }

    pub fn record(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub fn active(&self) -> Option<AppId> {
        self.active
    }

    pub fn is_active(&self, id: AppId) -> bool {
        self.active == Some(id)
    }

    /// Highest z-index handed out so far. Never decreases.
    pub fn max_z(&self) -> u32 {
        self.max_z
    }

    /// Applications whose windows are open, minimized ones included (they stay in the dock).
    pub fn open_ids(&self) -> BTreeSet<AppId> {
        self.windows
            .values()
            .filter(|w| w.is_open)
            .map(|w| w.id)
            .collect()
    }

    /// Visible windows from bottom to top.
    pub fn stacking_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<_> = self.windows.values().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| (w.z_index, w.id));
        visible
    }

    /// Dock-click semantics. See [`OpenOutcome`] for the four cases. `seed` builds the record
    /// when the application has never been seeded.
    pub fn open_with(&mut self, id: AppId, seed: impl FnOnce() -> WindowRecord) -> OpenOutcome {
        let active = self.active;
        let record = self.windows.entry(id).or_insert_with(seed);

        if record.is_visible() && active == Some(id) {
            record.is_minimized = true;
            self.active = None;
            return OpenOutcome::Minimized;
        }

        let outcome = if record.is_minimized {
            OpenOutcome::Restored
        } else if record.is_open {
            OpenOutcome::Raised
        } else {
            OpenOutcome::Opened
        };

        self.max_z += 1;
        record.is_open = true;
        record.is_minimized = false;
        record.z_index = self.max_z;
        self.active = Some(id);
        outcome
    }

    /// [`Self::open_with`] using a generic default record.
    pub fn open(&mut self, id: AppId) -> OpenOutcome {
        self.open_with(id, || {
            WindowRecord::closed(id, id.as_str(), FALLBACK_WINDOW_POSITION, Size::default())
        })
    }

    /// Raises a visible window above every other window and makes it active.
    pub fn focus(&mut self, id: AppId) -> bool {
        let Some(record) = self.windows.get_mut(&id) else {
            return false;
        };
        if !record.is_visible() {
            return false;
        }
        self.max_z += 1;
        record.z_index = self.max_z;
        self.active = Some(id);
        true
    }

    /// Closes the window, keeping its geometry and maximize flag for the next open.
    pub fn close(&mut self, id: AppId) -> bool {
        let Some(record) = self.windows.get_mut(&id) else {
            return false;
        };
        let was_active = self.active == Some(id);
        if was_active {
            self.active = None;
        }
        if !record.is_open {
            return was_active;
        }
        record.is_open = false;
        // a closed window cannot stay minimized
        record.is_minimized = false;
        true
    }

    pub fn minimize(&mut self, id: AppId) -> bool {
        let Some(record) = self.windows.get_mut(&id) else {
            return false;
        };
        if !record.is_open {
            return false;
        }
        let was_active = self.active == Some(id);
        if was_active {
            self.active = None;
        }
        let changed = !record.is_minimized || was_active;
        record.is_minimized = true;
        changed
    }

    /// Commits a free-floating origin. Ignored while maximized.
    pub fn set_position(&mut self, id: AppId, position: Point) -> bool {
        match self.windows.get_mut(&id) {
            Some(record) if !record.is_maximized && record.position != position => {
                record.position = position;
                true
            }
            _ => false,
        }
    }

    /// Commits free-floating dimensions. Ignored while maximized or for non-positive sizes.
    pub fn set_size(&mut self, id: AppId, size: Size) -> bool {
        if !size.is_positive() {
            return false;
        }
        match self.windows.get_mut(&id) {
            Some(record) if !record.is_maximized && record.size != size => {
                record.size = size;
                true
            }
            _ => false,
        }
    }

    /// Flips the maximize flag. Stored geometry is left alone so un-maximizing restores it.
    pub fn toggle_maximize(&mut self, id: AppId) -> bool {
        let Some(record) = self.windows.get_mut(&id) else {
            return false;
        };
        record.is_maximized = !record.is_maximized;
        true
    }

    /// Recomputes every record title, e.g. after a locale change.
    pub fn retitle_all(&mut self, title_for: impl Fn(AppId) -> String) -> bool {
        let mut changed = false;
        for record in self.windows.values_mut() {
            let title = title_for(record.id);
            if record.title != title {
                record.title = title;
                changed = true;
            }
        }
        changed
    }

    /// Structural invariants that must hold after every operation.
    pub fn invariants_hold(&self) -> bool {
        let records_consistent = self.windows.iter().all(|(id, w)| {
            w.id == *id && (!w.is_minimized || w.is_open) && w.z_index <= self.max_z
        });
        let active_visible = self
            .active
            .map(|id| self.windows.get(&id).is_some_and(WindowRecord::is_visible))
            .unwrap_or(true);
        records_consistent && active_visible && self.max_z >= INITIAL_Z_INDEX
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn closed(id: AppId, x: i32) -> WindowRecord {
        WindowRecord::closed(id, id.as_str(), Point::new(x, 50), Size::new(700, 500))
    }

    fn store() -> WindowStore {
        WindowStore::seeded([
            closed(AppId::Terminal, 150),
            closed(AppId::Files, 120),
            closed(AppId::Calculator, 250),
        ])
    }

    fn z(store: &WindowStore, id: AppId) -> u32 {
        store.record(id).unwrap().z_index
    }

    #[test]
    fn dock_click_sequence_matches_documented_scenario() {
        let mut store = store();

        assert_eq!(store.open(AppId::Terminal), OpenOutcome::Opened);
        assert_eq!(store.active(), Some(AppId::Terminal));
        assert_eq!(z(&store, AppId::Terminal), 11);

        assert_eq!(store.open(AppId::Files), OpenOutcome::Opened);
        assert_eq!(store.active(), Some(AppId::Files));
        assert_eq!(z(&store, AppId::Files), 12);
        assert!(store.record(AppId::Terminal).unwrap().is_open);
        assert_eq!(z(&store, AppId::Terminal), 11);

        assert!(store.focus(AppId::Terminal));
        assert_eq!(store.active(), Some(AppId::Terminal));
        assert_eq!(z(&store, AppId::Terminal), 13);
        assert_eq!(z(&store, AppId::Files), 12);

        assert_eq!(store.open(AppId::Terminal), OpenOutcome::Minimized);
        assert!(store.record(AppId::Terminal).unwrap().is_minimized);
        assert_eq!(store.active(), None);

        assert_eq!(store.open(AppId::Terminal), OpenOutcome::Restored);
        let terminal = store.record(AppId::Terminal).unwrap();
        assert!(!terminal.is_minimized);
        assert_eq!(terminal.z_index, 14);
        assert_eq!(store.active(), Some(AppId::Terminal));
        assert!(store.invariants_hold());
    }

    #[test]
    fn closing_inactive_window_keeps_active_and_geometry() {
        let mut store = store();
        store.open(AppId::Files);
        assert!(store.set_position(AppId::Files, Point::new(321, 77)));
        store.open(AppId::Terminal);

        assert!(store.close(AppId::Files));
        assert!(!store.record(AppId::Files).unwrap().is_open);
        assert_eq!(store.active(), Some(AppId::Terminal));

        store.open(AppId::Files);
        assert_eq!(
            store.record(AppId::Files).unwrap().position,
            Point::new(321, 77)
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut store = store();
        store.open(AppId::Calculator);
        store.close(AppId::Calculator);
        let once = store.clone();
        assert!(!store.close(AppId::Calculator));
        assert_eq!(store, once);
    }

    #[test]
    fn minimize_twice_only_changes_state_once() {
        let mut store = store();
        store.open(AppId::Files);
        assert!(store.minimize(AppId::Files));
        assert_eq!(store.active(), None);
        let once = store.clone();
        assert!(!store.minimize(AppId::Files));
        assert_eq!(store, once);
    }

    #[test]
    fn minimize_of_closed_window_is_ignored() {
        let mut store = store();
        assert!(!store.minimize(AppId::Files));
        assert!(!store.record(AppId::Files).unwrap().is_minimized);
    }

    #[test]
    fn focus_requires_visible_window() {
        let mut store = store();
        assert!(!store.focus(AppId::Files));
        store.open(AppId::Files);
        store.minimize(AppId::Files);
        assert!(!store.focus(AppId::Files));
        assert_eq!(store.active(), None);
        assert_eq!(store.max_z(), 11);
    }

    #[test]
    fn open_of_visible_inactive_window_raises_it() {
        let mut store = store();
        store.open(AppId::Files);
        store.open(AppId::Terminal);
        assert_eq!(store.open(AppId::Files), OpenOutcome::Raised);
        assert_eq!(z(&store, AppId::Files), 13);
        assert!(store.record(AppId::Terminal).unwrap().is_visible());
    }

    #[test]
    fn unseeded_app_gets_default_record_on_open() {
        let mut store = WindowStore::default();
        assert_eq!(store.open(AppId::Chess), OpenOutcome::Opened);
        let chess = store.record(AppId::Chess).unwrap();
        assert_eq!(chess.position, FALLBACK_WINDOW_POSITION);
        assert_eq!(chess.size, Size::default());
        assert!(chess.is_open);
    }

    #[test]
    fn operations_on_missing_records_are_noops() {
        let mut store = WindowStore::default();
        let before = store.clone();
        assert!(!store.focus(AppId::Uno));
        assert!(!store.close(AppId::Uno));
        assert!(!store.minimize(AppId::Uno));
        assert!(!store.set_position(AppId::Uno, Point::new(1, 1)));
        assert!(!store.set_size(AppId::Uno, Size::new(10, 10)));
        assert!(!store.toggle_maximize(AppId::Uno));
        assert_eq!(store, before);
    }

    #[test]
    fn maximize_round_trip_preserves_geometry_and_blocks_placement() {
        let mut store = store();
        store.open(AppId::Terminal);
        let before = store.record(AppId::Terminal).cloned().unwrap();

        assert!(store.toggle_maximize(AppId::Terminal));
        assert!(!store.set_position(AppId::Terminal, Point::new(0, 0)));
        assert!(!store.set_size(AppId::Terminal, Size::new(10, 10)));
        assert!(store.toggle_maximize(AppId::Terminal));

        let after = store.record(AppId::Terminal).unwrap();
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(!after.is_maximized);
    }

    #[test]
    fn set_size_rejects_non_positive_dimensions() {
        let mut store = store();
        assert!(!store.set_size(AppId::Files, Size::new(0, 300)));
        assert!(!store.set_size(AppId::Files, Size::new(300, -1)));
        assert!(store.set_size(AppId::Files, Size::new(300, 200)));
    }

    #[test]
    fn mutating_one_record_leaves_others_untouched() {
        let mut store = store();
        store.open(AppId::Terminal);
        let files_before = store.record(AppId::Files).cloned();
        store.set_position(AppId::Terminal, Point::new(9, 9));
        store.toggle_maximize(AppId::Terminal);
        store.minimize(AppId::Terminal);
        store.close(AppId::Terminal);
        assert_eq!(store.record(AppId::Files).cloned(), files_before);
    }

    #[test]
    fn closing_minimized_window_clears_minimized_flag() {
        let mut store = store();
        store.open(AppId::Files);
        store.minimize(AppId::Files);
        store.close(AppId::Files);
        let files = store.record(AppId::Files).unwrap();
        assert!(!files.is_open);
        assert!(!files.is_minimized);
        assert!(store.invariants_hold());
    }

    #[test]
    fn stacking_order_lists_visible_windows_bottom_to_top() {
        let mut store = store();
        store.open(AppId::Terminal);
        store.open(AppId::Files);
        store.open(AppId::Calculator);
        store.focus(AppId::Terminal);
        store.minimize(AppId::Files);

        let order: Vec<_> = store.stacking_order().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![AppId::Calculator, AppId::Terminal]);
        assert_eq!(
            store.open_ids(),
            BTreeSet::from([AppId::Terminal, AppId::Files, AppId::Calculator])
        );
    }

    #[test]
    fn retitle_all_reports_changes() {
        let mut store = store();
        assert!(store.retitle_all(|id| format!("{id}!")));
        assert_eq!(store.record(AppId::Files).unwrap().title, "files!");
        assert!(!store.retitle_all(|id| format!("{id}!")));
    }

    #[test]
    fn random_operation_sequences_keep_invariants_and_raise_monotonically() {
        let ids = [
            AppId::Terminal,
            AppId::Files,
            AppId::Calculator,
            AppId::Chess,
            AppId::Editor,
        ];
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut store = store();
            for _ in 0..200 {
                let id = ids[rng.gen_range(0..ids.len())];
                let prev_max = store.max_z();
                let raised = match rng.gen_range(0..7) {
                    0 => store.open(id) != OpenOutcome::Minimized,
                    1 => store.focus(id),
                    2 => {
                        store.close(id);
                        false
                    }
                    3 => {
                        store.minimize(id);
                        false
                    }
                    4 => {
                        store.toggle_maximize(id);
                        false
                    }
                    5 => {
                        let at = Point::new(rng.gen_range(-50..1500), rng.gen_range(-50..900));
                        store.set_position(id, at);
                        false
                    }
                    _ => {
                        let size = Size::new(rng.gen_range(-10..1200), rng.gen_range(-10..900));
                        store.set_size(id, size);
                        false
                    }
                };

                assert!(store.invariants_hold(), "seed {seed}");
                assert!(store.max_z() >= prev_max, "seed {seed}");
                if raised {
                    assert!(z(&store, id) > prev_max, "seed {seed}");
                    assert_eq!(store.active(), Some(id), "seed {seed}");
                } else {
                    assert_eq!(store.max_z(), prev_max, "seed {seed}");
                }
            }
        }
    }
}

use std::cell::{Cell, RefCell};

use super::*;

/// Storage fake that keeps the record in a cell and can be told to fail.
#[derive(Debug, Default)]
struct MemoryStorage {
    value: Cell<Option<bool>>,
    fail_writes: bool,
    writes: Cell<usize>,
}

impl MemoryStorage {
    fn with_value(value: bool) -> Self {
        Self { value: Cell::new(Some(value)), ..Self::default() }
    }

    fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Option<bool> {
        self.value.get()
    }

    fn save(&self, is_dark: bool) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.value.set(Some(is_dark));
        Ok(())
    }
}

/// Surface fake that records every applied mode.
#[derive(Debug, Default)]
struct RecordingSurface {
    applied: RefCell<Vec<bool>>,
}

impl RecordingSurface {
    fn active(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }
}

impl PresentationSurface for RecordingSurface {
    fn apply_presentation_mode(&self, is_dark: bool) {
        self.applied.borrow_mut().push(is_dark);
    }
}

// =============================================================
// Fresh sessions
// =============================================================

#[test]
fn fresh_session_without_record_is_light() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::default(), RecordingSurface::default());
    store.restore_on_start();
    assert!(!store.current());
    assert_eq!(store.surface().active(), None);
}

#[test]
fn new_store_reads_nothing_before_restore() {
    let store = ThemePreferenceStore::new(MemoryStorage::with_value(true), RecordingSurface::default());
    assert!(!store.current());
    assert_eq!(store.surface().active(), None);
}

#[test]
fn restore_adopts_persisted_dark_and_marks_surface() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::with_value(true), RecordingSurface::default());
    store.restore_on_start();
    assert!(store.current());
    assert_eq!(store.surface().active(), Some(true));
}

#[test]
fn restore_adopts_persisted_light() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::with_value(false), RecordingSurface::default());
    store.restore_on_start();
    assert!(!store.current());
    assert_eq!(store.surface().active(), Some(false));
}

#[test]
fn restore_twice_is_idempotent() {
    for persisted in [None, Some(false), Some(true)] {
        let storage = MemoryStorage { value: Cell::new(persisted), ..MemoryStorage::default() };
        let mut store = ThemePreferenceStore::new(storage, RecordingSurface::default());
        store.restore_on_start();
        let first = store.current();
        store.restore_on_start();
        assert_eq!(store.current(), first);
        assert_eq!(store.surface().active(), persisted);
    }
}

#[test]
fn restore_does_not_write() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::with_value(true), RecordingSurface::default());
    store.restore_on_start();
    assert_eq!(store.storage().writes.get(), 0);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_applies_and_persists() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::default(), RecordingSurface::default());
    assert!(store.toggle());
    assert!(store.current());
    assert_eq!(store.surface().active(), Some(true));
    assert_eq!(store.storage().value.get(), Some(true));

    assert!(!store.toggle());
    assert_eq!(store.surface().active(), Some(false));
    assert_eq!(store.storage().value.get(), Some(false));
    assert_eq!(store.storage().writes.get(), 2);
}

#[test]
fn toggle_parity_matches_call_count() {
    for initial in [false, true] {
        let mut store = ThemePreferenceStore::new(MemoryStorage::with_value(initial), RecordingSurface::default());
        store.restore_on_start();
        for n in 1..=7_usize {
            let returned = store.toggle();
            let expected = initial ^ (n % 2 == 1);
            assert_eq!(returned, expected, "initial={initial} n={n}");
            assert_eq!(store.current(), expected);
        }
    }
}

#[test]
fn toggle_survives_failing_storage() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::failing(), RecordingSurface::default());
    assert!(store.toggle());
    assert!(store.current());
    assert_eq!(store.surface().active(), Some(true));
    assert_eq!(store.storage().writes.get(), 1);
    assert_eq!(store.storage().value.get(), None);

    assert!(!store.toggle());
    assert_eq!(store.surface().active(), Some(false));
}

// =============================================================
// Cross-session round trip
// =============================================================

#[test]
fn toggled_value_is_restored_by_next_session() {
    let storage = MemoryStorage::default();

    let mut first = ThemePreferenceStore::new(&storage, RecordingSurface::default());
    first.restore_on_start();
    let toggled = first.toggle();
    drop(first);

    let mut second = ThemePreferenceStore::new(&storage, RecordingSurface::default());
    second.restore_on_start();
    assert_eq!(second.current(), toggled);
    assert_eq!(second.surface().active(), Some(toggled));
}

#[test]
fn failed_write_leaves_previous_session_value() {
    let storage = MemoryStorage::failing();
    let mut first = ThemePreferenceStore::new(&storage, RecordingSurface::default());
    first.toggle();

    let mut second = ThemePreferenceStore::new(&storage, RecordingSurface::default());
    second.restore_on_start();
    assert!(!second.current());
}

// =============================================================
// StorageError
// =============================================================

#[test]
fn storage_error_messages_name_the_failure() {
    assert_eq!(StorageError::Unavailable.to_string(), "preference storage unavailable");
    assert_eq!(
        StorageError::Write("quota exceeded".into()).to_string(),
        "preference write failed: quota exceeded"
    );
}

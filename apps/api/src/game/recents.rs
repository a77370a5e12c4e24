use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use crate::roster::models::PlayerId;

/// The append-only record of which player was the daily pick on which date.
///
/// Backed by a flat JSON object mapping ISO dates to player ids. The
/// in-memory map is the source of truth between saves; callers hold the
/// state-level mutex across pick-then-save so two day-rollover requests
/// cannot both append.
#[derive(Debug)]
pub struct RecentStore {
    path: PathBuf,
    selections: BTreeMap<NaiveDate, PlayerId>,
}

impl RecentStore {
    /// Opens the store, loading any existing file. A missing or corrupt file
    /// starts an empty history rather than failing — losing the no-repeat
    /// window is recoverable, refusing to serve the game is not.
    pub fn open(path: PathBuf) -> Self {
        let selections = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Corrupt recent-selections file {}: {e}; starting empty",
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, selections }
    }

    pub fn get(&self, date: NaiveDate) -> Option<PlayerId> {
        self.selections.get(&date).copied()
    }

    /// Player ids selected on or after `cutoff`.
    pub fn used_since(&self, cutoff: NaiveDate) -> Vec<PlayerId> {
        self.selections.range(cutoff..).map(|(_, &id)| id).collect()
    }

    /// Drops entries strictly older than `cutoff`.
    pub fn prune_before(&mut self, cutoff: NaiveDate) {
        self.selections.retain(|&date, _| date >= cutoff);
    }

    pub fn insert(&mut self, date: NaiveDate, id: PlayerId) {
        self.selections.insert(date, id);
    }

    pub fn entries(&self) -> impl Iterator<Item = (NaiveDate, PlayerId)> + '_ {
        self.selections.iter().map(|(&date, &id)| (date, id))
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Clears the history and removes the backing file. Only reachable from
    /// the debug surface.
    pub fn clear(&mut self) -> Result<()> {
        self.selections.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("cannot remove {}", self.path.display())),
        }
    }

    /// Writes the full map through a temp file in the same directory and
    /// renames it into place, so a crash mid-write never leaves a partial
    /// file behind.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.selections)
            .context("cannot serialize recent selections")?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("cannot create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("cannot write recent selections")?;
        tmp.persist(&self.path)
            .with_context(|| format!("cannot replace {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecentStore::open(dir.path().join("recents.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recents.json");
        std::fs::write(&path, "not json {{{").unwrap();
        let store = RecentStore::open(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reopen_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recents.json");

        let mut store = RecentStore::open(path.clone());
        store.insert(date("2026-08-06"), 42);
        store.save().unwrap();

        let reopened = RecentStore::open(path);
        assert_eq!(reopened.get(date("2026-08-06")), Some(42));
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recents.json");

        let mut store = RecentStore::open(path.clone());
        store.insert(date("2026-08-06"), 10);
        store.save().unwrap();
        store.insert(date("2026-08-06"), 20);
        store.save().unwrap();

        let reopened = RecentStore::open(path);
        assert_eq!(reopened.get(date("2026-08-06")), Some(20));
    }

    #[test]
    fn test_prune_before_drops_only_older_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecentStore::open(dir.path().join("recents.json"));
        store.insert(date("2026-07-01"), 1);
        store.insert(date("2026-07-20"), 2);
        store.insert(date("2026-08-01"), 3);

        store.prune_before(date("2026-07-20"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(date("2026-07-01")), None);
        assert_eq!(store.get(date("2026-07-20")), Some(2));
    }

    #[test]
    fn test_used_since_respects_cutoff() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecentStore::open(dir.path().join("recents.json"));
        store.insert(date("2026-07-01"), 1);
        store.insert(date("2026-08-01"), 2);
        store.insert(date("2026-08-05"), 3);

        let used = store.used_since(date("2026-07-15"));
        assert_eq!(used, vec![2, 3]);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recents.json");

        let mut store = RecentStore::open(path.clone());
        store.insert(date("2026-08-06"), 7);
        store.save().unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
        // clearing twice is fine even with no file
        store.clear().unwrap();
    }
}

use crate::model::{Category, ProgressRecord, UserProfile};
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};
use std::collections::BTreeMap;

/// Fixed slot names in the durable key-value layer.
pub const RESULTS_KEY: &str = "quiz_results";
pub const PROFILE_KEY: &str = "user_profile";

/// Durable per-category progress, one [`ProgressRecord`] per lower-case
/// category key, serialized as one JSON string under [`RESULTS_KEY`].
///
/// Reads re-parse the backend on every call, so independently-rendered
/// views (quiz, dashboard, certificate) always agree with the last write.
/// Absent or corrupt payloads degrade to the empty mapping.
pub struct ProgressStore {
    backend: Box<dyn StorageBackend>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        ProgressStore::open(".")
    }
}

impl ProgressStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        ProgressStore { backend }
    }

    pub fn open(dir: impl Into<std::path::PathBuf>) -> Self {
        ProgressStore::new(Box::new(FileBackend::new(dir)))
    }

    pub fn in_memory() -> Self {
        ProgressStore::new(Box::new(MemoryBackend::new()))
    }

    /// The full category → record mapping.
    pub fn load(&self) -> BTreeMap<String, ProgressRecord> {
        let Some(raw) = self.backend.get(RESULTS_KEY) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("discarding unreadable progress data: {e}");
                BTreeMap::new()
            }
        }
    }

    pub fn record(&self, category: Category) -> Option<ProgressRecord> {
        self.load().get(category.key()).copied()
    }

    /// Write the finished-attempt record for a category, fully replacing any
    /// prior one. Synchronous: a `load` in the same interaction already sees
    /// the new record.
    pub fn save(&mut self, category: Category, score: u32, total: u32) {
        debug_assert!(score <= total, "score {score} exceeds total {total}");
        let mut records = self.load();
        records.insert(
            category.key().to_owned(),
            ProgressRecord {
                score,
                total,
                completed: true,
            },
        );
        match serde_json::to_string(&records) {
            Ok(raw) => self.backend.set(RESULTS_KEY, &raw),
            Err(e) => log::error!("could not encode progress records: {e}"),
        }
        log::info!("saved result for {}: {score}/{total}", category.key());
    }

    /// The stored profile, or the "Student" placeholder when absent or
    /// unreadable.
    pub fn load_profile(&self) -> UserProfile {
        self.backend
            .get(PROFILE_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    log::warn!("discarding unreadable profile: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save_profile(&mut self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(raw) => self.backend.set(PROFILE_KEY, &raw),
            Err(e) => log::error!("could not encode profile: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_the_record() {
        let mut store = ProgressStore::in_memory();
        store.save(Category::Css, 1, 2);
        let records = store.load();
        assert_eq!(
            records.get("css"),
            Some(&ProgressRecord {
                score: 1,
                total: 2,
                completed: true
            })
        );
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn saving_twice_keeps_only_the_second_record() {
        let mut store = ProgressStore::in_memory();
        store.save(Category::Html, 3, 5);
        store.save(Category::Html, 5, 5);
        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("html").unwrap().score, 5);
    }

    #[test]
    fn absent_slot_is_an_empty_mapping() {
        let store = ProgressStore::in_memory();
        assert!(store.load().is_empty());
        assert_eq!(store.record(Category::Html), None);
    }

    #[test]
    fn corrupt_payload_degrades_to_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(RESULTS_KEY, "{not json");
        let store = ProgressStore::new(Box::new(backend));
        assert!(store.load().is_empty());
    }

    #[test]
    fn records_are_keyed_independently_per_category() {
        let mut store = ProgressStore::in_memory();
        store.save(Category::Html, 2, 3);
        store.save(Category::Bootstrap, 0, 4);
        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(store.record(Category::Bootstrap).unwrap().score, 0);
        assert_eq!(store.record(Category::Css), None);
    }

    #[test]
    fn profile_defaults_to_student_placeholder() {
        let store = ProgressStore::in_memory();
        assert_eq!(store.load_profile().display_name, "Student");
    }

    #[test]
    fn profile_round_trips() {
        let mut store = ProgressStore::in_memory();
        store.save_profile(&UserProfile {
            display_name: "Ada".to_owned(),
        });
        assert_eq!(store.load_profile().display_name, "Ada");
    }

    #[test]
    fn corrupt_profile_degrades_to_default() {
        let mut backend = MemoryBackend::new();
        backend.set(PROFILE_KEY, "42");
        let store = ProgressStore::new(Box::new(backend));
        assert_eq!(store.load_profile().display_name, "Student");
    }
}

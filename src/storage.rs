use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// The two synchronous operations the durable layer offers. Backends never
/// fail observably: a read problem is reported as absent, a write problem is
/// logged and swallowed.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Stores each key as `<key>.json` under a base directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::warn!("could not create storage dir {:?}: {e}", self.dir);
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            log::warn!("could not persist {key}: {e}");
        }
    }
}

/// In-memory stand-in used by tests.
#[derive(Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips_and_overwrites() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("slot"), None);
        backend.set("slot", "one");
        assert_eq!(backend.get("slot"), Some("one".to_owned()));
        backend.set("slot", "two");
        assert_eq!(backend.get("slot"), Some("two".to_owned()));
    }

    #[test]
    fn file_backend_reports_missing_file_as_absent() {
        let backend = FileBackend::new("definitely-not-a-real-dir-7f3a");
        assert_eq!(backend.get("quiz_results"), None);
    }
}

//! File system repository

use crate::domain::entry::{sort_newest_first, JournalEntry};
use crate::domain::mood_log::{check_daily_limit, MoodLog};
use crate::domain::validation::validate_owner;
use crate::error::{Result, SolaceError};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;
use walkdir::WalkDir;

/// Name of the per-journal state directory
pub const STATE_DIR: &str = ".solace";

/// `<YYYYMMDD>T<HHMMSS>Z-<id>.toml`
fn entry_file_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{8}T\d{6}Z-[A-Za-z0-9_-]{1,64}\.toml$").unwrap())
}

fn entry_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap())
}

/// Storage for journal entries and mood check-ins, keyed by owner.
///
/// Both collections are append-only. Implementations enforce the daily
/// mood check-in limit on append.
pub trait JournalRepository {
    /// All entries of `owner`, newest first
    fn list_entries(&self, owner: &str) -> Result<Vec<JournalEntry>>;

    /// Store a new entry; fails if an entry with the same id exists
    fn append_entry(&self, owner: &str, entry: &JournalEntry) -> Result<()>;

    /// All mood logs of `owner`, oldest first
    fn list_mood_logs(&self, owner: &str) -> Result<Vec<MoodLog>>;

    /// Store a mood log unless the owner already has the daily limit
    fn append_mood_log(&self, owner: &str, log: &MoodLog) -> Result<()>;
}

/// Attempts to take a mood day lock before giving up
const LOCK_ATTEMPTS: u32 = 200;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Exclusive lock on one mood day file, held while it is read and rewritten.
///
/// The lock is a sibling file created with `create_new`, so it also excludes
/// other solace processes. Dropping the guard removes the file.
#[derive(Debug)]
struct DayLock {
    path: PathBuf,
}

impl DayLock {
    fn acquire(day_path: &Path) -> Result<Self> {
        let name = day_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("day");
        let path = day_path.with_file_name(format!(".{}.lock", name));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        for _ in 0..LOCK_ATTEMPTS {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(DayLock { path }),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    thread::sleep(LOCK_RETRY_DELAY)
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::warn!(lock = %path.display(), "gave up waiting for mood log lock");
        Err(SolaceError::Storage(format!(
            "Mood log is locked by another solace process: {}\n\
            If no other solace command is running, delete this file.",
            path.display()
        )))
    }
}

impl Drop for DayLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// On-disk shape of one day of mood logs
#[derive(Debug, Default, Serialize, Deserialize)]
struct MoodDayFile {
    #[serde(rename = "log", default)]
    logs: Vec<MoodLog>,
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks SOLACE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SOLACE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SolaceError::Config(format!(
                    "SOLACE_ROOT is set to '{}' but no .solace directory found. \
                    Run 'solace init' in that directory or unset SOLACE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SolaceError::NotSolaceDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    /// Create the .solace directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(SolaceError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn entries_dir(&self, owner: &str) -> Result<PathBuf> {
        validate_owner(owner)?;
        Ok(self.root.join(STATE_DIR).join("entries").join(owner))
    }

    fn moods_dir(&self, owner: &str) -> Result<PathBuf> {
        validate_owner(owner)?;
        Ok(self.root.join(STATE_DIR).join("moods").join(owner))
    }

    fn entry_path(&self, owner: &str, entry: &JournalEntry) -> Result<PathBuf> {
        if !entry_id_regex().is_match(&entry.id) {
            return Err(SolaceError::Storage(format!(
                "Entry id '{}' cannot be stored as a file name",
                entry.id
            )));
        }

        let month = entry.timestamp.format("%Y-%m").to_string();
        let filename = format!("{}-{}.toml", entry.timestamp.format("%Y%m%dT%H%M%SZ"), entry.id);
        Ok(self.entries_dir(owner)?.join(month).join(filename))
    }

    fn mood_day_path(&self, owner: &str, day: NaiveDate) -> Result<PathBuf> {
        Ok(self
            .moods_dir(owner)?
            .join(format!("{}.toml", day.format("%Y-%m-%d"))))
    }

    fn read_mood_day(path: &Path) -> Result<MoodDayFile> {
        if !path.exists() {
            return Ok(MoodDayFile::default());
        }
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            SolaceError::Storage(format!("Corrupt mood log {}: {}", path.display(), e))
        })
    }

    /// Write via a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            ".{}.solace-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("record.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn list_entries(&self, owner: &str) -> Result<Vec<JournalEntry>> {
        let dir = self.entries_dir(owner)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(&dir) {
            let Ok(item) = item else {
                continue;
            };
            if !item.file_type().is_file() {
                continue;
            }
            let Some(name) = item.file_name().to_str() else {
                continue;
            };
            if !entry_file_regex().is_match(name) {
                continue;
            }

            let contents = fs::read_to_string(item.path())?;
            let entry: JournalEntry = toml::from_str(&contents).map_err(|e| {
                SolaceError::Storage(format!(
                    "Corrupt journal entry {}: {}",
                    item.path().display(),
                    e
                ))
            })?;
            entries.push(entry);
        }

        sort_newest_first(&mut entries);
        tracing::debug!(owner, count = entries.len(), "loaded journal entries");
        Ok(entries)
    }

    fn append_entry(&self, owner: &str, entry: &JournalEntry) -> Result<()> {
        let path = self.entry_path(owner, entry)?;

        if path.exists() {
            return Err(SolaceError::Storage(format!(
                "Entry {} already exists",
                entry.id
            )));
        }

        let contents = toml::to_string_pretty(entry)?;
        Self::write_atomic(&path, &contents)?;

        tracing::debug!(owner, id = %entry.id, path = %path.display(), "stored journal entry");
        Ok(())
    }

    fn list_mood_logs(&self, owner: &str) -> Result<Vec<MoodLog>> {
        let dir = self.moods_dir(owner)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut logs = Vec::new();
        for item in fs::read_dir(&dir)? {
            let Ok(item) = item else {
                continue;
            };
            let path = item.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let is_day_file = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| NaiveDate::parse_from_str(stem, "%Y-%m-%d").is_ok());
            if !is_day_file {
                continue;
            }
            logs.extend(Self::read_mood_day(&path)?.logs);
        }

        logs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(logs)
    }

    fn append_mood_log(&self, owner: &str, log: &MoodLog) -> Result<()> {
        let path = self.mood_day_path(owner, log.day())?;
        let _lock = DayLock::acquire(&path)?;
        let mut day = Self::read_mood_day(&path)?;

        check_daily_limit(&day.logs, log)?;
        day.logs.push(log.clone());

        let contents = toml::to_string_pretty(&day)?;
        Self::write_atomic(&path, &contents)?;

        tracing::debug!(owner, id = %log.id, day = %log.day(), "stored mood log");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryDraft;
    use crate::domain::mood::MoodLevel;
    use chrono::{DateTime, TimeZone, Utc};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
    }

    fn entry(day: u32, mood: MoodLevel, text: &str) -> JournalEntry {
        JournalEntry::new(EntryDraft::new(text, mood), at(day, 9)).unwrap()
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_initialize_creates_state_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".solace").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _repo) = initialized_repo();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_state_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            SolaceError::NotSolaceDirectory(_) => {}
            other => panic!("Expected NotSolaceDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_entries_empty() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.list_entries("alex").unwrap().is_empty());
    }

    #[test]
    fn test_append_and_list_entries() {
        let (temp, repo) = initialized_repo();

        let older = entry(3, MoodLevel::Down, "grey day");
        let newer = entry(17, MoodLevel::Good, "sunny walk");
        repo.append_entry("alex", &older).unwrap();
        repo.append_entry("alex", &newer).unwrap();

        let listed = repo.list_entries("alex").unwrap();
        assert_eq!(listed, vec![newer.clone(), older]);

        let expected = temp
            .path()
            .join(".solace/entries/alex/2025-01")
            .join(format!("20250117T090000Z-{}.toml", newer.id));
        assert!(expected.is_file());
    }

    #[test]
    fn test_entries_are_per_owner() {
        let (_temp, repo) = initialized_repo();
        repo.append_entry("alex", &entry(3, MoodLevel::Okay, "mine"))
            .unwrap();

        assert_eq!(repo.list_entries("alex").unwrap().len(), 1);
        assert!(repo.list_entries("sam").unwrap().is_empty());
    }

    #[test]
    fn test_append_entry_never_overwrites() {
        let (_temp, repo) = initialized_repo();
        let first = entry(3, MoodLevel::Okay, "original");
        repo.append_entry("alex", &first).unwrap();

        let mut clash = first.clone();
        clash.content = "replacement".to_string();
        assert!(matches!(
            repo.append_entry("alex", &clash),
            Err(SolaceError::Storage(_))
        ));
        assert_eq!(repo.list_entries("alex").unwrap()[0].content, "original");
    }

    #[test]
    fn test_unsafe_ids_and_owners_rejected() {
        let (_temp, repo) = initialized_repo();

        let bad_id = JournalEntry::from_parts("../x", at(3, 9), MoodLevel::Okay, "text");
        assert!(matches!(
            repo.append_entry("alex", &bad_id),
            Err(SolaceError::Storage(_))
        ));

        let good = entry(3, MoodLevel::Okay, "text");
        assert!(matches!(
            repo.append_entry("../alex", &good),
            Err(SolaceError::Validation(_))
        ));
    }

    #[test]
    fn test_list_entries_ignores_foreign_files() {
        let (temp, repo) = initialized_repo();
        repo.append_entry("alex", &entry(3, MoodLevel::Okay, "kept"))
            .unwrap();

        let month_dir = temp.path().join(".solace/entries/alex/2025-01");
        fs::write(month_dir.join("notes.txt"), "hello").unwrap();
        fs::write(month_dir.join(".scratch.toml"), "garbage").unwrap();

        assert_eq!(repo.list_entries("alex").unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_entry_reported() {
        let (temp, repo) = initialized_repo();
        let month_dir = temp.path().join(".solace/entries/alex/2025-01");
        fs::create_dir_all(&month_dir).unwrap();
        fs::write(month_dir.join("20250103T090000Z-abc.toml"), "mood = 12").unwrap();

        assert!(matches!(
            repo.list_entries("alex"),
            Err(SolaceError::Storage(msg)) if msg.contains("Corrupt journal entry")
        ));
    }

    #[test]
    fn test_mood_logs_capped_per_day() {
        let (temp, repo) = initialized_repo();

        for hour in [7, 12, 19] {
            let log = MoodLog::new(MoodLevel::Good, None, at(5, hour)).unwrap();
            repo.append_mood_log("alex", &log).unwrap();
        }

        let fourth = MoodLog::new(MoodLevel::Tough, Some("late"), at(5, 23)).unwrap();
        assert!(matches!(
            repo.append_mood_log("alex", &fourth),
            Err(SolaceError::DailyMoodLimit { limit: 3, .. })
        ));

        let next_day = MoodLog::new(MoodLevel::Okay, None, at(6, 8)).unwrap();
        repo.append_mood_log("alex", &next_day).unwrap();

        let logs = repo.list_mood_logs("alex").unwrap();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs.last().unwrap().mood, MoodLevel::Okay);
        assert!(temp.path().join(".solace/moods/alex/2025-01-05.toml").is_file());
    }

    #[test]
    fn test_concurrent_mood_logs_respect_cap() {
        let (_temp, repo) = initialized_repo();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    let log = MoodLog::new(MoodLevel::Good, None, at(5, 8 + i)).unwrap();
                    repo.append_mood_log("alex", &log).is_ok()
                })
            })
            .collect();

        let stored = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(stored, 3);
        assert_eq!(repo.list_mood_logs("alex").unwrap().len(), 3);
    }

    #[test]
    fn test_held_day_lock_blocks_append() {
        let (temp, repo) = initialized_repo();
        let moods_dir = temp.path().join(".solace/moods/alex");
        fs::create_dir_all(&moods_dir).unwrap();
        fs::write(moods_dir.join(".2025-01-05.lock"), "").unwrap();

        let log = MoodLog::new(MoodLevel::Okay, None, at(5, 9)).unwrap();
        assert!(matches!(
            repo.append_mood_log("alex", &log),
            Err(SolaceError::Storage(msg)) if msg.contains("locked")
        ));

        // Other days are unaffected, and the lock is released afterwards
        let other = MoodLog::new(MoodLevel::Okay, None, at(6, 9)).unwrap();
        repo.append_mood_log("alex", &other).unwrap();
        assert!(!moods_dir.join(".2025-01-06.lock").exists());
        assert_eq!(repo.list_mood_logs("alex").unwrap().len(), 1);
    }

    #[test]
    fn test_mood_logs_are_per_owner() {
        let (_temp, repo) = initialized_repo();
        for hour in [7, 12, 19] {
            let log = MoodLog::new(MoodLevel::Good, None, at(5, hour)).unwrap();
            repo.append_mood_log("alex", &log).unwrap();
        }

        let other = MoodLog::new(MoodLevel::Down, None, at(5, 20)).unwrap();
        repo.append_mood_log("sam", &other).unwrap();
        assert_eq!(repo.list_mood_logs("sam").unwrap().len(), 1);
    }

    #[test]
    fn test_discover_with_solace_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SOLACE_ROOT");

        let (temp, _repo) = initialized_repo();
        std::env::set_var("SOLACE_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_solace_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SOLACE_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("SOLACE_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            SolaceError::Config(msg) => assert!(msg.contains("no .solace directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}

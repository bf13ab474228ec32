use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

use logai::preferences::{FileStorage, MemoryStorage, PreferenceStore, STORAGE_KEY};
use logai::{
    write_snapshot, DemoFeed, DemoFeedConfig, FeedSource, SnapshotReader, ThemePreference,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("logai-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn prefers_dark() -> bool {
    true
}

fn prefers_light() -> bool {
    false
}

#[test]
fn test_snapshot_write_and_read_round_trip() -> Result<()> {
    let dir = scratch_dir("snapshot-plain");
    let path = dir.join("snapshot.json");
    let path = path.to_str().unwrap();

    let snapshot = DemoFeed::seeded(42).fetch()?;
    write_snapshot(path, &snapshot)?;

    let loaded = SnapshotReader::new(path).fetch()?;
    assert_eq!(loaded, snapshot);

    let _ = fs::remove_dir_all(dir);
    Ok(())
}

#[test]
fn test_compressed_snapshot_round_trip() -> Result<()> {
    let dir = scratch_dir("snapshot-br");
    let plain_path = dir.join("snapshot.json");
    let br_path = dir.join("snapshot.json.br");

    let snapshot = DemoFeed::with_config(DemoFeedConfig {
        log_count: 500,
        trend_hours: 24,
        anomaly_count: 10,
        seed: Some(7),
    })
    .fetch()?;

    write_snapshot(plain_path.to_str().unwrap(), &snapshot)?;
    write_snapshot(br_path.to_str().unwrap(), &snapshot)?;

    let loaded = SnapshotReader::new(br_path.to_str().unwrap()).fetch()?;
    assert_eq!(loaded, snapshot);

    // Compression should pay for itself on a log-heavy snapshot
    let plain_size = fs::metadata(&plain_path)?.len();
    let br_size = fs::metadata(&br_path)?.len();
    assert!(
        br_size < plain_size,
        "expected {} < {}",
        br_size,
        plain_size
    );

    let _ = fs::remove_dir_all(dir);
    Ok(())
}

#[test]
fn test_snapshot_reader_reports_missing_file() {
    let result = SnapshotReader::new("/nonexistent/snapshot.json").fetch();
    assert!(result.is_err());
}

#[test]
fn test_preference_survives_restart_on_disk() {
    let dir = scratch_dir("prefs-restart");

    // First session: no stored key, dark environment, user switches to light
    {
        let storage = FileStorage::with_dir(dir.clone());
        let mut store = PreferenceStore::new(Box::new(storage), prefers_dark);
        store.hydrate();
        assert_eq!(store.value(), ThemePreference::Dark);

        store.set_preference(ThemePreference::Light);
    }

    // The durable entry is the literal wire string under the fixed key
    let raw = fs::read_to_string(dir.join(STORAGE_KEY)).unwrap();
    assert_eq!(raw, "light");

    // Second session: persisted choice wins over the environment signal
    {
        let storage = FileStorage::with_dir(dir.clone());
        let mut store = PreferenceStore::new(Box::new(storage), prefers_dark);
        store.hydrate();
        let pref = store.preference();
        assert_eq!(pref.value, ThemePreference::Light);
        assert!(pref.is_hydrated);
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_corrupt_preference_file_falls_back_to_environment() {
    let dir = scratch_dir("prefs-corrupt");
    fs::write(dir.join(STORAGE_KEY), "blue").unwrap();

    let storage = FileStorage::with_dir(dir.clone());
    let mut store = PreferenceStore::new(Box::new(storage), prefers_light);
    store.hydrate();
    assert_eq!(store.value(), ThemePreference::Light);

    // The next explicit choice repairs the stored value
    store.set_preference(ThemePreference::Dark);
    let raw = fs::read_to_string(dir.join(STORAGE_KEY)).unwrap();
    assert_eq!(raw, "dark");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_full_session_toggle_persists_each_change() {
    let dir = scratch_dir("prefs-toggle");

    let storage = FileStorage::with_dir(dir.clone());
    let mut store = PreferenceStore::new(Box::new(storage), prefers_dark);
    store.hydrate();

    store.toggle_preference();
    assert_eq!(
        fs::read_to_string(dir.join(STORAGE_KEY)).unwrap(),
        "light"
    );

    store.toggle_preference();
    assert_eq!(fs::read_to_string(dir.join(STORAGE_KEY)).unwrap(), "dark");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_memory_storage_session_is_self_contained() {
    // A session without disk access still honors the full contract,
    // it just cannot outlive the process.
    let mut store = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_light);
    store.hydrate();
    assert_eq!(store.value(), ThemePreference::Light);

    store.set_preference(ThemePreference::Dark);
    assert_eq!(store.value(), ThemePreference::Dark);
    assert!(store.is_hydrated());
}

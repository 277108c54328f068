#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use knitcount::store::{KeyValueStore, SqliteStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Home directory used by every spawned binary, so no real config is read.
pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("knitcount_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn kc() -> Command {
    let mut cmd = cargo_bin_cmd!("knitcount");
    cmd.env("HOME", test_home());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_knitcount.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_knitcount_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `knitcount --db <db> <args...>` and require success.
pub fn run_ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    kc().args(&full).assert().success();
}

/// Value stored under `key`, read through the library store.
pub fn stored(db_path: &str, key: &str) -> Option<String> {
    let store = SqliteStore::open(db_path).expect("open db");
    store.get(key).expect("read key")
}

/// Seed raw values before the binary ever touches the database.
pub fn seed(db_path: &str, pairs: &[(&str, &str)]) {
    let mut store = SqliteStore::open(db_path).expect("open db");
    for (k, v) in pairs {
        store.set(k, v).expect("seed key");
    }
}

/// `(name, count)` pairs of the stored rows.
pub fn stored_rows(db_path: &str) -> Vec<(String, u64)> {
    let raw = stored(db_path, "rows").expect("rows stored");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("rows json");
    value
        .as_array()
        .expect("rows array")
        .iter()
        .map(|r| {
            (
                r["name"].as_str().expect("name").to_string(),
                r["count"].as_u64().expect("count"),
            )
        })
        .collect()
}

pub fn rows(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
    pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
}

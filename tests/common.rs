#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn done() -> Command {
    cargo_bin_cmd!("done")
}

/// Create a unique test store directory inside the system temp dir and
/// remove any leftovers from a previous run.
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_done_store", name));
    let store_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&store_dir).ok();
    store_dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store_dir: &str) {
    done()
        .args(["--store", store_dir, "--test", "init"])
        .assert()
        .success();

    done()
        .args(["--store", store_dir, "add", "buy oat milk"])
        .assert()
        .success();

    done()
        .args([
            "--store",
            store_dir,
            "add",
            "file tax return",
            "--priority",
            "h",
            "--label",
            "w",
        ])
        .assert()
        .success();

    done()
        .args([
            "--store",
            store_dir,
            "add",
            "evening run",
            "--label",
            "h",
            "--mood",
            "energized",
        ])
        .assert()
        .success();
}

/// Read the stored task array directly via the library API.
pub fn stored_tasks(store_dir: &str) -> Vec<done::models::task::Task> {
    done::store::Store::new(store_dir)
        .load_tasks()
        .expect("load tasks")
}

/// Write a task array directly via the library API, bypassing the CLI.
/// Useful to pin ids and completion timestamps.
pub fn write_tasks(store_dir: &str, tasks: &[done::models::task::Task]) {
    done::store::Store::new(store_dir)
        .save_tasks(tasks)
        .expect("save tasks");
}

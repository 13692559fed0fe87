mod common;
use common::{done, init_store_with_data, setup_test_store, temp_out};
use std::fs;

#[test]
fn test_backup_writes_archive_json() {
    let store_dir = setup_test_store("backup_plain");
    init_store_with_data(&store_dir);

    let out = temp_out("backup_plain", "json");

    done()
        .args(["--store", &store_dir, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicates::str::contains("Backup created"));

    let archive: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(archive["tasks"].as_array().unwrap().len(), 3);
    assert!(archive["settings"].is_object());
}

#[test]
fn test_backup_compress_produces_zip() {
    let store_dir = setup_test_store("backup_zip");
    init_store_with_data(&store_dir);

    let out = temp_out("backup_zip", "json");
    let zip_path = std::path::Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    done()
        .args(["--store", &store_dir, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(zip_path.exists());
    // the uncompressed copy is removed after zipping
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_roundtrips_through_import() {
    let store_dir = setup_test_store("backup_roundtrip");
    init_store_with_data(&store_dir);

    let out = temp_out("backup_roundtrip", "json");
    done()
        .args(["--store", &store_dir, "backup", "--file", &out])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "wipe", "--yes"])
        .assert()
        .success();
    assert!(common::stored_tasks(&store_dir).is_empty());

    done()
        .args(["--store", &store_dir, "import", "--file", &out])
        .assert()
        .success();

    assert_eq!(common::stored_tasks(&store_dir).len(), 3);
}

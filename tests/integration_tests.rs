use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{done, init_store_with_data, setup_test_store, stored_tasks};

#[test]
fn test_init_creates_both_records() {
    let store_dir = setup_test_store("init_records");

    done()
        .args(["--store", &store_dir, "--test", "init"])
        .assert()
        .success();

    let dir = std::path::Path::new(&store_dir);
    assert!(dir.join("done_tasks.json").exists());
    assert!(dir.join("done_settings.json").exists());
}

#[test]
fn test_add_and_list() {
    let store_dir = setup_test_store("add_and_list");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "list"])
        .assert()
        .success()
        .stdout(contains("buy oat milk"))
        .stdout(contains("file tax return"))
        .stdout(contains("evening run"));
}

#[test]
fn test_add_empty_text_is_silently_ignored() {
    let store_dir = setup_test_store("add_empty");

    done()
        .args(["--store", &store_dir, "--test", "init"])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "add", "   "])
        .assert()
        .success();

    assert!(stored_tasks(&store_dir).is_empty());
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let store_dir = setup_test_store("monotonic_ids");
    init_store_with_data(&store_dir);

    let tasks = stored_tasks(&store_dir);
    assert_eq!(tasks.len(), 3);

    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    let unique: std::collections::HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 3);

    // stored order is newest-first
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[test]
fn test_toggle_sets_and_clears_completion() {
    let store_dir = setup_test_store("toggle");
    init_store_with_data(&store_dir);

    let id = stored_tasks(&store_dir)[0].id;

    done()
        .args(["--store", &store_dir, "done", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Task completed"));

    let task = stored_tasks(&store_dir)
        .into_iter()
        .find(|t| t.id == id)
        .unwrap();
    assert!(task.completed);
    assert!(task.completed_at.is_some());

    done()
        .args(["--store", &store_dir, "done", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Task reopened"));

    let task = stored_tasks(&store_dir)
        .into_iter()
        .find(|t| t.id == id)
        .unwrap();
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
}

#[test]
fn test_priority_cycles_back_to_normal_after_three_steps() {
    let store_dir = setup_test_store("priority_cycle");
    init_store_with_data(&store_dir);

    let id = stored_tasks(&store_dir)[0].id;
    let original = stored_tasks(&store_dir)[0].priority;

    for _ in 0..3 {
        done()
            .args(["--store", &store_dir, "priority", &id.to_string()])
            .assert()
            .success();
    }

    let task = stored_tasks(&store_dir)
        .into_iter()
        .find(|t| t.id == id)
        .unwrap();
    assert_eq!(task.priority, original);
}

#[test]
fn test_del_removes_exactly_one_task() {
    let store_dir = setup_test_store("del_exact");
    init_store_with_data(&store_dir);

    let before = stored_tasks(&store_dir);
    let victim = before[1].clone();

    done()
        .args(["--store", &store_dir, "del", &victim.id.to_string()])
        .assert()
        .success()
        .stdout(contains("Task removed"));

    let after = stored_tasks(&store_dir);
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|t| t.id != victim.id));

    // survivors keep all field values
    for t in &after {
        let original = before.iter().find(|b| b.id == t.id).unwrap();
        assert_eq!(t.text, original.text);
        assert_eq!(t.priority, original.priority);
        assert_eq!(t.label, original.label);
        assert_eq!(t.mood, original.mood);
    }
}

#[test]
fn test_unknown_id_fails() {
    let store_dir = setup_test_store("unknown_id");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "done", "12345"])
        .assert()
        .failure()
        .stderr(contains("No task found with id 12345"));

    done()
        .args(["--store", &store_dir, "del", "12345"])
        .assert()
        .failure()
        .stderr(contains("No task found with id 12345"));
}

#[test]
fn test_edit_updates_fields() {
    let store_dir = setup_test_store("edit_fields");
    init_store_with_data(&store_dir);

    let id = stored_tasks(&store_dir)[0].id;

    done()
        .args([
            "--store",
            &store_dir,
            "edit",
            &id.to_string(),
            "--text",
            "buy soy milk",
            "--label",
            "p",
        ])
        .assert()
        .success();

    let task = stored_tasks(&store_dir)
        .into_iter()
        .find(|t| t.id == id)
        .unwrap();
    assert_eq!(task.text, "buy soy milk");
    assert_eq!(task.label, Some(done::models::label::Label::Personal));

    done()
        .args(["--store", &store_dir, "edit", &id.to_string(), "--no-label"])
        .assert()
        .success();

    let task = stored_tasks(&store_dir)
        .into_iter()
        .find(|t| t.id == id)
        .unwrap();
    assert_eq!(task.label, None);

    // empty replacement text is rejected, unlike add
    done()
        .args(["--store", &store_dir, "edit", &id.to_string(), "--text", "  "])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));
}

#[test]
fn test_config_set_and_print() {
    let store_dir = setup_test_store("config_set");

    done()
        .args(["--store", &store_dir, "--test", "init"])
        .assert()
        .success();

    done()
        .args([
            "--store",
            &store_dir,
            "config",
            "--set",
            "theme=light",
            "--set",
            "haptics=off",
        ])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("theme: light"))
        .stdout(contains("haptics: false"));

    done()
        .args(["--store", &store_dir, "config", "--set", "nope=1"])
        .assert()
        .failure()
        .stderr(contains("Unknown settings key"));
}

#[test]
fn test_wipe_resets_store() {
    let store_dir = setup_test_store("wipe_reset");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "config", "--set", "theme=light"])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "wipe", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data wiped"));

    assert!(stored_tasks(&store_dir).is_empty());

    done()
        .args(["--store", &store_dir, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("theme: dark"));
}

#[test]
fn test_malformed_tasks_record_is_reported_not_clobbered() {
    let store_dir = setup_test_store("malformed_record");
    init_store_with_data(&store_dir);

    let tasks_file = std::path::Path::new(&store_dir).join("done_tasks.json");
    std::fs::write(&tasks_file, "{not json").unwrap();

    done()
        .args(["--store", &store_dir, "list"])
        .assert()
        .failure()
        .stderr(contains("Malformed record"));

    // the broken file is untouched
    assert_eq!(std::fs::read_to_string(&tasks_file).unwrap(), "{not json");

    done()
        .args(["--store", &store_dir, "store", "--check"])
        .assert()
        .failure();
}

#[test]
fn test_store_info_reports_counts() {
    let store_dir = setup_test_store("store_info");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "store", "--info"])
        .assert()
        .success()
        .stdout(contains("Total tasks"))
        .stdout(contains("3"));
}

#[test]
fn test_activity_log_records_operations() {
    let store_dir = setup_test_store("activity_log");
    init_store_with_data(&store_dir);

    let id = stored_tasks(&store_dir)[0].id;
    done()
        .args(["--store", &store_dir, "done", &id.to_string()])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add").and(contains("toggle")));
}

#[test]
fn test_list_filters() {
    let store_dir = setup_test_store("list_filters");
    init_store_with_data(&store_dir);

    let id = stored_tasks(&store_dir)[0].id;
    done()
        .args(["--store", &store_dir, "done", &id.to_string()])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "list", "--completed"])
        .assert()
        .success()
        .stdout(contains("evening run"))
        .stdout(contains("buy oat milk").not());

    done()
        .args(["--store", &store_dir, "list", "--pending"])
        .assert()
        .success()
        .stdout(contains("buy oat milk"))
        .stdout(contains("evening run").not());
}

#[test]
fn test_empty_list_shows_all_clear() {
    let store_dir = setup_test_store("empty_list");

    done()
        .args(["--store", &store_dir, "--test", "init"])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "list"])
        .assert()
        .success()
        .stdout(contains("All Clear"));
}

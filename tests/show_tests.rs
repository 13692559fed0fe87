mod common;
use common::{done, init_store_with_data, setup_test_store, stored_tasks};
use predicates::str::contains;

#[test]
fn test_show_defaults_to_task_panel() {
    let store_dir = setup_test_store("show_default");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "show"])
        .assert()
        .success()
        .stdout(contains("buy oat milk"));
}

#[test]
fn test_show_insights_prints_stat_grid() {
    let store_dir = setup_test_store("show_insights");
    init_store_with_data(&store_dir);

    // one of three completed → 33%
    let id = stored_tasks(&store_dir)[0].id;
    done()
        .args(["--store", &store_dir, "done", &id.to_string()])
        .assert()
        .success();

    done()
        .args(["--store", &store_dir, "show", "insights"])
        .assert()
        .success()
        .stdout(contains("Efficiency"))
        .stdout(contains("33%"))
        .stdout(contains("Streak"))
        .stdout(contains("1 days"))
        .stdout(contains("Priority Hits"))
        .stdout(contains("← today"));
}

#[test]
fn test_show_settings_prints_record() {
    let store_dir = setup_test_store("show_settings");
    init_store_with_data(&store_dir);

    done()
        .args(["--store", &store_dir, "show", "settings"])
        .assert()
        .success()
        .stdout(contains("theme: dark"))
        .stdout(contains("autoSort: true"));
}

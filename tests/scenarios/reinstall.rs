//! Scenario: running the installer again on an installed project.

use crate::common::*;

#[test]
fn scenario_reinstall_with_prefix_is_stable() {
    let project = TestProject::builder().with_seeders_layout().build();

    // Step 1: first install
    let first = project.run(&["--with-prefix=voy_", "--with-dummy"]);
    assert!(first.success, "{}", first.combined_output());
    let config = project.read("config/voyager.php");
    let seeder = project.read("database/seeders/DataTypesTableSeeder.php");
    let routes = project.read("routes/web.php");

    // Step 2: same flags again
    let second = project.run(&["--with-prefix=voy_", "--with-dummy"]);
    assert!(second.success, "{}", second.combined_output());

    // Step 3: no file drifted
    assert_eq!(project.read("config/voyager.php"), config);
    assert!(!config.contains("voy_voy_"));
    assert_eq!(
        project.read("database/seeders/DataTypesTableSeeder.php"),
        seeder
    );
    assert_eq!(seeder.matches("namespace Database\\Seeders;").count(), 1);
    assert!(project
        .read("database/seeders/PostsTableSeeder.php")
        .starts_with("<?php\n\nnamespace Database\\Seeders;\n\nuse Illuminate"));
    assert_eq!(project.read("routes/web.php"), routes);
}

#[test]
fn scenario_dry_run_after_install_shows_no_diffs() {
    let project = TestProject::builder().build();
    assert!(project.run(&[]).success);
    project.clear_tool_calls();

    let result = project.run(&["--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!result.stdout.contains("[DIFF]"));
    assert!(project.tool_calls().is_empty());
}

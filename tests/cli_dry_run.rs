//! `--dry-run` previews file edits and never runs tools or writes files.
#![cfg(unix)]

mod common;

use common::*;

#[test]
fn dry_run_changes_nothing() {
    let project = TestProject::builder().build();

    let result = project.run(&["--dry-run", "--with-prefix=voy_"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(project.tool_calls().is_empty());
    assert_eq!(project.read("app/User.php"), USER_MODEL);
    assert_eq!(project.read("routes/web.php"), ROUTES);
    assert_eq!(project.read("config/voyager.php"), PACKAGE_CONFIG);
}

#[test]
fn dry_run_prints_diffs_and_skipped_tools() {
    let project = TestProject::builder().build();

    let result = project.run(&["--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    let out = &result.stdout;
    assert!(out.starts_with("Installing Voyager into "));
    assert!(out.lines().next().unwrap().ends_with("(dry run)"));
    assert!(out.contains("[DIFF] "));
    assert!(out.contains(r"    +class User extends \TCG\Voyager\Models\User"));
    assert!(out.contains("    +Route::group(['prefix' => 'admin'], function () {"));
    assert!(out.contains("migrate: dry run: Migrating the database tables into your application"));
    assert!(out.contains("Dry run complete, nothing was changed"));
}

#[test]
fn dry_run_json_reports_previews() {
    let project = TestProject::builder().with_seeders_layout().build();

    let result = project.run(&["--dry-run", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let previews: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|event| event["event"] == "file_preview")
        .collect();

    let paths: Vec<&str> = previews
        .iter()
        .map(|p| p["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths.len(), 3, "previews: {paths:?}");
    assert!(paths[0].ends_with("app/User.php"));
    assert!(paths[1].ends_with("routes/web.php"));
    assert!(paths[2].ends_with("database/seeders/DataTypesTableSeeder.php"));
    assert!(previews[2]["diff"]
        .as_str()
        .unwrap()
        .contains("+namespace Database\\Seeders;"));
    assert_eq!(
        project.read("database/seeders/DataTypesTableSeeder.php"),
        SEEDER
    );
}

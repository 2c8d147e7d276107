//! Scenario: the routes file is missing, the user restores it and resumes.

use crate::common::*;

#[test]
fn scenario_resume_after_missing_routes() {
    let project = TestProject::builder().without_routes().build();

    // Step 1: first attempt stops at the routes step
    let first = project.run(&[]);
    assert!(!first.success);
    assert!(first.stderr.contains("--from-step register-routes"));
    assert_eq!(project.tool_calls().len(), 2);

    // Step 2: restore the file and resume where it stopped
    project.write("routes/web.php", ROUTES);
    project.clear_tool_calls();
    let second = project.run(&["--from-step", "register-routes"]);
    assert!(second.success, "{}", second.combined_output());

    // Step 3: earlier steps were not repeated
    let calls = project.tool_calls();
    assert!(!calls.iter().any(|c| c.contains("--tag=seeds")));
    assert!(!calls.iter().any(|c| c == "php artisan migrate"));
    assert_eq!(calls.len(), 5);
    assert_eq!(
        project.read("routes/web.php").matches("Voyager::routes()").count(),
        1
    );
}

#[test]
fn scenario_resume_keeps_live_prefix() {
    let project = TestProject::builder().build();

    let result = project.run(&["--with-prefix=voy_", "--from-step", "seed"]);

    assert!(result.success, "{}", result.combined_output());
    let calls = project.tool_calls();
    assert_eq!(calls.len(), 3);
    // The skipped set-live-prefix step still applies to the seeder.
    assert!(calls[0].starts_with("php -r "));
    assert!(calls[0].contains(PREFIX_OVERRIDE));
    assert!(calls[0].contains("$kernel->call('db:seed', ['--class' => 'VoyagerDatabaseSeeder'], "));
    assert_eq!(calls[1], "php artisan hook:setup");
    assert_eq!(calls[2], "php artisan storage:link");
    assert!(project
        .read("config/voyager.php")
        .contains("'table_prefix' => 'voy_',"));
}

#[test]
fn scenario_resume_from_step_not_in_plan() {
    let project = TestProject::builder().build();

    let result = project.run(&["--from-step", "seed-dummy"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unknown install step 'seed-dummy'"));
    assert!(result.stderr.contains("--list-steps"));
    assert!(project.tool_calls().is_empty());
}

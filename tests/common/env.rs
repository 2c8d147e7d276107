//! Isolated Laravel project for running the installer binary.
//!
//! `php` and `composer` are replaced by shell scripts (configured through
//! `VOYAGER_INSTALL_PHP` / `VOYAGER_INSTALL_COMPOSER`) that append one line
//! per invocation to `.tool-calls` in the project root. Kernel bootstraps
//! (`php -r <script>`) are single-line, so they log as one line too.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{DUMMY_SEEDER, PACKAGE_CONFIG, ROUTES, SEEDER, USER_MODEL};

const CALL_LOG: &str = ".tool-calls";

/// Result of running the installer
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestProject {
    pub root: TempDir,
    tools: TempDir,
    bin: PathBuf,
}

impl TestProject {
    pub fn builder() -> TestProjectBuilder {
        TestProjectBuilder::default()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write project file");
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).expect("remove project file");
    }

    /// Tool invocations so far, one line each (`php artisan migrate ...`)
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path(CALL_LOG))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn clear_tool_calls(&self) {
        let _ = std::fs::remove_file(self.path(CALL_LOG));
    }

    /// Run the installer against this project
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .args(args)
            .arg("--project")
            .arg(self.root.path())
            .env("VOYAGER_INSTALL_PHP", self.tools.path().join("php"))
            .env("VOYAGER_INSTALL_COMPOSER", self.tools.path().join("composer"))
            .env_remove("VOYAGER_INSTALL_LOG")
            .env_remove("VOYAGER_INSTALL_PACKAGE_PATH")
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("failed to execute voyager-install");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[derive(Default)]
pub struct TestProjectBuilder {
    seeders_layout: bool,
    models_dir: bool,
    without_user_model: bool,
    without_routes: bool,
    without_package_config: bool,
    failing_command: Option<String>,
}

impl TestProjectBuilder {
    /// Use `database/seeders` instead of the legacy `database/seeds`
    pub fn with_seeders_layout(mut self) -> Self {
        self.seeders_layout = true;
        self
    }

    /// Put the user model at `app/Models/User.php`
    pub fn with_models_dir(mut self) -> Self {
        self.models_dir = true;
        self
    }

    pub fn without_user_model(mut self) -> Self {
        self.without_user_model = true;
        self
    }

    pub fn without_routes(mut self) -> Self {
        self.without_routes = true;
        self
    }

    pub fn without_package_config(mut self) -> Self {
        self.without_package_config = true;
        self
    }

    /// Make the stub `php` exit non-zero when its arguments contain `needle`
    pub fn failing_on(mut self, needle: &str) -> Self {
        self.failing_command = Some(needle.to_string());
        self
    }

    pub fn build(self) -> TestProject {
        let root = TempDir::new().expect("create project dir");
        let tools = TempDir::new().expect("create tools dir");
        let project = TestProject {
            root,
            tools,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_voyager-install")),
        };

        if !self.without_user_model {
            let model = if self.models_dir {
                "app/Models/User.php"
            } else {
                "app/User.php"
            };
            project.write(model, USER_MODEL);
        }
        if !self.without_routes {
            project.write("routes/web.php", ROUTES);
        }
        if !self.without_package_config {
            project.write("config/voyager.php", PACKAGE_CONFIG);
        }

        let seed_dir = if self.seeders_layout {
            "database/seeders"
        } else {
            "database/seeds"
        };
        std::fs::create_dir_all(project.path(seed_dir)).expect("create seed dir");
        // Package templates, plus the copy `vendor:publish` would have made.
        project.write(
            "vendor/tcg/voyager/publishable/database/seeds/DataTypesTableSeeder.php",
            SEEDER,
        );
        project.write(&format!("{seed_dir}/DataTypesTableSeeder.php"), SEEDER);
        project.write(
            "vendor/tcg/voyager/publishable/database/dummy_seeds/PostsTableSeeder.php",
            DUMMY_SEEDER,
        );
        project.write(&format!("{seed_dir}/PostsTableSeeder.php"), DUMMY_SEEDER);

        let log = project.path(CALL_LOG);
        write_stub(
            &project.tools.path().join("php"),
            "php",
            &log,
            self.failing_command.as_deref(),
        );
        write_stub(&project.tools.path().join("composer"), "composer", &log, None);
        project
    }
}

fn write_stub(path: &Path, name: &str, log: &Path, fail_on: Option<&str>) {
    let mut script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"{name} $*\" >> '{}'\n",
        log.display()
    );
    if let Some(needle) = fail_on {
        script.push_str(&format!(
            "case \"$*\" in\n  *{needle}*) echo 'SQLSTATE[HY000] connection refused' >&2; exit 1 ;;\nesac\n"
        ));
    }
    script.push_str("exit 0\n");

    std::fs::write(path, script).expect("write tool stub");
    let mut perms = std::fs::metadata(path).expect("stat tool stub").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod tool stub");
}

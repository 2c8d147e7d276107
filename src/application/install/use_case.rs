//! Install Use Case
//!
//! Runs the install plan step by step:
//! 1. Publish seeds, set the live prefix, migrate
//! 2. Patch the user model and routes file
//! 3. Publish resources and namespace the published seeders
//! 4. Reload the autoloader, then seed (and the dummy pass)
//! 5. Persist the prefix, set up hooks, link storage
//!
//! A failing step stops the run. Nothing is rolled back; re-running is the
//! recovery path, and every file edit is a no-op when already applied.

use std::path::{Path, PathBuf};

use similar::TextDiff;
use tracing::{debug, error, info, warn};

use crate::config::InstallerConfig;
use crate::domain::entities::{InstallStep, PatchTarget};
use crate::domain::ports::{
    DependencyReloader, FileSystem, InstallEvent, InstallEventSink, NoopEventSink, ProjectHooks,
    ResourcePublisher, SchemaMigrator, SeedRunner,
};
use crate::domain::services::{apply_prefix, FilePatcher, PatchOutcome, SeedNamespacer};
use crate::domain::value_objects::{LiveConfig, SeedFolder, TablePrefix, TABLE_PREFIX_KEY};
use crate::error::{InstallError, InstallResult};

use super::options::InstallOptions;
use super::plan::InstallPlan;
use super::result::{FilePreview, InstallReport};
use super::targets::{
    find_user_model, routes_target, user_model_target, PACKAGE_CONFIG_FILE,
    USER_MODEL_MISSING_WARNINGS,
};

const SEED_TAGS: [&str; 1] = ["seeds"];
const RESOURCE_TAGS: [&str; 2] = ["config", "voyager_avatar"];
const DUMMY_TAGS: [&str; 4] = [
    "dummy_seeds",
    "dummy_content",
    "dummy_config",
    "dummy_migrations",
];

/// The external tools the installer drives
pub struct InstallTooling {
    pub publisher: Box<dyn ResourcePublisher>,
    pub migrator: Box<dyn SchemaMigrator>,
    pub seeder: Box<dyn SeedRunner>,
    pub reloader: Box<dyn DependencyReloader>,
    pub hooks: Box<dyn ProjectHooks>,
}

/// State carried from step to step within one run
struct RunContext<'a> {
    options: &'a InstallOptions,
    live: LiveConfig,
    seed_folder: SeedFolder,
    report: InstallReport,
    events: &'a dyn InstallEventSink,
}

impl RunContext<'_> {
    fn warn(&mut self, message: &str) {
        warn!("{message}");
        self.report.warnings.push(message.to_string());
        self.events.on_event(InstallEvent::Warning {
            message: message.to_string(),
        });
    }

    fn preview(&mut self, path: &Path, before: &str, after: &str) {
        let diff = unified_diff(path, before, after);
        self.events.on_event(InstallEvent::FilePreview {
            path: path.to_path_buf(),
            diff: diff.clone(),
        });
        self.report.previews.push(FilePreview {
            path: path.to_path_buf(),
            diff,
        });
    }
}

/// Install use case - orchestrates the install flow
///
/// Generic over the file system so tests can run it against `MemoryFs`.
pub struct InstallUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    tooling: InstallTooling,
    config: InstallerConfig,
}

impl<FS> InstallUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, tooling: InstallTooling, config: InstallerConfig) -> Self {
        Self {
            file_system,
            tooling,
            config,
        }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Execute the install
    pub fn execute(&self, options: &InstallOptions) -> InstallResult<InstallReport> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the install with event reporting
    pub fn execute_with_events(
        &self,
        options: &InstallOptions,
        events: &dyn InstallEventSink,
    ) -> InstallResult<InstallReport> {
        let plan = InstallPlan::for_options(options);
        let start = plan.start_index(options.resume_from)?;

        let mut ctx = RunContext {
            options,
            live: LiveConfig::new(),
            seed_folder: SeedFolder::detect(&self.file_system, &options.project_root),
            report: InstallReport::new(options.dry_run),
            events,
        };

        info!(
            project = %options.project_root.display(),
            steps = plan.len(),
            dry_run = options.dry_run,
            seed_folder = %ctx.seed_folder,
            "starting install"
        );
        events.on_event(InstallEvent::Started {
            project_root: options.project_root.clone(),
            step_count: plan.len(),
            dry_run: options.dry_run,
        });

        for (position, step) in plan.steps().iter().enumerate() {
            let index = position + 1;
            let name = step.name();

            if position < start {
                // The live config must still be in place for later steps.
                if step.is_context_only() {
                    self.apply_context(step, &mut ctx);
                }
                let reason = match options.resume_from {
                    Some(resume) => format!("resuming from {resume}"),
                    None => "before resume point".to_string(),
                };
                debug!(step = %name, %reason, "step skipped");
                ctx.report.skipped.push(name);
                events.on_event(InstallEvent::StepSkipped {
                    index,
                    step: name,
                    reason,
                });
                continue;
            }

            if options.dry_run && self.uses_tooling(step) {
                ctx.report.skipped.push(name);
                events.on_event(InstallEvent::StepSkipped {
                    index,
                    step: name,
                    reason: format!("dry run: {}", step.description()),
                });
                continue;
            }

            info!(index, step = %name, "{}", step.description());
            events.on_event(InstallEvent::StepStarted {
                index,
                step: name,
                description: step.description(),
            });

            if let Err(err) = self.run_step(step, &mut ctx) {
                error!(index, step = %name, error = %err, "install step failed");
                events.on_event(InstallEvent::Failed {
                    index,
                    step: name,
                    error: err.to_string(),
                });
                return Err(InstallError::StepFailed {
                    index,
                    step: name,
                    source: Box::new(err),
                });
            }

            ctx.report.executed.push(name);
            events.on_event(InstallEvent::StepCompleted { index, step: name });
        }

        let report = ctx.report;
        info!(
            executed = report.executed.len(),
            skipped = report.skipped.len(),
            warnings = report.warnings.len(),
            "install finished"
        );
        events.on_event(InstallEvent::Completed {
            executed_count: report.executed.len(),
            skipped_count: report.skipped.len(),
            warning_count: report.warnings.len(),
        });
        Ok(report)
    }

    /// Steps that call an external tool; a dry run skips them
    fn uses_tooling(&self, step: &InstallStep) -> bool {
        !matches!(
            step,
            InstallStep::SetLivePrefix(_)
                | InstallStep::PatchUserModel
                | InstallStep::RegisterRoutes
                | InstallStep::NamespaceSeeds { .. }
                | InstallStep::PersistPrefix(_)
        )
    }

    fn apply_context(&self, step: &InstallStep, ctx: &mut RunContext<'_>) {
        if let InstallStep::SetLivePrefix(prefix) = step {
            ctx.live.set(TABLE_PREFIX_KEY, prefix.as_str());
        }
    }

    fn run_step(&self, step: &InstallStep, ctx: &mut RunContext<'_>) -> InstallResult<()> {
        let package = &self.config.package;
        match step {
            InstallStep::PublishSeeds => self.publish(&package.provider, &SEED_TAGS),
            InstallStep::SetLivePrefix(_) => {
                self.apply_context(step, ctx);
                Ok(())
            }
            InstallStep::Migrate { force } => self
                .tooling
                .migrator
                .migrate(&ctx.live, *force)
                .map_err(|e| InstallError::Migration(format!("{e:#}"))),
            InstallStep::PatchUserModel => self.patch_user_model(ctx),
            InstallStep::RegisterRoutes => self.register_routes(ctx),
            InstallStep::PublishResources { dummy: true } => {
                self.publish(&package.dummy_provider, &DUMMY_TAGS)
            }
            InstallStep::PublishResources { dummy: false } => {
                self.publish(&package.provider, &RESOURCE_TAGS)
            }
            InstallStep::NamespaceSeeds { dummy } => self.namespace_seeds(*dummy, ctx),
            InstallStep::ReloadDependencies => self
                .tooling
                .reloader
                .reload()
                .map_err(|e| InstallError::Reload(format!("{e:#}"))),
            InstallStep::Seed => self.seed(&package.seeder, ctx),
            InstallStep::MigrateDummy => self
                .tooling
                .migrator
                .migrate(&ctx.live, false)
                .map_err(|e| InstallError::Migration(format!("{e:#}"))),
            InstallStep::SeedDummy => self.seed(&package.dummy_seeder, ctx),
            InstallStep::PersistPrefix(prefix) => self.persist_prefix(prefix, ctx),
            InstallStep::SetupHooks => self
                .tooling
                .hooks
                .setup_hooks()
                .map_err(|e| InstallError::Hooks(format!("{e:#}"))),
            InstallStep::LinkStorage => self
                .tooling
                .hooks
                .link_public_storage()
                .map_err(|e| InstallError::StorageLink(format!("{e:#}"))),
        }
    }

    fn publish(&self, provider: &str, tags: &[&str]) -> InstallResult<()> {
        self.tooling
            .publisher
            .publish(provider, tags)
            .map_err(|e| InstallError::Publish(format!("{provider}: {e:#}")))
    }

    fn seed(&self, class: &str, ctx: &RunContext<'_>) -> InstallResult<()> {
        self.tooling
            .seeder
            .seed(&ctx.live, class)
            .map_err(|e| InstallError::Seed {
                class: class.to_string(),
                message: format!("{e:#}"),
            })
    }

    fn patch_user_model(&self, ctx: &mut RunContext<'_>) -> InstallResult<()> {
        let root = &ctx.options.project_root;
        let Some(path) = find_user_model(root, |p| self.file_system.exists(p)) else {
            for message in USER_MODEL_MISSING_WARNINGS {
                ctx.warn(message);
            }
            return Ok(());
        };
        self.apply_patch(&user_model_target(path), ctx)
    }

    fn register_routes(&self, ctx: &mut RunContext<'_>) -> InstallResult<()> {
        let target = routes_target(&ctx.options.project_root, &self.config.routes.prefix);
        self.apply_patch(&target, ctx)
    }

    fn apply_patch(
        &self,
        target: &PatchTarget,
        ctx: &mut RunContext<'_>,
    ) -> InstallResult<()> {
        let patcher = FilePatcher::new(&self.file_system);
        if ctx.options.dry_run {
            if let Some(after) = patcher.preview(target)? {
                let before = self.file_system.read(target.path())?;
                ctx.preview(target.path(), &before, &after);
            }
            return Ok(());
        }
        if patcher.patch(target)? == PatchOutcome::AlreadyApplied {
            info!(path = %target.path().display(), "already up to date");
        }
        Ok(())
    }

    fn namespace_seeds(&self, dummy: bool, ctx: &mut RunContext<'_>) -> InstallResult<()> {
        if !ctx.seed_folder.requires_namespace() {
            debug!(folder = %ctx.seed_folder, "legacy seed folder, no namespaces needed");
            return Ok(());
        }

        let mut batches = Vec::with_capacity(2);
        if dummy {
            batches.push(self.seed_templates(&ctx.options.project_root, true)?);
        }
        batches.push(self.seed_templates(&ctx.options.project_root, false)?);

        let namespacer =
            SeedNamespacer::new(&self.file_system, ctx.seed_folder, &ctx.options.project_root);
        for published in batches {
            if ctx.options.dry_run {
                for pending in namespacer.preview(&published)? {
                    ctx.preview(&pending.path, &pending.before, &pending.after);
                }
            } else {
                let rewritten = namespacer.namespace_if_needed(&published)?;
                debug!(rewritten, total = published.len(), "seeders namespaced");
            }
        }
        Ok(())
    }

    fn seed_templates(&self, project_root: &Path, dummy: bool) -> InstallResult<Vec<PathBuf>> {
        let dir = self.config.package.seed_templates_dir(project_root, dummy);
        Ok(self.file_system.list_files(&dir)?)
    }

    fn persist_prefix(&self, prefix: &TablePrefix, ctx: &mut RunContext<'_>) -> InstallResult<()> {
        let path = ctx.options.project_root.join(PACKAGE_CONFIG_FILE);
        if !self.file_system.exists(&path) {
            debug!(path = %path.display(), "package config not published, prefix not persisted");
            return Ok(());
        }

        let before = self.file_system.read(&path)?;
        let after = apply_prefix(&before, prefix);
        if after == before {
            info!(path = %path.display(), %prefix, "table prefix already set");
            return Ok(());
        }
        if ctx.options.dry_run {
            ctx.preview(&path, &before, &after);
        } else {
            self.file_system.write(&path, &after)?;
        }
        Ok(())
    }
}

fn unified_diff(path: &Path, before: &str, after: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string()
}

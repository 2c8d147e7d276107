//! Install Plan
//!
//! The ordered step list for a set of options. Prefix steps only appear
//! with a prefix, dummy steps only in dummy mode.

use crate::domain::entities::{InstallStep, StepName};
use crate::error::{InstallError, InstallResult};

use super::options::InstallOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    steps: Vec<InstallStep>,
}

impl InstallPlan {
    pub fn for_options(options: &InstallOptions) -> Self {
        let dummy = options.with_dummy;
        let mut steps = vec![InstallStep::PublishSeeds];

        if let Some(prefix) = &options.with_prefix {
            steps.push(InstallStep::SetLivePrefix(prefix.clone()));
        }

        steps.extend([
            InstallStep::Migrate {
                force: options.force,
            },
            InstallStep::PatchUserModel,
            InstallStep::RegisterRoutes,
            InstallStep::PublishResources { dummy },
            InstallStep::NamespaceSeeds { dummy },
            InstallStep::ReloadDependencies,
            InstallStep::Seed,
        ]);

        if dummy {
            steps.extend([InstallStep::MigrateDummy, InstallStep::SeedDummy]);
        }

        if let Some(prefix) = &options.with_prefix {
            steps.push(InstallStep::PersistPrefix(prefix.clone()));
        }

        steps.extend([InstallStep::SetupHooks, InstallStep::LinkStorage]);

        Self { steps }
    }

    pub fn steps(&self) -> &[InstallStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Zero-based position of the first step to run.
    ///
    /// Naming a step that exists but is not part of this plan (e.g.
    /// `seed-dummy` without dummy mode) is an error.
    pub fn start_index(&self, resume_from: Option<StepName>) -> InstallResult<usize> {
        let Some(name) = resume_from else {
            return Ok(0);
        };
        self.steps
            .iter()
            .position(|step| step.name() == name)
            .ok_or_else(|| InstallError::UnknownStep {
                name: name.to_string(),
                expected: self
                    .steps
                    .iter()
                    .map(|step| step.name().as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InstallError, InstallResult};

use super::types::InstallerConfig;

/// File looked up in the project root when `--config` is not given
pub const PROJECT_CONFIG_FILE: &str = "voyager-install.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InstallResult<(InstallerConfig, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path).map_err(|e| InstallError::Config {
        file: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: InstallerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallError::Config {
        file: path.display().to_string(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Otherwise `<project>/voyager-install.toml`
/// is used when present, else defaults. Environment overrides apply last.
pub fn load_for_project(
    explicit: Option<&Path>,
    project_root: &Path,
) -> InstallResult<(InstallerConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else {
                debug!(path = %project_config.display(), "no installer config, using defaults");
                (InstallerConfig::default(), Vec::new())
            }
        }
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (VOYAGER_INSTALL_* prefix)
pub fn with_env_overrides(config: InstallerConfig) -> InstallerConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut config: InstallerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> InstallerConfig {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(php) = non_empty("VOYAGER_INSTALL_PHP") {
        config.tools.php = php;
    }

    if let Some(composer) = non_empty("VOYAGER_INSTALL_COMPOSER") {
        config.tools.composer = composer;
    }

    if let Some(path) = non_empty("VOYAGER_INSTALL_PACKAGE_PATH") {
        config.package.path = PathBuf::from(path);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tools",
        "php",
        "composer",
        "package",
        "path",
        "provider",
        "dummy_provider",
        "seeder",
        "dummy_seeder",
        "routes",
        "prefix",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

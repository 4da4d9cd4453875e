//! The manifest patch operation.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use fmtwire_manifest::{MANIFEST_FILE, PackageManifest};

use crate::SetupError;
use crate::runner::CommandRunner;
use crate::support::{self, CONFIG_FILE, FALLBACK_CONFIG_PACKAGE, IGNORE_FILE};

/// Script entry that checks formatting.
pub const CHECK_SCRIPT: &str = "prettier:check";

/// Script entry that rewrites files in place.
pub const WRITE_SCRIPT: &str = "prettier:write";

/// Command installed under [`CHECK_SCRIPT`].
pub const CHECK_COMMAND: &str = r#"prettier --check "**/*.{ts,tsx,js,jsx}" "**/*.json" "**/*.md""#;

/// Command installed under [`WRITE_SCRIPT`].
pub const WRITE_COMMAND: &str = r#"prettier --write "**/*.{ts,tsx,js,jsx}" "**/*.json" "**/*.md""#;

/// Dependency the optional install step checks for.
pub const FORMATTER_PACKAGE: &str = "prettier";

const INSTALL_PROGRAM: &str = "npm";
const INSTALL_ARGS: &[&str] = &["install", "--save-dev", FORMATTER_PACKAGE];

/// Options for [`patch`].
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Install the formatter when it is declared in neither dependency map.
    pub install: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self { install: true }
    }
}

/// Disposition of the dependency-install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The formatter was already declared; nothing to do.
    AlreadyDeclared,
    /// The install command exited successfully.
    Installed,
    /// The install command failed to spawn or exited non-zero.
    Failed,
    /// Installation was disabled by options.
    Skipped,
}

/// What [`patch`] did.
#[derive(Debug)]
pub struct PatchOutcome {
    /// Path of the rewritten manifest.
    pub manifest_path: PathBuf,
    /// Whether the config support file was created on this run.
    pub wrote_config: bool,
    /// Whether the ignore support file was created on this run.
    pub wrote_ignore: bool,
    /// Install step disposition.
    pub install: InstallOutcome,
}

/// Wires the formatter into the project at `dir`.
///
/// Reads `dir/package.json`, merges the two formatter script entries, writes
/// the manifest back, optionally installs the formatter through `runner`,
/// and creates the two support files when absent. The sequence is strictly
/// linear and every step is idempotent, so re-running reproduces the end
/// state of the first run.
///
/// Errors in any step abort the sequence, except the install step, whose
/// failure is logged and skipped over.
pub fn patch(
    dir: &Path,
    options: &PatchOptions,
    runner: &mut dyn CommandRunner,
) -> Result<PatchOutcome, SetupError> {
    let manifest_path = dir.join(MANIFEST_FILE);

    // Nothing is written until the manifest has loaded and parsed.
    let mut manifest = PackageManifest::load(&manifest_path)?;

    manifest.set_script(CHECK_SCRIPT, CHECK_COMMAND);
    manifest.set_script(WRITE_SCRIPT, WRITE_COMMAND);
    manifest.save(&manifest_path)?;
    info!("Updated {}", manifest_path.display());

    let install = run_install(&manifest, options, dir, runner);

    let package = manifest.name().unwrap_or(FALLBACK_CONFIG_PACKAGE);

    let config_path = dir.join(CONFIG_FILE);
    let wrote_config = support::create_if_absent(&config_path, &support::config_module(package))
        .map_err(|e| SetupError::support(&config_path, e))?;
    if wrote_config {
        info!("Created {}", config_path.display());
    }

    let ignore_path = dir.join(IGNORE_FILE);
    let wrote_ignore = support::create_if_absent(&ignore_path, &support::ignore_contents())
        .map_err(|e| SetupError::support(&ignore_path, e))?;
    if wrote_ignore {
        info!("Created {}", ignore_path.display());
    }

    Ok(PatchOutcome {
        manifest_path,
        wrote_config,
        wrote_ignore,
        install,
    })
}

fn run_install(
    manifest: &PackageManifest,
    options: &PatchOptions,
    dir: &Path,
    runner: &mut dyn CommandRunner,
) -> InstallOutcome {
    if !options.install {
        return InstallOutcome::Skipped;
    }

    if manifest.has_dependency(FORMATTER_PACKAGE) {
        return InstallOutcome::AlreadyDeclared;
    }

    info!("Installing {}...", FORMATTER_PACKAGE);
    match runner.run(INSTALL_PROGRAM, INSTALL_ARGS, dir) {
        Ok(true) => InstallOutcome::Installed,
        Ok(false) => {
            warn!(
                "{} install exited with an error. Continuing...",
                FORMATTER_PACKAGE
            );
            InstallOutcome::Failed
        }
        Err(e) => {
            warn!("Failed to run {}: {}. Continuing...", INSTALL_PROGRAM, e);
            InstallOutcome::Failed
        }
    }
}

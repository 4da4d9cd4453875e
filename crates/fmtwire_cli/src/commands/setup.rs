//! Setup command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use fmtwire_core::{
    CHECK_SCRIPT, PatchOptions, ProcessRunner, WRITE_SCRIPT, patch,
};

pub fn run_setup(dir: Option<PathBuf>, no_install: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let options = PatchOptions {
        install: !no_install,
    };
    let mut runner = ProcessRunner;

    info!("Adding formatter scripts to package.json...");
    patch(&dir, &options, &mut runner).into_diagnostic()?;

    println!("Successfully added formatter scripts to package.json");
    println!("You can now run:");
    println!("  npm run {CHECK_SCRIPT} - to check files for formatting issues");
    println!("  npm run {WRITE_SCRIPT} - to automatically fix formatting issues");

    Ok(())
}

//! Support files materialized next to the manifest.
//!
//! Both files are create-once: existing content is never overwritten, no
//! matter how it got there.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Formatter configuration file created in the project root.
pub const CONFIG_FILE: &str = ".prettierrc.js";

/// Formatter ignore file created in the project root.
pub const IGNORE_FILE: &str = ".prettierignore";

/// Package whose shared configuration the generated module re-exports when
/// the consuming manifest has no usable `name`.
pub const FALLBACK_CONFIG_PACKAGE: &str = "@fmtwire/config";

const IGNORE_PATTERNS: &[&str] = &[
    "node_modules",
    "coverage",
    "lib",
    "tsdocs",
    "npm-shrinkwrap.json",
    "package-lock.json",
    ".eslintrc",
    "*.yml",
    "*.yaml",
    "*.md",
    "*.html",
];

/// Renders the configuration module that re-exports the shared Prettier
/// configuration shipped by `package`.
pub fn config_module(package: &str) -> String {
    format!(
        "const sharedConfig = require('{package}/.prettierrc.json');\n\nmodule.exports = sharedConfig;\n"
    )
}

/// Renders the ignore file contents.
pub fn ignore_contents() -> String {
    let mut contents = IGNORE_PATTERNS.join("\n");
    contents.push('\n');
    contents
}

/// Creates `path` with `contents` unless it already exists.
///
/// Returns whether the file was written. Create-new semantics: an existing
/// file, or a symlink pointing at one, is left untouched.
pub fn create_if_absent(path: &Path, contents: &str) -> io::Result<bool> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    match options.open(path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

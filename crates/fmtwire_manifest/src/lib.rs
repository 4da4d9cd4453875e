//! # fmtwire_manifest
//!
//! Ordered document model for a project's `package.json`.
//!
//! The manifest is held as a JSON object whose key order survives a
//! load/save round trip, so a rewrite only ever changes the fields the
//! caller touched (plus indentation and the trailing newline).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// File name of the manifest inside a project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Error type for manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest file at the expected path.
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the manifest failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid JSON.
    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The manifest parsed, but its root is not an object.
    #[error("Invalid manifest: root must be an object")]
    NotAnObject,
}

/// A `package.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Loads the manifest from `path`.
    ///
    /// The file must already exist; a missing manifest is an error rather
    /// than an empty document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    /// Serializes the manifest as indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut text = serde_json::to_string_pretty(&self.fields)?;
        text.push('\n');
        Ok(text)
    }

    /// Writes the manifest back to `path`, replacing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let text = self.to_json()?;
        fs::write(path, text)?;
        Ok(())
    }

    /// The package name, if `name` is present and a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name")?.as_str()
    }

    /// A top-level field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A `scripts` entry by name, if present and a string.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.fields.get("scripts")?.get(name)?.as_str()
    }

    /// Sets a `scripts` entry, creating the `scripts` object if needed.
    ///
    /// An existing entry of the same name is replaced; every other entry is
    /// left untouched. A non-object `scripts` field is replaced wholesale.
    pub fn set_script(&mut self, name: &str, command: &str) {
        if !matches!(self.fields.get("scripts"), Some(Value::Object(_))) {
            self.fields
                .insert("scripts".to_string(), Value::Object(Map::new()));
        }

        if let Some(Value::Object(scripts)) = self.fields.get_mut("scripts") {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    /// Whether `package` is declared in `dependencies` or `devDependencies`.
    ///
    /// Inspect-only; neither dependency map is ever mutated.
    pub fn has_dependency(&self, package: &str) -> bool {
        ["dependencies", "devDependencies"].iter().any(|section| {
            self.fields
                .get(*section)
                .and_then(Value::as_object)
                .is_some_and(|deps| deps.contains_key(package))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_and_reads_fields() {
        let manifest =
            PackageManifest::from_json(r#"{"name":"pkg","scripts":{"test":"jest"}}"#).unwrap();

        assert_eq!(manifest.name(), Some("pkg"));
        assert_eq!(manifest.script("test"), Some("jest"));
        assert_eq!(manifest.script("missing"), None);
    }

    #[test]
    fn rejects_non_object_root() {
        let err = PackageManifest::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PackageManifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn round_trip_preserves_key_order() {
        let input = r#"{
  "name": "pkg",
  "version": "1.0.0",
  "description": "a package",
  "scripts": {
    "test": "jest"
  },
  "dependencies": {
    "react": "^18.0.0"
  }
}
"#;
        let manifest = PackageManifest::from_json(input).unwrap();
        assert_eq!(manifest.to_json().unwrap(), input);
    }

    #[test]
    fn serializes_with_trailing_newline() {
        let manifest = PackageManifest::from_json("{}").unwrap();
        assert_eq!(manifest.to_json().unwrap(), "{}\n");
    }

    #[test]
    fn set_script_preserves_other_entries() {
        let mut manifest =
            PackageManifest::from_json(r#"{"scripts":{"test":"jest","build":"tsc"}}"#).unwrap();

        manifest.set_script("fmt", "prettier --write .");

        assert_eq!(manifest.script("test"), Some("jest"));
        assert_eq!(manifest.script("build"), Some("tsc"));
        assert_eq!(manifest.script("fmt"), Some("prettier --write ."));
    }

    #[test]
    fn set_script_replaces_existing_entry() {
        let mut manifest = PackageManifest::from_json(r#"{"scripts":{"fmt":"old"}}"#).unwrap();

        manifest.set_script("fmt", "new");

        assert_eq!(manifest.script("fmt"), Some("new"));
    }

    #[test]
    fn set_script_creates_scripts_object() {
        let mut manifest = PackageManifest::from_json(r#"{"name":"pkg"}"#).unwrap();

        manifest.set_script("fmt", "prettier --write .");

        assert_eq!(manifest.script("fmt"), Some("prettier --write ."));
        // The new object lands after existing keys.
        assert_eq!(
            manifest.to_json().unwrap(),
            "{\n  \"name\": \"pkg\",\n  \"scripts\": {\n    \"fmt\": \"prettier --write .\"\n  }\n}\n"
        );
    }

    #[test]
    fn set_script_replaces_non_object_scripts() {
        let mut manifest = PackageManifest::from_json(r#"{"scripts":"bogus"}"#).unwrap();

        manifest.set_script("fmt", "prettier --write .");

        assert_eq!(manifest.script("fmt"), Some("prettier --write ."));
    }

    #[test]
    fn has_dependency_checks_both_sections() {
        let manifest = PackageManifest::from_json(
            r#"{"dependencies":{"react":"^18.0.0"},"devDependencies":{"jest":"^29.0.0"}}"#,
        )
        .unwrap();

        assert!(manifest.has_dependency("react"));
        assert!(manifest.has_dependency("jest"));
        assert!(!manifest.has_dependency("prettier"));
    }

    #[test]
    fn has_dependency_tolerates_missing_sections() {
        let manifest = PackageManifest::from_json(r#"{"name":"pkg"}"#).unwrap();
        assert!(!manifest.has_dependency("prettier"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageManifest::load(dir.path().join(MANIFEST_FILE)).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound(_)));
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        fs::write(&path, r#"{"name":"pkg","version":"0.1.0"}"#).unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        manifest.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"pkg\",\n  \"version\": \"0.1.0\"\n}\n"
        );
    }
}

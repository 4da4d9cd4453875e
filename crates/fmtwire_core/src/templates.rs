//! Shared configuration templates distributed with the tool.
//!
//! The templates are opaque data consumed verbatim by downstream tooling;
//! nothing here parses or validates their contents.

/// Shared Prettier configuration document.
pub const PRETTIER_CONFIG: &str = include_str!("../../../templates/prettierrc.json");

/// Node-target ESLint flat config.
pub const ESLINT_NODE: &str = include_str!("../../../templates/eslint.node.js");

/// Browser/React-target ESLint flat config.
pub const ESLINT_BROWSER: &str = include_str!("../../../templates/eslint.browser.js");

/// A distributable configuration template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTarget {
    Prettier,
    EslintNode,
    EslintBrowser,
}

impl ConfigTarget {
    /// Every known template.
    pub const ALL: &'static [ConfigTarget] =
        &[Self::Prettier, Self::EslintNode, Self::EslintBrowser];

    /// CLI-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Prettier => "prettier",
            Self::EslintNode => "eslint-node",
            Self::EslintBrowser => "eslint-browser",
        }
    }

    /// Looks a template up by its CLI-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// The embedded template text, verbatim.
    pub fn source(self) -> &'static str {
        match self {
            Self::Prettier => PRETTIER_CONFIG,
            Self::EslintNode => ESLINT_NODE,
            Self::EslintBrowser => ESLINT_BROWSER,
        }
    }
}

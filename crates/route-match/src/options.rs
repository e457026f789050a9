// Matching options and their TOML configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How captured parameter values are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    /// Reverse `%XX` escapes only; a raw `+` stays a `+`
    #[default]
    Percent,
    /// Query-string decoding: a raw `+` also becomes a space
    Form,
}

/// How a `prefix*` template token without `:` treats its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardPrefix {
    /// Any `prefix*` captures the rest, whatever the prefix is
    #[default]
    Lenient,
    /// Only a bare `*` captures; `prefix*` must equal the path segment
    Strict,
}

/// Options applied by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchOptions {
    #[serde(default)]
    pub decoding: Decoding,

    #[serde(default)]
    pub wildcard_prefix: WildcardPrefix,
}

/// File layout: options live under a `[matching]` table
#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    matching: MatchOptions,
}

impl MatchOptions {
    /// Sets the decoding variant
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Sets the wildcard prefix handling
    pub fn with_wildcard_prefix(mut self, wildcard_prefix: WildcardPrefix) -> Self {
        self.wildcard_prefix = wildcard_prefix;
        self
    }

    /// Parse options from TOML text containing an optional `[matching]` table
    ///
    /// ```
    /// use route_match::{Decoding, MatchOptions, WildcardPrefix};
    ///
    /// let options = MatchOptions::from_toml_str(r#"
    ///     [matching]
    ///     decoding = "form"
    /// "#).unwrap();
    /// assert_eq!(options.decoding, Decoding::Form);
    /// assert_eq!(options.wildcard_prefix, WildcardPrefix::Lenient);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: OptionsFile =
            toml::from_str(content).context("Failed to parse matching options")?;

        Ok(file.matching)
    }

    /// Load options from a TOML file
    ///
    /// A missing or empty file yields the default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = ?path, "options file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse options file: {:?}", path))
    }
}

//! Language descriptor and the builder used to derive new ones.

use crate::Result;
use regex::Regex;
use std::path::Path;

/// Pattern for a line made only of whitespace.
const BLANK_PATTERN: &str = r"^\s*$";

/// How to classify and transform single lines of one language.
///
/// Descriptors are immutable once built. Deriving copies every field of the
/// parent into a [`LanguageBuilder`], so a built descriptor never looks
/// anything up in its base at call time.
#[derive(Debug, Clone)]
pub struct Language {
    /// Registry key, what `--language` accepts; defaults to `name`
    key: String,
    /// Short identifier, used as the fence-info string of code blocks
    name: String,
    /// Human-readable name for listings
    friendly_name: String,
    /// Matched against a file path to pick this language
    extension: Regex,
    /// Matches blank lines
    blank: Regex,
    /// Matches the comment marker; `None` treats every line as prose
    comment: Option<Regex>,
}

impl Language {
    /// The plain-text base descriptor every other language derives from.
    pub fn text() -> Result<Self> {
        Ok(Self {
            key: "text".to_string(),
            name: "text".to_string(),
            friendly_name: "Plain text".to_string(),
            extension: Regex::new(r"\.txt$")?,
            blank: Regex::new(BLANK_PATTERN)?,
            comment: None,
        })
    }

    /// Start a new descriptor that inherits every field from this one.
    pub fn derive(&self) -> LanguageBuilder {
        LanguageBuilder {
            inner: self.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    /// Source of the extension pattern, for listings
    pub fn extension_pattern(&self) -> &str {
        self.extension.as_str()
    }

    /// Whether this language claims the file at `path`
    pub fn matches_file(&self, path: &Path) -> bool {
        self.extension.is_match(&path.to_string_lossy())
    }

    /// Whether `line` holds nothing but whitespace
    pub fn is_empty(&self, line: &str) -> bool {
        self.blank.is_match(line)
    }

    /// Whether `line` is a documentation comment
    pub fn is_comment(&self, line: &str) -> bool {
        match &self.comment {
            Some(marker) => marker.is_match(line),
            None => true,
        }
    }

    /// Strip the comment marker (and at most one space after it) from `line`.
    pub fn parse_comment(&self, line: &str) -> String {
        match &self.comment {
            Some(marker) => marker.replace(line, "").into_owned(),
            None => line.to_string(),
        }
    }
}

/// Builder returned by [`Language::derive`].
///
/// Each setter overrides one inherited field.
#[derive(Debug, Clone)]
pub struct LanguageBuilder {
    inner: Language,
}

impl LanguageBuilder {
    /// Set the fence name, and the registry key along with it
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self.inner.key = self.inner.name.clone();
        self
    }

    /// Register under a key other than the fence name, e.g. `livescript` for `ls`
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.inner.key = key.into();
        self
    }

    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.inner.friendly_name = friendly_name.into();
        self
    }

    /// Set the file path pattern, e.g. `\.js$`
    pub fn extension(mut self, pattern: &str) -> Result<Self> {
        self.inner.extension = Regex::new(pattern)?;
        Ok(self)
    }

    /// Set the blank-line pattern
    pub fn blank(mut self, pattern: &str) -> Result<Self> {
        self.inner.blank = Regex::new(pattern)?;
        Ok(self)
    }

    /// Set the comment marker pattern.
    ///
    /// The pattern is used both to detect a comment and to strip it, so it
    /// should be anchored and include any whitespace to drop after the marker,
    /// e.g. `^\s*//\s?`.
    pub fn comment(mut self, pattern: &str) -> Result<Self> {
        self.inner.comment = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn build(self) -> Language {
        self.inner
    }
}

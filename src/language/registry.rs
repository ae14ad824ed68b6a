//! Registry of built-in language descriptors

use super::descriptor::Language;
use crate::{ConversionError, Result};
use std::path::Path;
use std::sync::OnceLock;

static LANGUAGES: OnceLock<LanguageRegistry> = OnceLock::new();

/// Ordered table of language descriptors.
///
/// Registration order doubles as the priority for filename matching: the
/// first descriptor whose extension pattern matches wins.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. A later descriptor with the same key shadows
    /// the earlier one for lookups.
    pub fn register(&mut self, language: Language) {
        self.languages.push(language);
    }

    /// Look a descriptor up by registry key, falling back to its fence name
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages
            .iter()
            .rev()
            .find(|l| l.key() == name)
            .or_else(|| self.languages.iter().rev().find(|l| l.name() == name))
    }

    /// Look a descriptor up by name, failing with `UnsupportedLanguage`.
    pub fn resolve(&self, name: &str) -> std::result::Result<&Language, ConversionError> {
        self.get(name)
            .ok_or_else(|| ConversionError::UnsupportedLanguage(name.to_string()))
    }

    /// Find the descriptor for a file by its extension pattern
    pub fn for_file(&self, path: &Path) -> Option<&Language> {
        self.languages.iter().find(|l| l.matches_file(path))
    }

    /// Get all registered descriptors, in registration order
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
}

/// Build the registry of built-in languages.
///
/// `text` is the base. `c` and `bash` derive from it with their own comment
/// markers, and every other language only renames one of those two.
pub fn default_registry() -> Result<LanguageRegistry> {
    let text = Language::text()?;

    let c = text
        .derive()
        .name("c")
        .friendly_name("C")
        .extension(r"\.c$")?
        .comment(r"^\s*//\s?")?
        .build();

    let js = c
        .derive()
        .name("js")
        .friendly_name("JavaScript")
        .extension(r"\.js$")?
        .build();

    let java = c
        .derive()
        .name("java")
        .friendly_name("Java")
        .extension(r"\.java$")?
        .build();

    let bash = text
        .derive()
        .name("bash")
        .friendly_name("Bash")
        .extension(r"\.sh$")?
        .comment(r"^\s*#\s?")?
        .build();

    let ruby = bash
        .derive()
        .name("ruby")
        .friendly_name("Ruby")
        .extension(r"\.rb$")?
        .build();

    let python = bash
        .derive()
        .name("python")
        .friendly_name("Python")
        .extension(r"\.py$")?
        .build();

    let coffee = bash
        .derive()
        .name("coffee")
        .friendly_name("CoffeeScript")
        .extension(r"\.coffee$")?
        .build();

    let livescript = bash
        .derive()
        .name("ls")
        .key("livescript")
        .friendly_name("LiveScript")
        .extension(r"\.ls$")?
        .build();

    let mut registry = LanguageRegistry::new();
    for language in [text, c, js, java, bash, ruby, python, coffee, livescript] {
        registry.register(language);
    }
    Ok(registry)
}

/// Process-wide registry of built-in languages, built on first use.
pub fn languages() -> &'static LanguageRegistry {
    LANGUAGES.get_or_init(|| {
        default_registry().expect("built-in language patterns are valid regexes")
    })
}

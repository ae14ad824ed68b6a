//! File conversion
//!
//! Glue between the filesystem and the parse/render core: pick a language for
//! a file, turn it into Markdown, and run a batch of files where a file that
//! cannot be converted is reported without stopping the rest.

use crate::config::{SugConfig, ensure_output_dir};
use crate::language::{Language, LanguageRegistry};
use crate::parse::parse;
use crate::render::{RenderOptions, render_with};
use crate::{ConversionError, Error, Result};
use std::path::{Path, PathBuf};

/// Settings for a batch conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory the `.md` files are written to
    pub output_dir: PathBuf,
    /// Language forced for every input, by name
    pub language: Option<String>,
    /// Rendering settings
    pub render: RenderOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            language: None,
            render: RenderOptions::default(),
        }
    }
}

impl ConvertOptions {
    /// Merge `sug.toml` defaults with command-line flags; flags win.
    pub fn from_config(
        config: SugConfig,
        output: Option<PathBuf>,
        language: Option<String>,
        doc_only: bool,
    ) -> Self {
        let defaults = Self::default();
        Self {
            output_dir: output
                .or_else(|| config.output.map(PathBuf::from))
                .unwrap_or(defaults.output_dir),
            language: language.or(config.language),
            render: RenderOptions {
                doc_only: doc_only || config.doc_only.unwrap_or(false),
            },
        }
    }
}

/// What happened to one input of a batch
#[derive(Debug)]
pub enum FileOutcome {
    Converted { input: PathBuf, output: PathBuf },
    Failed { input: PathBuf, error: ConversionError },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            FileOutcome::Converted { input, .. } | FileOutcome::Failed { input, .. } => input,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

/// Pick the language for `path`: the forced one by name, else by extension.
pub fn language_for<'r>(
    registry: &'r LanguageRegistry,
    path: &Path,
    forced: Option<&str>,
) -> std::result::Result<&'r Language, ConversionError> {
    match forced {
        Some(name) => registry.resolve(name),
        None => registry
            .for_file(path)
            .ok_or_else(|| ConversionError::UnhandledFile(path.to_path_buf())),
    }
}

/// Read `path` and render it as Markdown.
pub fn convert_file(
    path: &Path,
    forced: Option<&str>,
    registry: &LanguageRegistry,
    options: RenderOptions,
) -> Result<String> {
    let language = language_for(registry, path, forced)?;
    tracing::debug!("Converting {} as {}", path.display(), language.friendly_name());

    let text = std::fs::read_to_string(path)?;
    Ok(render_with(&parse(&text, language), options))
}

/// Where the Markdown for `input` goes: its file stem plus `.md`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".md");
    output_dir.join(name)
}

/// Convert every input in order.
///
/// Conversion errors are recorded as [`FileOutcome::Failed`] and the batch
/// continues. Any other error (unreadable input, failed write) aborts the
/// batch and is returned. `on_outcome` sees each outcome as it happens.
pub fn convert_files<P, F>(
    inputs: &[P],
    registry: &LanguageRegistry,
    options: &ConvertOptions,
    mut on_outcome: F,
) -> Result<Vec<FileOutcome>>
where
    P: AsRef<Path>,
    F: FnMut(&FileOutcome),
{
    ensure_output_dir(&options.output_dir)?;

    let mut outcomes = Vec::with_capacity(inputs.len());
    for input in inputs {
        let input = input.as_ref();
        let outcome = match convert_file(input, options.language.as_deref(), registry, options.render)
        {
            Ok(markdown) => {
                let output = output_path(input, &options.output_dir);
                std::fs::write(&output, markdown)?;
                tracing::debug!("Wrote {}", output.display());
                FileOutcome::Converted {
                    input: input.to_path_buf(),
                    output,
                }
            }
            Err(Error::Conversion(error)) => {
                tracing::debug!("Skipping {}: {}", input.display(), error);
                FileOutcome::Failed {
                    input: input.to_path_buf(),
                    error,
                }
            }
            Err(other) => return Err(other),
        };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

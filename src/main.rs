//! Sug CLI - Sucks Markdown outta your source files

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sug::config::load_config;
use sug::convert::{ConvertOptions, FileOutcome, convert_files};
use sug::{languages, ui};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "sug")]
#[command(version)]
#[command(about = "Sucks Markdown outta your source files")]
#[command(long_about = r#"
Sug turns the line comments of a source file into Markdown prose and
wraps everything else in fenced code blocks tagged with the language.

Example usage:
  sug languages
  sug convert src/parser.js src/lexer.js --output docs
  sug convert build.sh --doconly
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to ./sug.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available languages
    Languages {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Convert source files to Markdown
    Convert {
        /// Files to convert
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// The output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Forces use of language for all files
        #[arg(short, long)]
        language: Option<String>,

        /// Omits code sections from the output
        #[arg(short, long = "doconly")]
        doc_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Languages { format } => run_languages(format),
        Commands::Convert {
            files,
            output,
            language,
            doc_only,
        } => {
            let config = load_config(cli.config.as_deref())?.unwrap_or_default();
            let options = ConvertOptions::from_config(config, output, language, doc_only);
            run_convert(&files, &options)
        }
    }
}

fn run_languages(format: Format) -> anyhow::Result<()> {
    let registry = languages();
    match format {
        Format::Text => {
            ui::header("Available languages:");
            println!("{}", ui::language_table(registry.languages()));
        }
        Format::Json => {
            let data = ui::language_json(registry.languages());
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }
    Ok(())
}

fn run_convert(files: &[PathBuf], options: &ConvertOptions) -> anyhow::Result<()> {
    tracing::debug!(
        "Converting {} file(s) into {}",
        files.len(),
        options.output_dir.display()
    );

    let outcomes = convert_files(files, languages(), options, |outcome| match outcome {
        FileOutcome::Converted { input, output } => ui::converted(input, output),
        FileOutcome::Failed { error, .. } => ui::skipped(&error.to_string()),
    })?;

    let failed = outcomes.iter().filter(|o| !o.is_converted()).count();
    if failed > 0 {
        ui::warn(&format!("{} of {} file(s) could not be converted", failed, outcomes.len()));
        for outcome in outcomes.iter().filter(|o| !o.is_converted()) {
            ui::summary_row("skipped", &outcome.input().display().to_string());
        }
    }
    Ok(())
}

use crate::output::is_quiet;
use crate::ui::{Icons, theme};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn header(text: &str) {
    println!("{} {}", Icons::BOOK, text.style(theme().heading.clone()));
}

/// Per-file success line; muted by `SUG_QUIET`.
pub fn converted(input: &Path, output: &Path) {
    if is_quiet() {
        return;
    }
    println!(
        "{} {} {}",
        Icons::CHECK,
        format!("Successfully converted: {}", input.display()).style(theme().converted.clone()),
        format!("→ {}", output.display()).style(theme().path.clone())
    );
}

/// Per-file failure line, on stdout next to the success lines. The batch
/// carries on after it.
pub fn skipped(message: &str) {
    println!(
        "{} {}",
        Icons::CROSS,
        failure_line(message).style(theme().failed.clone())
    );
}

fn failure_line(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warning.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().path.clone()), value);
}

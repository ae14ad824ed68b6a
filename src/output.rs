use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `SUG_QUIET` mutes the per-file success lines; failures are always shown.
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("SUG_QUIET")
            .map(|v| flag_enabled(&v))
            .unwrap_or(false)
    })
}

/// `1`, `true`, `yes` and `on` (any case) switch a flag variable on.
fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

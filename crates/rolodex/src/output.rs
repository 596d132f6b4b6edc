//! Output formatting for CLI commands.
//!
//! Commands print either human-readable text or pretty JSON for
//! programmatic use.

use crate::domain::{Profile, ProfilePath};
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `ROLODEX_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_colors = env::var("NO_COLOR").is_err()
            && match env::var("ROLODEX_COLOR") {
                Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
                Ok(v) if v.is_empty() || v == "1" || v.eq_ignore_ascii_case("true") => true,
                Ok(v) => {
                    tracing::warn!(
                        env_var = "ROLODEX_COLOR",
                        value = %v,
                        "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                    );
                    true
                }
                Err(_) => true,
            };

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Semantic colors
// ============================================================================

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

// ============================================================================
// JSON
// ============================================================================

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

/// Write a one-line listing of a profile: `#id name (title at company)`.
pub fn write_profile_line<W: Write>(
    w: &mut W,
    profile: &Profile,
    config: OutputConfig,
) -> io::Result<()> {
    let id = info(&profile.id.to_string(), config);
    match (profile.title.is_empty(), profile.company.is_empty()) {
        (true, true) => writeln!(w, "{id} {}", profile.name),
        (false, true) => writeln!(w, "{id} {} ({})", profile.name, profile.title),
        (true, false) => writeln!(w, "{id} {} (at {})", profile.name, profile.company),
        (false, false) => writeln!(
            w,
            "{id} {} ({} at {})",
            profile.name, profile.title, profile.company
        ),
    }
}

/// Write a path as `distance: a -> b -> c`, or a "no path" notice.
pub fn write_path<W: Write>(
    w: &mut W,
    path: Option<&ProfilePath>,
    config: OutputConfig,
) -> io::Result<()> {
    match path {
        Some(path) => {
            let hops = if path.distance == 1 { "hop" } else { "hops" };
            writeln!(
                w,
                "{} {hops}: {}",
                success(&path.distance.to_string(), config),
                path.names.join(" -> ")
            )
        }
        None => writeln!(w, "{}", warning("No path found", config)),
    }
}

/// Print a path in the specified format
pub fn print_path(path: Option<&ProfilePath>, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&path),
        OutputMode::Text => write_path(&mut io::stdout().lock(), path, OutputConfig::from_env()),
    }
}

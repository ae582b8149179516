//! Operator-facing diagnostics for a failed environment check.

use crate::config::validation::ValidationError;

const HEADER: &str = "❌ Missing or invalid environment variables:";
const HINT: &str = "💡 Copy backend/.env.example to backend/.env and fill in the values.";

/// Render the failure block written to stderr before exiting.
///
/// One bullet per error, framed by a header and a pointer to the
/// `.env.example` template.
pub fn render_report(errors: &[ValidationError]) -> String {
    let bullets = errors
        .iter()
        .map(|e| format!("  ✗ {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    format!("\n{HEADER}\n\n{bullets}\n\n{HINT}\n")
}

// Console helpers shared by the pattern executables: colored banners for
// scenario output, and a tracing subscriber for diagnostics on stderr.

use colored::Colorize;
use tracing::Level;

/// Installs the stderr diagnostics subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

pub fn banner_text(category: &str, pattern: &str) -> String {
    let title = format!("{category} Pattern: {pattern}");
    let rule = "=".repeat(title.len());
    format!("{title}\n{rule}")
}

pub fn banner(category: &str, pattern: &str) {
    println!("{}\n", banner_text(category, pattern).bold().cyan());
}

pub fn section(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

/// Prints a non-fatal diagnostic in the scenario output.
pub fn diagnostic(message: impl std::fmt::Display) {
    println!("{}", message.to_string().yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_rule_matches_title_width() {
        let text = banner_text("Behavioral", "Observer");
        let mut lines = text.lines();
        let title = lines.next().unwrap();
        let rule = lines.next().unwrap();
        assert_eq!(title, "Behavioral Pattern: Observer");
        assert_eq!(rule.len(), title.len());
        assert!(rule.chars().all(|c| c == '='));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}

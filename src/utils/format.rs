// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::{CriterionCheck, Severity, StrengthRating, StrengthReport};

const METER_CELLS: usize = 20;

fn paint<D>(value: D, severity: Severity) -> StyledObject<D> {
    match severity {
        Severity::Success => style(value).green(),
        Severity::Warning => style(value).yellow(),
        Severity::Danger => style(value).red(),
    }
}

// Render a rating as a fixed-width bar, filled in proportion to its width
pub fn render_meter(rating: &StrengthRating) -> String {
    let filled = (usize::from(rating.width.min(100)) * METER_CELLS) / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(METER_CELLS - filled));
    format!("[{}] {}", paint(bar, rating.severity), paint(&rating.label, rating.severity).bold())
}

pub fn render_check(check: &CriterionCheck) -> String {
    if check.met {
        format!("{} {}", style("✔").green(), check.criterion.description())
    } else {
        format!("{} {}", style("✘").red(), check.criterion.description())
    }
}

// Full multi-line report used by the CLI
pub fn render_report(report: &StrengthReport) -> String {
    let mut lines = vec![format!("Strength: {} ({})", render_meter(&report.rating), report.score)];
    lines.extend(report.checks.iter().map(|check| format!("  {}", render_check(check))));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strength;
    use crate::models::StrengthLevel;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    #[test]
    fn test_meter_fill_follows_width() {
        let weak = plain(&render_meter(&StrengthLevel::Weak.into()));
        assert_eq!(weak.matches('█').count(), 4);
        assert_eq!(weak.matches('░').count(), 16);
        assert!(weak.ends_with("Weak"));

        let strong = plain(&render_meter(&StrengthLevel::Strong.into()));
        assert_eq!(strong.matches('█').count(), 20);
        assert!(strong.ends_with("Strong"));
    }

    #[test]
    fn test_report_lists_every_check() {
        let rendered = plain(&render_report(&strength::analyze("aaaaaaa")));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("(1/5)"));
        assert!(lines[1].contains("✘ At least 8 characters"));
        assert!(lines[3].contains("✔ Contains a lowercase letter"));
    }
}

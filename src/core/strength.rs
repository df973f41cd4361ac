// src/core/strength.rs
use crate::models::{
    Criterion, CriterionCheck, StrengthLevel, StrengthRating, StrengthReport, StrengthScore,
};

pub const MIN_LENGTH: usize = 8;

pub fn has_upper(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lower(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[A-Za-z0-9]` counts as a symbol, including non-ASCII letters.
pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn is_met(criterion: Criterion, password: &str) -> bool {
    match criterion {
        Criterion::MinLength => password.chars().count() >= MIN_LENGTH,
        Criterion::Uppercase => has_upper(password),
        Criterion::Lowercase => has_lower(password),
        Criterion::Digit => has_digit(password),
        Criterion::Symbol => has_symbol(password),
    }
}

pub fn checks(password: &str) -> [CriterionCheck; 5] {
    Criterion::ALL.map(|criterion| CriterionCheck {
        criterion,
        met: is_met(criterion, password),
    })
}

pub fn score(password: &str) -> StrengthScore {
    let met = checks(password).iter().filter(|check| check.met).count();
    StrengthScore::clamped(met as u8)
}

pub fn rate(score: StrengthScore) -> StrengthRating {
    let level = match score.value() {
        5 => StrengthLevel::Strong,
        3..=4 => StrengthLevel::Medium,
        _ => StrengthLevel::Weak,
    };
    level.into()
}

pub fn analyze(password: &str) -> StrengthReport {
    let checks = checks(password);
    let met = checks.iter().filter(|check| check.met).count();
    let score = StrengthScore::clamped(met as u8);
    StrengthReport {
        score,
        rating: rate(score),
        checks: checks.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_empty_password() {
        assert_eq!(score("").value(), 0);
        assert_eq!(rate(score("")).level, StrengthLevel::Weak);
    }

    #[test]
    fn test_all_criteria_met() {
        let s = score("Aa1!aaaa");
        assert_eq!(s.value(), 5);
        let rating = rate(s);
        assert_eq!(rating.level, StrengthLevel::Strong);
        assert_eq!(rating.width, 100);
        assert_eq!(rating.severity, Severity::Success);
    }

    #[test]
    fn test_short_lowercase_only() {
        let s = score("aaaaaaa");
        assert_eq!(s.value(), 1);
        assert_eq!(rate(s).level, StrengthLevel::Weak);
        assert_eq!(rate(s).width, 20);
    }

    #[test]
    fn test_long_mixed_case() {
        let s = score("Aaaaaaaa");
        assert_eq!(s.value(), 3);
        let rating = rate(s);
        assert_eq!(rating.level, StrengthLevel::Medium);
        assert_eq!(rating.width, 60);
        assert_eq!(rating.severity, Severity::Warning);
    }

    #[test]
    fn test_rating_thresholds() {
        let levels: Vec<StrengthLevel> = (0..=5)
            .map(|raw| rate(StrengthScore::clamped(raw)).level)
            .collect();
        assert_eq!(
            levels,
            vec![
                StrengthLevel::Weak,
                StrengthLevel::Weak,
                StrengthLevel::Weak,
                StrengthLevel::Medium,
                StrengthLevel::Medium,
                StrengthLevel::Strong,
            ]
        );
        assert_eq!(rate(StrengthScore::clamped(200)).level, StrengthLevel::Strong);
    }

    #[test]
    fn test_symbol_is_anything_outside_ascii_alphanumerics() {
        assert!(has_symbol(" "));
        assert!(has_symbol("é"));
        assert!(has_symbol("abc_"));
        assert!(!has_symbol("abcXYZ019"));
        // non-ASCII letters are not counted as upper or lower case
        assert!(!has_upper("É"));
        assert!(!has_lower("é"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(!is_met(Criterion::MinLength, "ééééééé"));
        assert!(is_met(Criterion::MinLength, "éééééééé"));
    }

    #[test]
    fn test_checks_follow_fixed_order() {
        let result = checks("abc123");
        let criteria: Vec<Criterion> = result.iter().map(|c| c.criterion).collect();
        assert_eq!(criteria, Criterion::ALL.to_vec());
        let met: Vec<bool> = result.iter().map(|c| c.met).collect();
        assert_eq!(met, vec![false, false, true, true, false]);
    }

    #[test]
    fn test_score_equals_count_of_met_checks() {
        for password in ["", "a", "A1", "password", "Passw0rd", "P@ss", "P@ssw0rd!", "12345678", "!!!!!!!!"] {
            let expected = checks(password).iter().filter(|c| c.met).count() as u8;
            assert_eq!(score(password).value(), expected, "{}", password);
            assert!(score(password).value() <= 5);
        }
    }

    #[test]
    fn test_analyze_combines_everything() {
        let report = analyze("Aaaaaaaa");
        assert_eq!(report.score.value(), 3);
        assert_eq!(report.rating.label, "Medium");
        assert_eq!(report.checks.len(), 5);
        assert_eq!(report.feedback().len(), 2);
    }
}

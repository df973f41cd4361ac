// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::GeneratorError;

/// Number of heuristics a password is scored against.
pub const CRITERIA_COUNT: u8 = 5;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordGenerationOptions {
    /// Check the requested length against the bounds accepted from user input.
    ///
    /// Disabling every character class is allowed; the generator simply
    /// returns an empty password for it.
    pub fn validate(&self, max_length: usize) -> Result<(), GeneratorError> {
        if self.length == 0 {
            return Err(GeneratorError::LengthTooShort);
        }
        if self.length > max_length {
            return Err(GeneratorError::LengthTooLong { max: max_length });
        }
        Ok(())
    }

    pub fn enabled_class_count(&self) -> usize {
        [
            self.include_lowercase,
            self.include_uppercase,
            self.include_numbers,
            self.include_symbols,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

/// Count of satisfied strength criteria, always within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: StrengthScore = StrengthScore(CRITERIA_COUNT);

    /// Build a score from a raw value, saturating at the maximum.
    pub fn clamped(raw: u8) -> Self {
        StrengthScore(raw.min(Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > CRITERIA_COUNT {
            return Err(format!("score {} is above the maximum of {}", raw, CRITERIA_COUNT));
        }
        Ok(StrengthScore(raw))
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, CRITERIA_COUNT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Meter width in percent.
    pub fn width(self) -> u8 {
        match self {
            StrengthLevel::Weak => 20,
            StrengthLevel::Medium => 60,
            StrengthLevel::Strong => 100,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            StrengthLevel::Weak => Severity::Danger,
            StrengthLevel::Medium => Severity::Warning,
            StrengthLevel::Strong => Severity::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthRating {
    pub level: StrengthLevel,
    pub label: String,
    pub width: u8,
    pub severity: Severity,
}

impl From<StrengthLevel> for StrengthRating {
    fn from(level: StrengthLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            width: level.width(),
            severity: level.severity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Symbol,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Criterion::MinLength => "At least 8 characters",
            Criterion::Uppercase => "Contains an uppercase letter",
            Criterion::Lowercase => "Contains a lowercase letter",
            Criterion::Digit => "Contains a digit",
            Criterion::Symbol => "Contains a symbol",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Criterion::MinLength => "Increase password length to at least 8 characters",
            Criterion::Uppercase => "Add uppercase letters for better security",
            Criterion::Lowercase => "Add lowercase letters for better security",
            Criterion::Digit => "Add numbers for better security",
            Criterion::Symbol => "Add symbols for better security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub met: bool,
}

/// Everything shown to the user about a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    #[schema(value_type = u8, minimum = 0, maximum = 5)]
    pub score: StrengthScore,
    pub rating: StrengthRating,
    pub checks: Vec<CriterionCheck>,
}

impl StrengthReport {
    /// Advice for each criterion the password misses.
    pub fn feedback(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|check| !check.met)
            .map(|check| check.criterion.advice().to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthReport,
}

// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{PasswordGenerationOptions, StrengthReport};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: DEFAULT_PASSWORD_LENGTH)
    pub length: Option<usize>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Exclude look-alike characters O 0 I l 1 | (default: DEFAULT_EXCLUDE_AMBIGUOUS)
    pub exclude_ambiguous: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Fill unset fields from the given defaults.
    pub fn into_options(self, defaults: PasswordGenerationOptions) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(defaults.exclude_ambiguous),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (empty when no characters were available)
    pub password: Option<String>,
    /// Strength of the generated password
    pub strength: Option<StrengthReport>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Score, rating and per-criterion checks
    pub strength: Option<StrengthReport>,
    /// Suggestions for each unmet criterion
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

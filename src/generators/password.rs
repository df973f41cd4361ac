// src/generators/password.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::core::strength;
use crate::crypto;
use crate::models::{PasswordGenerationOptions, StrengthReport};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|~`";

/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: [char; 6] = ['O', '0', 'I', 'l', '1', '|'];

pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator { rng: crypto::secure_rng() }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Build a random password from the enabled character classes.
    ///
    /// Every enabled class that is non-empty after ambiguous filtering
    /// contributes one mandatory character; the rest is drawn from the
    /// combined pool and the whole sequence is shuffled. Returns an empty
    /// string when the pool is empty.
    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> String {
        let classes = character_classes(options);
        let pool: Vec<char> = classes.concat();

        if pool.is_empty() {
            log::debug!("No characters available for generation, returning empty password");
            return String::new();
        }

        let mut chars: Vec<char> = classes
            .iter()
            .filter_map(|class| crypto::pick(&mut self.rng, class))
            .collect();

        let filler = options.length.saturating_sub(chars.len());
        for _ in 0..filler {
            if let Some(c) = crypto::pick(&mut self.rng, &pool) {
                chars.push(c);
            }
        }

        crypto::shuffle(&mut self.rng, &mut chars);
        // only shortens when fewer positions than mandatory characters were requested
        chars.truncate(options.length);

        log::debug!(
            "Generated password of length {} from a pool of {} characters",
            chars.len(),
            pool.len()
        );

        chars.into_iter().collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        strength::analyze(password)
    }
}

/// Enabled classes in fixed order (lower, upper, digits, symbols), with
/// ambiguous characters removed when requested.
pub fn character_classes(options: &PasswordGenerationOptions) -> Vec<Vec<char>> {
    [
        (options.include_lowercase, LOWERCASE),
        (options.include_uppercase, UPPERCASE),
        (options.include_numbers, DIGITS),
        (options.include_symbols, SYMBOLS),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, set)| {
        set.chars()
            .filter(|c| !(options.exclude_ambiguous && AMBIGUOUS.contains(c)))
            .collect()
    })
    .collect()
}

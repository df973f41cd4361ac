// src/generators/mod.rs
use thiserror::Error;

pub mod password;

pub use password::PasswordGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1 character")]
    LengthTooShort,

    #[error("Password length must be at most {max} characters")]
    LengthTooLong { max: usize },
}

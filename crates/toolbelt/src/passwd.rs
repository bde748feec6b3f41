//! Random password generation from toggleable character classes.

use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswdError {
    #[error("at least one character class must be enabled")]
    NoClasses,
}

/// Draws `options.length` characters uniformly from the enabled classes,
/// using the OS entropy source.
pub fn generate(options: &PasswordOptions) -> Result<String, PasswdError> {
    let mut pool = String::new();
    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }
    if pool.is_empty() {
        return Err(PasswdError::NoClasses);
    }

    let chars: Vec<char> = pool.chars().collect();
    let mut rng = OsRng;
    Ok((0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

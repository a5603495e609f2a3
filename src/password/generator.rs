use crate::password::error::PasswordError;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_LENGTH: usize = 128;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character classes go into a password, and how long it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

/// Characters a password may draw from, in class order
pub fn character_pool(options: &PasswordOptions) -> String {
    [
        (options.uppercase, UPPERCASE),
        (options.lowercase, LOWERCASE),
        (options.numbers, NUMBERS),
        (options.symbols, SYMBOLS),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, chars)| *chars)
    .collect()
}

/// Draw each character uniformly from the enabled classes
pub fn generate<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PasswordError> {
    if options.length > MAX_LENGTH {
        return Err(PasswordError::TooLong(options.length));
    }

    let pool: Vec<char> = character_pool(options).chars().collect();
    if pool.is_empty() {
        return Err(PasswordError::NoCharacterClasses);
    }

    Ok((0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

pub fn generate_default(options: &PasswordOptions) -> Result<String, PasswordError> {
    let password = generate(options, &mut rand::thread_rng())?;
    log::debug!("Generated password of length {}", password.len());
    Ok(password)
}

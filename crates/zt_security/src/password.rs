//! Password generator.
//!
//! The number of characters taken from each class is chosen at random within
//! the configured minimums, characters are drawn from the caller's RNG, and
//! the result is shuffled. The CLI passes `OsRng`; tests pass a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SecurityError, SecurityResult};

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Specials that survive in a URL without escaping.
pub const URL_SPECIALS: &str = "$-_.+!*'(),";
const EXTRA_SPECIALS: &str = "~@#%^&={}[]:;\"<>?/|\\";

/// Characters removed when ambiguous glyphs are avoided.
const AMBIGUOUS: &[char] = &['l', 'I', 'O', '0', '1'];

/// Password generation options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub min_numbers: usize,
    pub min_specials: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub specials: bool,
    /// Restrict specials to [`URL_SPECIALS`]
    pub url_safe_specials: bool,
    /// Drop `l`, `I`, `O`, `0` and `1`
    pub avoid_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 8,
            min_numbers: 1,
            min_specials: 1,
            uppercase: true,
            lowercase: true,
            numbers: true,
            specials: true,
            url_safe_specials: false,
            avoid_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Options with at least one class enabled; lowercase is the fallback.
    pub fn normalized(&self) -> Self {
        let mut options = self.clone();
        if !(options.uppercase || options.lowercase || options.numbers || options.specials) {
            options.lowercase = true;
        }
        options
    }

    fn letter_classes(&self) -> usize {
        usize::from(self.uppercase) + usize::from(self.lowercase)
    }

    /// Smallest length that satisfies every enabled class.
    pub fn required_length(&self) -> usize {
        let numbers = if self.numbers { self.min_numbers } else { 0 };
        let specials = if self.specials { self.min_specials } else { 0 };
        (numbers + specials + self.letter_classes()).max(1)
    }

    fn pool(&self, base: &str) -> Vec<char> {
        base.chars()
            .filter(|c| !(self.avoid_ambiguous && AMBIGUOUS.contains(c)))
            .collect()
    }

    fn lowercase_pool(&self) -> Vec<char> {
        self.pool(LOWERCASE)
    }

    fn uppercase_pool(&self) -> Vec<char> {
        self.pool(UPPERCASE)
    }

    fn digit_pool(&self) -> Vec<char> {
        self.pool(DIGITS)
    }

    fn special_pool(&self) -> Vec<char> {
        if self.url_safe_specials {
            URL_SPECIALS.chars().collect()
        } else {
            URL_SPECIALS.chars().chain(EXTRA_SPECIALS.chars()).collect()
        }
    }

    /// Number of distinct characters a password may contain.
    pub fn pool_size(&self) -> usize {
        let options = self.normalized();
        let mut size = 0;
        if options.lowercase {
            size += options.lowercase_pool().len();
        }
        if options.uppercase {
            size += options.uppercase_pool().len();
        }
        if options.numbers {
            size += options.digit_pool().len();
        }
        if options.specials {
            size += options.special_pool().len();
        }
        size
    }

    fn check(&self) -> SecurityResult<()> {
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(SecurityError::PasswordTooLong {
                length: self.length,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        let required = self.required_length();
        if self.length < required {
            return Err(SecurityError::PasswordTooShort {
                length: self.length,
                required,
            });
        }
        Ok(())
    }
}

/// How many characters each class contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClassCounts {
    lower: usize,
    upper: usize,
    numbers: usize,
    specials: usize,
}

fn pick_counts<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> ClassCounts {
    let length = options.length;
    let min_numbers = if options.numbers { options.min_numbers } else { 0 };
    let min_specials = if options.specials { options.min_specials } else { 0 };
    let letters = options.letter_classes();

    if letters == 0 {
        let (numbers, specials) = match (options.numbers, options.specials) {
            (true, true) => {
                let numbers = rng.gen_range(min_numbers..=length - min_specials);
                (numbers, length - numbers)
            }
            (true, false) => (length, 0),
            _ => (0, length),
        };
        return ClassCounts {
            lower: 0,
            upper: 0,
            numbers,
            specials,
        };
    }

    let numbers = if options.numbers {
        rng.gen_range(min_numbers..=length - min_specials - letters)
    } else {
        0
    };
    let specials = if options.specials {
        rng.gen_range(min_specials..=length - numbers - letters)
    } else {
        0
    };

    let remainder = length - numbers - specials;
    let (upper, lower) = match (options.uppercase, options.lowercase) {
        (true, true) => {
            let upper = rng.gen_range(1..=remainder - 1);
            (upper, remainder - upper)
        }
        (true, false) => (remainder, 0),
        _ => (0, remainder),
    };

    ClassCounts {
        lower,
        upper,
        numbers,
        specials,
    }
}

fn draw<R: Rng + ?Sized>(pool: &[char], count: usize, rng: &mut R, out: &mut Vec<char>) {
    for _ in 0..count {
        if let Some(c) = pool.choose(rng) {
            out.push(*c);
        }
    }
}

/// Generate one password.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> SecurityResult<String> {
    let options = options.normalized();
    options.check()?;

    let counts = pick_counts(&options, rng);
    let mut chars = Vec::with_capacity(options.length);
    draw(&options.lowercase_pool(), counts.lower, rng, &mut chars);
    draw(&options.uppercase_pool(), counts.upper, rng, &mut chars);
    draw(&options.digit_pool(), counts.numbers, rng, &mut chars);
    draw(&options.special_pool(), counts.specials, rng, &mut chars);
    chars.shuffle(rng);

    Ok(chars.into_iter().collect())
}

/// Generate `count` passwords with the same options.
pub fn generate_passwords<R: Rng + ?Sized>(
    count: usize,
    options: &PasswordOptions,
    rng: &mut R,
) -> SecurityResult<Vec<String>> {
    if count > crate::uuids::MAX_BATCH {
        return Err(SecurityError::BatchTooLarge {
            requested: count,
            max: crate::uuids::MAX_BATCH,
        });
    }
    debug!("Generating {} password(s) of length {}", count, options.length);
    (0..count).map(|_| generate_password(options, rng)).collect()
}

/// Strength band derived from estimated entropy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

/// Entropy estimate for passwords produced with some options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StrengthEstimate {
    pub bits: f64,
    pub rating: PasswordStrength,
}

/// Estimate entropy as `length * log2(pool size)`.
pub fn estimate_strength(options: &PasswordOptions) -> StrengthEstimate {
    let pool = options.pool_size().max(1) as f64;
    let bits = options.length as f64 * pool.log2();
    let rating = if bits < 40.0 {
        PasswordStrength::Weak
    } else if bits < 60.0 {
        PasswordStrength::Fair
    } else if bits < 100.0 {
        PasswordStrength::Strong
    } else {
        PasswordStrength::VeryStrong
    };
    StrengthEstimate { bits, rating }
}

//! Password command - Generate passwords.

use anyhow::Result;
use clap::Args;
use rand::rngs::OsRng;
use serde::Serialize;

use zt_security::{estimate_strength, generate_passwords, PasswordOptions, StrengthEstimate};

use super::Context;

#[derive(Args)]
pub struct PasswordArgs {
    /// Password length
    #[arg(short, long)]
    length: Option<usize>,

    /// How many passwords to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Minimum number of digits
    #[arg(long)]
    min_numbers: Option<usize>,

    /// Minimum number of special characters
    #[arg(long)]
    min_specials: Option<usize>,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_specials: bool,

    /// Only use specials that need no escaping in URLs
    #[arg(long)]
    url_safe: bool,

    /// Leave out l, I, O, 0 and 1
    #[arg(long)]
    avoid_ambiguous: bool,

    /// Also print the entropy estimate
    #[arg(long)]
    strength: bool,
}

#[derive(Serialize)]
struct PasswordOutput {
    passwords: Vec<String>,
    strength: StrengthEstimate,
}

impl PasswordArgs {
    /// Flags over configured defaults.
    fn options(&self, ctx: &Context) -> PasswordOptions {
        let defaults = &ctx.config.password;
        PasswordOptions {
            length: self.length.unwrap_or(defaults.length),
            min_numbers: self.min_numbers.unwrap_or(defaults.min_numbers),
            min_specials: self.min_specials.unwrap_or(defaults.min_specials),
            uppercase: defaults.uppercase && !self.no_uppercase,
            lowercase: defaults.lowercase && !self.no_lowercase,
            numbers: defaults.numbers && !self.no_numbers,
            specials: defaults.specials && !self.no_specials,
            url_safe_specials: self.url_safe || defaults.url_safe_specials,
            avoid_ambiguous: self.avoid_ambiguous || defaults.avoid_ambiguous,
        }
    }
}

pub async fn execute(args: PasswordArgs, ctx: &Context) -> Result<()> {
    let options = args.options(ctx);
    let count = args.count.unwrap_or(ctx.config.password.count);
    let passwords = generate_passwords(count, &options, &mut OsRng)?;
    let output = PasswordOutput {
        passwords,
        strength: estimate_strength(&options),
    };

    ctx.emit(&output, || {
        let mut text = output.passwords.join("\n");
        if args.strength {
            text.push_str(&format!(
                "\nStrength: {:?} ({:.1} bits)",
                output.strength.rating, output.strength.bits
            ));
        }
        text
    })
}

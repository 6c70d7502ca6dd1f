use super::types::{Args, Command, Target};
use crate::build::parse_env_pair;

/// S3 limits a bucket name to 63 characters
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Validates the parsed arguments as a whole.
///
/// # Errors
///
/// Returns an error if the derived bucket name is invalid or the upload source
/// is missing while the build is skipped.
pub fn validate(args: &Args) -> Result<(), String> {
    let longest = format!("{}-{}", args.bucket_prefix, Target::Prod.stack_name());
    if longest.len() > MAX_BUCKET_NAME_LEN {
        return Err(format!(
            "Bucket name '{longest}' is longer than {MAX_BUCKET_NAME_LEN} characters."
        ));
    }

    // Without a build the output has to exist already
    if args.skip_build && matches!(args.command, Command::Upload | Command::UploadProd) {
        let root = args.source_root();
        if !root.is_dir() {
            return Err(format!(
                "The directory '{}' does not exist and --skip-build was given.",
                root.display()
            ));
        }
    }

    Ok(())
}

/// Value parser for `--build-env KEY=VALUE`
///
/// # Errors
///
/// Returns an error if the entry has no `=` or an empty key.
pub fn check_env_pair(pair: &str) -> Result<String, String> {
    parse_env_pair(pair).map(|_| pair.to_string())
}

/// Value parser for a bucket name or prefix.
///
/// # Errors
///
/// Returns an error unless the name is 3-63 lowercase letters, digits, dots or
/// hyphens, starting and ending with a letter or digit.
pub fn check_bucket_name(name: &str) -> Result<String, String> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.');
    let alnum = |c: Option<char>| c.is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if (3..=MAX_BUCKET_NAME_LEN).contains(&name.len())
        && valid_chars
        && alnum(name.chars().next())
        && alnum(name.chars().last())
    {
        Ok(name.to_string())
    } else {
        Err(format!("'{name}' is not a valid bucket name."))
    }
}

//! Slide name validation.
//!
//! Slide names are embedded into branch names, so they are restricted to a
//! character set that is safe in git refs and file paths.

use anyhow::{bail, Result};

/// Maximum allowed length for slide names.
pub const MAX_SLIDE_NAME_LENGTH: usize = 64;

/// Names that cannot be used as slide names.
const RESERVED_NAMES: &[&str] = &[".", ".."];

/// Validates that a slide name is safe to embed in a branch name.
///
/// A name is valid if it is non-empty, no longer than
/// `MAX_SLIDE_NAME_LENGTH` characters, contains only alphanumeric
/// characters, dashes, and underscores, and is not a reserved name.
pub fn validate_slide_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("slide name cannot be empty");
    }

    if name.len() > MAX_SLIDE_NAME_LENGTH {
        bail!(
            "slide name too long: {} characters (max {MAX_SLIDE_NAME_LENGTH})",
            name.len()
        );
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("slide name '{name}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    if RESERVED_NAMES.contains(&name) {
        bail!("slide name '{name}' is reserved");
    }

    Ok(())
}

/// Clap value parser for validating slide name arguments.
pub fn clap_slide_name_validator(s: &str) -> Result<String, String> {
    validate_slide_name(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

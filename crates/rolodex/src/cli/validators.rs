//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time.

/// Maximum length of a profile name, title or company given on the command line
pub const MAX_FIELD_LENGTH: usize = 200;

/// Validate a network name.
///
/// Delegates to the validator in `commands::init` so the rules live in one place.
pub fn validate_network_name(s: &str) -> Result<String, String> {
    use crate::commands::init;

    let trimmed = s.trim();
    init::validate_network_name(trimmed).map_err(|e| e.to_string())?;
    Ok(trimmed.to_string())
}

/// Validate a profile reference: an exact name, or `#<id>`.
pub fn validate_profile_ref(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Profile reference cannot be empty".to_string());
    }

    if let Some(raw) = s.strip_prefix('#') {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) && raw.parse::<u32>().is_err()
        {
            return Err(format!("Profile id '{s}' is out of range"));
        }
    }

    Ok(s.to_string())
}

/// Validate a free-text profile field (name, title, company, role, ...).
///
/// Empty values are allowed; surrounding whitespace is trimmed.
pub fn validate_field(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.chars().count() > MAX_FIELD_LENGTH {
        return Err(format!("Value cannot exceed {MAX_FIELD_LENGTH} characters"));
    }

    if s.chars().any(char::is_control) {
        return Err("Value cannot contain control characters".to_string());
    }

    Ok(s.to_string())
}

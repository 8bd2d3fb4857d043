//! Name and markup identifier validation

/// Maximum length (in characters) of a single name part.
pub const MAX_NAME_PART_LEN: usize = 64;

/// Name part validation errors with helpful messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Name contains control characters")]
    ControlCharacters,
}

/// Markup identifier errors raised while building a tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),
}

/// Validate a first or last name and return the trimmed form.
///
/// Empty names are allowed; the presenter decides how to display them.
pub fn validate_name_part(part: &str) -> Result<String, NameError> {
    let trimmed = part.trim();

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(NameError::ControlCharacters);
    }
    if trimmed.chars().count() > MAX_NAME_PART_LEN {
        return Err(NameError::TooLong {
            max: MAX_NAME_PART_LEN,
        });
    }

    Ok(trimmed.to_string())
}

/// Identifiers are `[A-Za-z][A-Za-z0-9-]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

pub fn validate_tag_name(tag: &str) -> Result<(), MarkupError> {
    if is_identifier(tag) {
        Ok(())
    } else {
        Err(MarkupError::InvalidTagName(tag.to_string()))
    }
}

pub fn validate_attr_name(name: &str) -> Result<(), MarkupError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(MarkupError::InvalidAttributeName(name.to_string()))
    }
}

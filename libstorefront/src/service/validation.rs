//! Email validation service
//!
//! The shape check is lenient: it wants `local@domain.tld` with no whitespace
//! and a single `@`, and accepts some addresses a mail server would reject
//! (`a@b.c.`, `a@.b.c`).
//!
//! Whitespace means the ECMAScript set: Unicode `White_Space` without U+0085,
//! plus U+FEFF. Rust's `char::is_whitespace` and `str::trim` differ on those two.

use crate::types::ValidationError;

/// Whitespace as the address checks see it
pub fn is_address_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Strip surrounding whitespace from a draft
pub fn trim_address(value: &str) -> &str {
    value.trim_matches(is_address_whitespace)
}

/// Check a string for the minimal `local@domain.tld` shape
///
/// Surrounding whitespace is trimmed first. After that, `local`, `domain` and
/// `tld` must each be non-empty and free of whitespace and `@`. Any dot after
/// the `@` with a character on both sides can act as the separator.
pub fn is_valid_email(value: &str) -> bool {
    let value = trim_address(value);

    if value.chars().any(is_address_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Classifies a draft the way the signup form needs it
///
/// Stateless; cloned freely into every form instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Rule applied when the user submits
    pub fn check_submit(&self, draft: &str) -> Result<(), ValidationError> {
        if trim_address(draft).is_empty() {
            return Err(ValidationError::Empty);
        }
        if !is_valid_email(draft) {
            return Err(ValidationError::Malformed);
        }
        Ok(())
    }

    /// Rule applied when the field loses focus
    ///
    /// An untouched field is never flagged; only a non-empty malformed draft is.
    pub fn check_blur(&self, draft: &str) -> Option<ValidationError> {
        if !draft.is_empty() && !is_valid_email(draft) {
            Some(ValidationError::Malformed)
        } else {
            None
        }
    }
}

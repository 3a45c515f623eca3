/// Request field validation helpers
///
/// Request bodies deserialize every field as optional so that a missing
/// field produces the API's own 400 response instead of a framework
/// rejection; handlers then check presence with [`non_blank`].

use validator::ValidateEmail;

/// Returns the trimmed value when the field is present and non-empty
///
/// Blank strings count as missing, matching how the API has always treated
/// `""` in request bodies.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Checks that an email is `local@domain` shaped
///
/// On top of the standard email validation, the domain must contain a dot;
/// `user@localhost`-style addresses are rejected.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

//! Dean sign-off signature derivation.
//!
//! When a meeting is marked signed without an explicit signature string, the
//! signer's display name is used instead. The derivation is a pure function
//! so the rule stays testable away from the HTTP layer.

/// Build a signer's display name from their profile fields.
///
/// Joins first and last name with a single space and trims the result;
/// falls back to the username when both name parts are blank.
pub fn display_name(first_name: Option<&str>, last_name: Option<&str>, username: &str) -> String {
    let full = format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    );
    let full = full.trim();
    if full.is_empty() {
        username.to_string()
    } else {
        full.to_string()
    }
}

/// Decide the signature to persist for a meeting update.
///
/// The derivation fires only on the false -> true transition of the
/// signed-by-dean flag, and only when the payload carries no explicit
/// signature. Returns `None` when the stored signature should be left alone.
pub fn signature_on_update(
    currently_signed: bool,
    incoming_signed: Option<bool>,
    explicit_signature: Option<&str>,
    signer_display_name: &str,
) -> Option<String> {
    if let Some(sig) = explicit_signature {
        return Some(sig.to_string());
    }
    if incoming_signed == Some(true) && !currently_signed {
        return Some(signer_display_name.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_full() {
        assert_eq!(display_name(Some("Amina"), Some("Khalil"), "akhalil"), "Amina Khalil");
    }

    #[test]
    fn test_display_name_partial() {
        assert_eq!(display_name(Some("Amina"), None, "akhalil"), "Amina");
        assert_eq!(display_name(None, Some("Khalil"), "akhalil"), "Khalil");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(display_name(None, None, "akhalil"), "akhalil");
        assert_eq!(display_name(Some(""), Some(""), "akhalil"), "akhalil");
        assert_eq!(display_name(Some("  "), None, "akhalil"), "akhalil");
    }

    #[test]
    fn test_autofill_on_sign_transition() {
        let sig = signature_on_update(false, Some(true), None, "Dean Rahma");
        assert_eq!(sig.as_deref(), Some("Dean Rahma"));
    }

    #[test]
    fn test_explicit_signature_wins() {
        let sig = signature_on_update(false, Some(true), Some("Prof. R. Haddad"), "Dean Rahma");
        assert_eq!(sig.as_deref(), Some("Prof. R. Haddad"));
    }

    #[test]
    fn test_no_autofill_when_already_signed() {
        assert_eq!(signature_on_update(true, Some(true), None, "Dean Rahma"), None);
    }

    #[test]
    fn test_no_autofill_without_sign_flag() {
        assert_eq!(signature_on_update(false, None, None, "Dean Rahma"), None);
        assert_eq!(signature_on_update(false, Some(false), None, "Dean Rahma"), None);
    }

    #[test]
    fn test_explicit_signature_applies_even_without_transition() {
        // An update can always set the signature string directly.
        let sig = signature_on_update(true, None, Some("corrected"), "Dean Rahma");
        assert_eq!(sig.as_deref(), Some("corrected"));
    }
}

//! Email normalization for the sign-in identifier.

/// Normalize an email address the way account creation stores it.
///
/// The address is trimmed and split at the last `@`. Only the domain part is
/// lower-cased; the local part is kept verbatim. Input without an `@` is
/// returned untouched.
///
/// ```
/// use storefront_accounts::normalize_email;
///
/// assert_eq!(normalize_email("Alice@EXAMPLE.Com"), "Alice@example.com");
/// assert_eq!(normalize_email("no-at-sign"), "no-at-sign");
/// ```
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_domain_only() {
        assert_eq!(normalize_email("A@B.COM"), "A@b.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_email("  bob@Shop.IO \n"), "bob@shop.io");
    }

    #[test]
    fn splits_at_last_at_sign() {
        assert_eq!(normalize_email("\"a@b\"@EXAMPLE.org"), "\"a@b\"@example.org");
    }

    #[test]
    fn without_at_sign_input_is_unchanged() {
        assert_eq!(normalize_email(" Plain "), " Plain ");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_email("Carol@Example.COM");
        assert_eq!(normalize_email(&once), once);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the local part survives normalization byte for byte.
            #[test]
            fn local_part_is_preserved(
                local in "[A-Za-z0-9._+-]{1,20}",
                domain in "[A-Za-z0-9-]{1,20}\\.[A-Za-z]{2,6}"
            ) {
                let normalized = normalize_email(&format!("{local}@{domain}"));
                prop_assert_eq!(normalized, format!("{local}@{}", domain.to_lowercase()));
            }
        }
    }
}

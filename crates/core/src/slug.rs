//! URL-safe slugs derived from human-readable text.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is a valid regex"));

/// Turn `input` into a lowercase, hyphen-separated ASCII slug.
///
/// Non-ASCII characters are transliterated (`"Crème"` becomes `"creme"`); anything
/// without an ASCII rendering is dropped. Every run of characters other than
/// `[a-z0-9]` collapses into one hyphen and hyphens at either end are trimmed,
/// so the result may be empty. Apostrophes are separators like any other
/// punctuation: `"Fisherman's"` becomes `"fisherman-s"`, not `"fishermans"`.
///
/// ```
/// use storefront_core::slugify;
///
/// assert_eq!(slugify("  Hello, World!  "), "hello-world");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// assert_eq!(slugify("already-a-slug"), "already-a-slug");
/// ```
pub fn slugify(input: &str) -> String {
    let ascii = deunicode::deunicode_with_tofu(input, "");
    let lower = ascii.to_ascii_lowercase();
    let hyphenated = NON_ALNUM_RUN.replace_all(&lower, "-");
    hyphenated.trim_matches('-').to_string()
}

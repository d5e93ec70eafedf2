//! Converts free-text phrases into lowercase, ASCII-only, hyphen-separated
//! slugs suitable for file names and URLs.

use unicode_normalization::UnicodeNormalization;

/// Slugifies `text`. The input is decomposed (NFD) so that base letters are
/// separated from their combining marks, every non-ASCII character is then
/// dropped, the remainder is lowercased, and every non-alphanumeric character
/// becomes a hyphen. Runs of hyphens are collapsed and hyphens are trimmed
/// from both ends.
///
/// The result may be empty (e.g., for `"¿?"` or for non-Latin scripts). This
/// function never fails and never truncates; see [`truncate`].
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.nfd().filter(char::is_ascii) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_owned()
}

/// Returns the first `max` characters of `slug`. A slug cut this way may end
/// in a hyphen; it is kept as-is so that file names stay stable across runs.
pub fn truncate(slug: &str, max: usize) -> &str {
    match slug.char_indices().nth(max) {
        Some((end, _)) => &slug[..end],
        None => slug,
    }
}

//! Tag suggestion
//!
//! Matches free text against an admin-curated vocabulary. Used by the
//! intake form to propose project tags without calling out to a model.

/// Return the vocabulary labels relevant to `text`, in vocabulary order.
///
/// A label matches when the whole label, or any of its words at least
/// three characters long, occurs in the text. Comparison is
/// case-insensitive and works for Greek and Latin script alike.
pub fn suggest_tags(text: &str, vocabulary: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();

    vocabulary
        .iter()
        .filter(|label| {
            let needle = label.to_lowercase();
            let needle = needle.trim();
            if needle.is_empty() {
                return false;
            }
            if haystack.contains(needle) {
                return true;
            }
            needle
                .split_whitespace()
                .filter(|word| word.chars().count() >= 3)
                .any(|word| haystack.contains(word))
        })
        .cloned()
        .collect()
}

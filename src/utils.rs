//! Text normalization and slug helpers shared by records and the admin surface.

use crate::types::SlugText;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    text.as_ref().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive a URL-safe slug from a display title.
///
/// Lowercases, maps every run of non-alphanumeric characters to a single
/// hyphen, and strips leading/trailing hyphens. A title with no
/// alphanumeric characters yields an empty slug; callers pick a fallback.
pub fn slugify(title: &str) -> SlugText {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(
            normalize_inline_whitespace("  Mandarin   Speech \tCorpus \n"),
            "Mandarin Speech Corpus"
        );
        assert_eq!(normalize_inline_whitespace("   "), "");
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Mandarin Speech Corpus"), "mandarin-speech-corpus");
        assert_eq!(slugify("Why Data Quality Matters!"), "why-data-quality-matters");
        assert_eq!(slugify("  Far-field   Mic  "), "far-field-mic");
    }

    #[test]
    fn slugify_handles_degenerate_titles() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("C3-PO (droid)"), "c3-po-droid");
    }
}

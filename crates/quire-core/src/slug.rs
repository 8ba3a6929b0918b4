//! URL slug derivation from post titles.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Anything that isn't an ASCII letter becomes a word break.
static NON_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]").expect("static slug pattern"));

/// Derive a slug from a title.
///
/// Lowercases, turns every non-letter into a space, then joins the remaining
/// words with single hyphens. `"Hello, World! 2024"` becomes `"hello-world"`.
/// A title without any ASCII letters yields an empty slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let spaced = NON_LETTER_REGEX.replace_all(&lowered, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_digits_dropped() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world");
    }

    #[test]
    fn test_runs_of_non_letters_collapse() {
        assert_eq!(slugify("  --Rust -- & -- WASM--  "), "rust-wasm");
        assert_eq!(slugify("don't   panic"), "don-t-panic");
    }

    #[test]
    fn test_non_ascii_letters_break_words() {
        assert_eq!(slugify("Café Über"), "caf-ber");
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(slugify("2024 / 12"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slug_alphabet() {
        let titles = [
            "Hello, World! 2024",
            "Ten Tips for Writing Better Markdown",
            "Why I moved my blog to WASM (again)",
            "C++ vs. Rust: round 3",
            "A",
        ];
        let slugs: Vec<String> = titles.iter().map(|t| slugify(t)).collect();
        for slug in &slugs {
            assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
        insta::assert_yaml_snapshot!(slugs, @r"
        - hello-world
        - ten-tips-for-writing-better-markdown
        - why-i-moved-my-blog-to-wasm-again
        - c-vs-rust-round
        - a
        ");
    }
}

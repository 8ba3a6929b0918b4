//! Comma-separated tag handling.

/// Most tags a post can carry.
pub const MAX_TAGS: usize = 5;

/// Split typed tag text into trimmed, non-empty tags.
pub fn split_tags(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// The first `MAX_TAGS` tags, as submitted.
pub fn cap_tags(text: &str) -> Vec<String> {
    split_tags(text).take(MAX_TAGS).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_skips_empty() {
        let tags: Vec<_> = split_tags(" rust,  wasm ,, ,dioxus,").collect();
        assert_eq!(tags, ["rust", "wasm", "dioxus"]);
    }

    #[test]
    fn test_cap_keeps_first_five() {
        assert_eq!(
            cap_tags("one, two, three, four, five, six, seven"),
            ["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn test_cap_under_limit() {
        assert_eq!(cap_tags("solo"), ["solo"]);
        assert!(cap_tags(" , ").is_empty());
    }
}

//! Case-insensitive text search over list records

use std::borrow::Cow;

/// Record that can be matched against a search box
pub trait Searchable {
    /// Display-relevant text fields checked by the search box
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Whether any search field contains `needle`, ignoring case.
    ///
    /// A blank needle matches everything.
    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, i64);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.0), Cow::Owned(self.1.to_string())]
        }
    }

    #[test]
    fn test_matches_case_insensitive() {
        let row = Row("Pizza", 12);
        assert!(row.matches_search("PIZ"));
        assert!(row.matches_search("zza"));
        assert!(!row.matches_search("burger"));
    }

    #[test]
    fn test_matches_numeric_field() {
        assert!(Row("Soup", 42).matches_search("42"));
    }

    #[test]
    fn test_blank_needle_matches_all() {
        assert!(Row("Soup", 1).matches_search(""));
        assert!(Row("Soup", 1).matches_search("   "));
    }
}

use feruca::Collator;

/// Sorts in place by a string key using the Unicode Collation Algorithm with CLDR root
/// tailoring: accents and case are secondary/tertiary differences, punctuation follows
/// collation order instead of code points. Equal keys keep their relative order.
pub fn sort_by_locale<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    let mut collator = Collator::default();
    items.sort_by(|a, b| collator.collate(key(a), key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&'static str]) -> Vec<&'static str> {
        let mut words = words.to_vec();
        sort_by_locale(&mut words, |w| *w);
        words
    }

    #[test]
    fn test_matches_locale_compare_order() {
        let words = [
            "Zeta", "Web", "eta", "Data.Mining", "web", "Élan", "Data-Mining", "Data_Mining",
        ];

        assert_eq!(
            sorted(&words),
            vec![
                "Data_Mining",
                "Data-Mining",
                "Data.Mining",
                "Élan",
                "eta",
                "web",
                "Web",
                "Zeta",
            ]
        );
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["Zebra", "apple", "Banana"]), vec!["apple", "Banana", "Zebra"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sorted(&["Database", "Data", ""]), vec!["", "Data", "Database"]);
    }
}

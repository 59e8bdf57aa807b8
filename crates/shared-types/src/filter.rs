/// Case-insensitive substring match. An empty or blank query matches anything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Types that can be narrowed by a free-text search box.
pub trait Searchable {
    /// Display fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        matches_query(query, &self.search_fields())
    }
}

/// Items matching `query`, preserving order.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items.iter().filter(|i| i.matches(query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("   ", &[]));
    }

    #[test]
    fn match_ignores_case() {
        assert!(matches_query("SHARMA", &["Priya Sharma"]));
        assert!(matches_query("diab", &["P001", "Diabetes"]));
        assert!(!matches_query("asthma", &["Diabetes"]));
    }

    #[test]
    fn filter_keeps_order() {
        let rows = vec![Row("P001", "Rajesh"), Row("P002", "Priya"), Row("P003", "Raj")];
        let hits = filter_items(&rows, "raj");
        assert_eq!(hits, vec![Row("P001", "Rajesh"), Row("P003", "Raj")]);
    }
}

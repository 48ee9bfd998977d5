use crate::xtream::models::ContentItem;

/// Case-insensitive substring match on the item name. Nameless items never
/// match a non-empty query.
pub fn matches(item: &ContentItem, query_lower: &str) -> bool {
    item.name()
        .is_some_and(|name| name.to_lowercase().contains(query_lower))
}

/// Filters the loaded window; an empty query returns it unfiltered. Whitespace
/// in the query is matched literally.
pub fn filter<'a>(window: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return window.iter().collect();
    }
    window.iter().filter(|item| matches(item, &query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: u64, name: Option<&str>) -> ContentItem {
        ContentItem {
            id,
            name: name.map(str::to_string),
            icon: None,
            extension: None,
            category_id: None,
        }
    }

    #[test]
    fn test_news_query() {
        let window = vec![named(1, Some("CNN")), named(2, Some("BBC News"))];
        let hits = filter(&window, "news");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), Some("BBC News"));
    }

    #[test]
    fn test_empty_query_restores_window() {
        let window = vec![named(1, Some("CNN")), named(2, Some("BBC News"))];
        let all: Vec<u64> = filter(&window, "").iter().map(|i| i.id).collect();
        assert_eq!(all, vec![1, 2]);
    }

    #[test]
    fn test_whitespace_is_part_of_query() {
        let window = vec![named(1, Some("Newsmax")), named(2, Some("BBC News"))];
        let hits: Vec<u64> = filter(&window, " news").iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![2]);
        assert!(filter(&window, "   ").is_empty());
    }

    #[test]
    fn test_nameless_items_do_not_match() {
        let window = vec![named(1, None), named(2, Some("")), named(3, Some("Nature"))];
        let hits: Vec<u64> = filter(&window, "n").iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![3]);
        assert_eq!(filter(&window, "").len(), 3);
    }

    #[test]
    fn test_case_insensitive() {
        let window = vec![named(1, Some("Discovery HD"))];
        assert_eq!(filter(&window, "DISCO").len(), 1);
        assert_eq!(filter(&window, "hd").len(), 1);
    }
}

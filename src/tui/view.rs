//! Display cards built from the browsing window, independent of the terminal.

use crate::browse::{Browser, LoadState};
use crate::xtream::models::{ContentItem, Section};

pub const PLACEHOLDER_ICON: &str = "https://placehold.co/200x300/181818/FFF?text=?";
pub const UNTITLED: &str = "(untitled)";
pub const NO_ITEMS: &str = "No items found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: u64,
    pub label: String,
    pub icon_url: String,
    /// Shown when `icon_url` cannot be fetched.
    pub fallback_icon: String,
    pub favorite: bool,
}

impl ItemCard {
    pub fn new(item: &ContentItem, favorite: bool) -> Self {
        let label = item.name().unwrap_or(UNTITLED).to_string();
        Self {
            id: item.id,
            icon_url: item
                .icon
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(PLACEHOLDER_ICON)
                .to_string(),
            fallback_icon: item.name().map(fallback_icon).unwrap_or_else(|| PLACEHOLDER_ICON.to_string()),
            label,
            favorite,
        }
    }
}

/// Placeholder lettered with the first character of `name`.
pub fn fallback_icon(name: &str) -> String {
    let first: String = name.chars().take(1).collect();
    if first.is_empty() {
        return PLACEHOLDER_ICON.to_string();
    }
    format!(
        "https://placehold.co/200x300/181818/FFF?text={}",
        urlencoding::encode(&first)
    )
}

pub fn cards(browser: &Browser) -> Vec<ItemCard> {
    let Some(section) = browser.section() else {
        return Vec::new();
    };
    browser
        .visible()
        .into_iter()
        .map(|item| ItemCard::new(item, browser.is_favorite(section, item.id)))
        .collect()
}

/// Message replacing the list, if any.
pub fn empty_message(browser: &Browser, visible: usize) -> Option<&str> {
    match browser.load_state() {
        LoadState::Failed(msg) => Some(msg.as_str()),
        LoadState::Ready if visible == 0 => Some(NO_ITEMS),
        _ => None,
    }
}

/// One-line description of an item for the detail bar.
pub fn detail_line(section: Section, card: &ItemCard) -> String {
    let star = if card.favorite { "★ " } else { "" };
    format!("{star}{} · {} #{} · {}", card.label, section.label(), card.id, card.icon_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: Option<&str>, icon: Option<&str>) -> ContentItem {
        ContentItem {
            id,
            name: name.map(str::to_string),
            icon: icon.map(str::to_string),
            extension: None,
            category_id: None,
        }
    }

    #[test]
    fn test_card_placeholder_icon() {
        let card = ItemCard::new(&item(1, Some("CNN"), None), false);
        assert_eq!(card.icon_url, PLACEHOLDER_ICON);
        assert_eq!(card.fallback_icon, "https://placehold.co/200x300/181818/FFF?text=C");

        let card = ItemCard::new(&item(1, Some("CNN"), Some("")), false);
        assert_eq!(card.icon_url, PLACEHOLDER_ICON);
    }

    #[test]
    fn test_card_keeps_icon() {
        let card = ItemCard::new(&item(2, Some("BBC"), Some("http://i/bbc.png")), true);
        assert_eq!(card.icon_url, "http://i/bbc.png");
        assert!(card.favorite);
    }

    #[test]
    fn test_nameless_item_is_untitled() {
        let card = ItemCard::new(&item(3, None, None), false);
        assert_eq!(card.label, UNTITLED);
        assert_eq!(card.fallback_icon, PLACEHOLDER_ICON);
    }

    #[test]
    fn test_login_to_first_render() {
        use crate::browse::{Fetched, Progress};
        use crate::favorites::FavoritesIndex;
        use crate::session::Credentials;
        use crate::storage::Storage;
        use crate::xtream::api::{extract_categories, extract_items};
        use serde_json::json;
        use std::rc::Rc;

        let creds = Credentials::new("http://srv:80", "u", "p");
        let store = Rc::new(Storage::open_in_memory().unwrap());
        let mut browser = Browser::new(FavoritesIndex::load(store));

        let cats = browser.start(Section::Live);
        let categories = extract_categories(json!([{"category_id": "1", "category_name": "News"}]));
        let Progress::Next(all) = browser.complete(cats.ticket, Ok(Fetched::Categories(categories))) else {
            panic!("expected items fetch");
        };
        assert_eq!(all.kind, crate::browse::FetchKind::Items { category_id: None });

        let items = extract_items(json!([{"stream_id": 42, "name": "CNN", "category_id": "1"}]), Section::Live);
        assert_eq!(browser.complete(all.ticket, Ok(Fetched::Items(items))), Progress::Done);

        let cards = cards(&browser);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].label, "CNN");
        assert_eq!(cards[0].icon_url, PLACEHOLDER_ICON);
        assert_eq!(empty_message(&browser, cards.len()), None);

        let item = browser.selected_item().unwrap();
        assert_eq!(
            crate::xtream::urls::stream_url(&creds, Section::Live, item).as_deref(),
            Some("http://srv:80/live/u/p/42.m3u8")
        );
    }

    #[test]
    fn test_empty_and_failed_messages() {
        use crate::browse::Fetched;
        use crate::favorites::FavoritesIndex;
        use crate::storage::Storage;
        use std::rc::Rc;

        let store = Rc::new(Storage::open_in_memory().unwrap());
        let mut browser = Browser::new(FavoritesIndex::load(store));
        let cats = browser.start(Section::Movie);
        assert_eq!(empty_message(&browser, 0), None);

        browser.complete(cats.ticket, Err(anyhow::anyhow!("timeout")));
        assert_eq!(empty_message(&browser, 0), Some(crate::browse::LOAD_FAILED));

        let cats = browser.start(Section::Movie);
        let crate::browse::Progress::Next(all) = browser.complete(cats.ticket, Ok(Fetched::Categories(vec![]))) else {
            panic!("expected items fetch");
        };
        browser.complete(all.ticket, Ok(Fetched::Items(vec![])));
        assert_eq!(empty_message(&browser, 0), Some(NO_ITEMS));
    }

    #[test]
    fn test_fallback_icon_encodes() {
        assert_eq!(fallback_icon("#1 Hits"), "https://placehold.co/200x300/181818/FFF?text=%23");
        assert_eq!(fallback_icon("Ñu"), "https://placehold.co/200x300/181818/FFF?text=%C3%91");
        assert_eq!(fallback_icon(""), PLACEHOLDER_ICON);
    }
}

//! Browsing controller: active section, category, loaded window and search.
//!
//! The controller does no I/O. Operations that need data return a [`Fetch`]
//! command; the caller runs it (see [`execute`]) and hands the result back to
//! [`Browser::complete`]. Each command carries a ticket, and only the latest
//! ticket of each kind is accepted, so a slow response can never overwrite a
//! newer window.

pub mod debounce;
pub mod filter;

use crate::favorites::FavoritesIndex;
use crate::xtream::Catalog;
use crate::xtream::models::{Category, ContentItem, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryKey {
    All,
    Favorites,
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Categories,
    /// `None` lists the whole section.
    Items { category_id: Option<String> },
    /// Whole section, narrowed to favorite ids on completion.
    Favorites,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub ticket: u64,
    pub section: Section,
    pub kind: FetchKind,
}

#[derive(Debug, Clone)]
pub enum Fetched {
    Categories(Vec<Category>),
    Items(Vec<ContentItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Next(Fetch),
    Done,
    /// `fatal` is set while the first load after login is still running.
    Failed { message: String, fatal: bool },
    Stale,
}

pub const LOAD_FAILED: &str = "Failed to load content.";

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: u64,
    favorites: bool,
}

pub struct Browser {
    favorites: FavoritesIndex,
    section: Option<Section>,
    categories: Vec<Category>,
    category: CategoryKey,
    window: Vec<ContentItem>,
    query: String,
    load: LoadState,
    next_ticket: u64,
    pending_categories: Option<u64>,
    pending_items: Option<Pending>,
    /// Items for "all" follow once the category list arrives.
    items_after_categories: bool,
    bootstrapping: bool,
    category_cursor: usize,
    item_cursor: usize,
}

impl Browser {
    pub fn new(favorites: FavoritesIndex) -> Self {
        Self {
            favorites,
            section: None,
            categories: Vec::new(),
            category: CategoryKey::All,
            window: Vec::new(),
            query: String::new(),
            load: LoadState::Idle,
            next_ticket: 0,
            pending_categories: None,
            pending_items: None,
            items_after_categories: false,
            bootstrapping: false,
            category_cursor: 0,
            item_cursor: 0,
        }
    }

    /// First load after login. Failures until that load settles are reported
    /// as fatal.
    pub fn start(&mut self, section: Section) -> Fetch {
        self.section = None;
        self.bootstrapping = true;
        self.switch_section(section)
    }

    /// Drops everything except the favorites index (logout).
    pub fn reset(&mut self) {
        self.section = None;
        self.categories.clear();
        self.category = CategoryKey::All;
        self.window.clear();
        self.query.clear();
        self.load = LoadState::Idle;
        self.pending_categories = None;
        self.pending_items = None;
        self.items_after_categories = false;
        self.bootstrapping = false;
        self.category_cursor = 0;
        self.item_cursor = 0;
    }

    pub fn select_section(&mut self, section: Section) -> Option<Fetch> {
        if self.section == Some(section) {
            return None;
        }
        Some(self.switch_section(section))
    }

    fn switch_section(&mut self, section: Section) -> Fetch {
        tracing::debug!(section = section.as_str(), "switch section");
        self.section = Some(section);
        self.categories.clear();
        self.category = CategoryKey::All;
        self.window.clear();
        self.query.clear();
        self.category_cursor = 0;
        self.item_cursor = 0;
        self.load = LoadState::Loading;
        self.pending_items = None;
        self.items_after_categories = true;

        let fetch = self.issue(section, FetchKind::Categories);
        self.pending_categories = Some(fetch.ticket);
        fetch
    }

    pub fn select_category(&mut self, key: CategoryKey) -> Option<Fetch> {
        let section = self.section?;
        self.query.clear();
        self.window.clear();
        self.item_cursor = 0;
        self.items_after_categories = false;
        self.category = key.clone();
        if let Some(pos) = self.category_keys().iter().position(|k| *k == key) {
            self.category_cursor = pos;
        }

        let (kind, favorites) = match key {
            CategoryKey::Favorites if self.favorites.is_empty(section) => {
                self.pending_items = None;
                self.load = LoadState::Ready;
                self.settle_bootstrap();
                return None;
            }
            CategoryKey::Favorites => (FetchKind::Favorites, true),
            CategoryKey::All => (FetchKind::Items { category_id: None }, false),
            CategoryKey::Id(id) => (FetchKind::Items { category_id: Some(id) }, false),
        };

        self.load = LoadState::Loading;
        let fetch = self.issue(section, kind);
        self.pending_items = Some(Pending {
            ticket: fetch.ticket,
            favorites,
        });
        Some(fetch)
    }

    /// Filters the loaded window in memory. An empty query restores it.
    pub fn search(&mut self, text: &str) {
        self.query = text.to_string();
        self.item_cursor = 0;
    }

    pub fn complete(&mut self, ticket: u64, result: anyhow::Result<Fetched>) -> Progress {
        let Some(section) = self.section else {
            return Progress::Stale;
        };

        if self.pending_categories == Some(ticket) {
            self.pending_categories = None;
            return match result {
                Ok(Fetched::Categories(categories)) => {
                    tracing::debug!(section = section.as_str(), count = categories.len(), "categories loaded");
                    self.categories = categories;
                    if !self.items_after_categories {
                        self.settle_bootstrap();
                        return Progress::Done;
                    }
                    self.items_after_categories = false;
                    let fetch = self.issue(section, FetchKind::Items { category_id: None });
                    self.pending_items = Some(Pending {
                        ticket: fetch.ticket,
                        favorites: false,
                    });
                    Progress::Next(fetch)
                }
                Ok(Fetched::Items(_)) => Progress::Stale,
                Err(e) if !self.items_after_categories => {
                    // The user already picked a category; its window stays.
                    tracing::error!("category list failed: {e:#}");
                    Progress::Failed {
                        message: LOAD_FAILED.to_string(),
                        fatal: self.bootstrapping,
                    }
                }
                Err(e) => {
                    self.items_after_categories = false;
                    self.fail(e)
                }
            };
        }

        match self.pending_items {
            Some(pending) if pending.ticket == ticket => {
                self.pending_items = None;
                match result {
                    Ok(Fetched::Items(mut items)) => {
                        if pending.favorites {
                            let ids = self.favorites.ids(section);
                            items.retain(|item| ids.contains(&item.id));
                        }
                        tracing::debug!(section = section.as_str(), count = items.len(), "window loaded");
                        self.window = items;
                        self.load = LoadState::Ready;
                        self.bootstrapping = false;
                        self.clamp_item_cursor();
                        Progress::Done
                    }
                    Ok(Fetched::Categories(_)) => Progress::Stale,
                    Err(e) => self.fail(e),
                }
            }
            _ => {
                tracing::debug!(ticket, "dropping stale fetch result");
                Progress::Stale
            }
        }
    }

    fn fail(&mut self, e: anyhow::Error) -> Progress {
        tracing::error!("load failed: {e:#}");
        self.window.clear();
        self.item_cursor = 0;
        self.load = LoadState::Failed(LOAD_FAILED.to_string());
        Progress::Failed {
            message: LOAD_FAILED.to_string(),
            fatal: self.bootstrapping,
        }
    }

    /// The first load is over once nothing it issued is still in flight.
    fn settle_bootstrap(&mut self) {
        if self.pending_categories.is_none() && self.pending_items.is_none() {
            self.bootstrapping = false;
        }
    }

    fn issue(&mut self, section: Section, kind: FetchKind) -> Fetch {
        self.next_ticket += 1;
        Fetch {
            ticket: self.next_ticket,
            section,
            kind,
        }
    }

    /// Flips a favorite. While the favorites view of that section is shown, a
    /// removed item leaves the window at once.
    pub fn toggle_favorite(&mut self, section: Section, id: u64) -> anyhow::Result<bool> {
        let now = self.favorites.toggle(section, id)?;
        if !now && self.section == Some(section) && self.category == CategoryKey::Favorites {
            self.window.retain(|item| item.id != id);
            self.clamp_item_cursor();
        }
        Ok(now)
    }

    pub fn is_favorite(&self, section: Section, id: u64) -> bool {
        self.favorites.is_favorite(section, id)
    }

    pub fn favorites(&self) -> &FavoritesIndex {
        &self.favorites
    }

    pub fn section(&self) -> Option<Section> {
        self.section
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    /// The highlighted category, or `None` while a search is active.
    pub fn active_category(&self) -> Option<&CategoryKey> {
        if self.query.is_empty() {
            Some(&self.category)
        } else {
            None
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn window(&self) -> &[ContentItem] {
        &self.window
    }

    pub fn visible(&self) -> Vec<&ContentItem> {
        filter::filter(&self.window, &self.query)
    }

    /// Sidebar entries: the two synthetic categories, then the backend ones.
    pub fn category_keys(&self) -> Vec<CategoryKey> {
        let mut keys = vec![CategoryKey::All, CategoryKey::Favorites];
        keys.extend(self.categories.iter().map(|c| CategoryKey::Id(c.id.clone())));
        keys
    }

    pub fn category_label(&self, key: &CategoryKey) -> String {
        match key {
            CategoryKey::All => "All".to_string(),
            CategoryKey::Favorites => "Favorites".to_string(),
            CategoryKey::Id(id) => self
                .categories
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.clone()),
        }
    }

    pub fn category_cursor(&self) -> usize {
        self.category_cursor
    }

    pub fn item_cursor(&self) -> usize {
        self.item_cursor
    }

    pub fn move_category_cursor(&mut self, delta: isize) {
        let len = self.categories.len() + 2;
        self.category_cursor = step(self.category_cursor, delta, len);
    }

    pub fn move_item_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        self.item_cursor = step(self.item_cursor, delta, len);
    }

    pub fn cursor_category(&self) -> Option<CategoryKey> {
        self.category_keys().get(self.category_cursor).cloned()
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.visible().get(self.item_cursor).copied()
    }

    fn clamp_item_cursor(&mut self) {
        let len = self.visible().len();
        self.item_cursor = self.item_cursor.min(len.saturating_sub(1));
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        (current + delta as usize).min(max)
    }
}

/// Runs one fetch command against the catalog.
pub async fn execute<C: Catalog + Sync>(catalog: &C, fetch: &Fetch) -> anyhow::Result<Fetched> {
    match &fetch.kind {
        FetchKind::Categories => catalog
            .list_categories(fetch.section)
            .await
            .map(Fetched::Categories),
        FetchKind::Items { category_id } => catalog
            .list_items(fetch.section, category_id.as_deref())
            .await
            .map(Fetched::Items),
        FetchKind::Favorites => catalog
            .list_items(fetch.section, None)
            .await
            .map(Fetched::Items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(id: u64, name: &str, category: &str) -> ContentItem {
        ContentItem {
            id,
            name: Some(name.to_string()),
            icon: None,
            extension: None,
            category_id: Some(category.to_string()),
        }
    }

    #[derive(Default)]
    struct FakeCatalog {
        categories: HashMap<Section, Vec<Category>>,
        items: HashMap<Section, Vec<ContentItem>>,
        calls: AtomicUsize,
        log: Mutex<Vec<(Section, Option<String>)>>,
        fail: bool,
    }

    impl FakeCatalog {
        fn sample() -> Self {
            let mut c = Self::default();
            c.categories.insert(
                Section::Live,
                vec![
                    Category { id: "1".into(), name: "News".into() },
                    Category { id: "2".into(), name: "Sports".into() },
                ],
            );
            c.items.insert(
                Section::Live,
                vec![item(10, "CNN", "1"), item(11, "BBC News", "1"), item(20, "ESPN", "2")],
            );
            c.items.insert(Section::Movie, vec![item(10, "Heat", "7")]);
            c
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Catalog for FakeCatalog {
        async fn list_categories(&self, section: Section) -> anyhow::Result<Vec<Category>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.categories.get(&section).cloned().unwrap_or_default())
        }

        async fn list_items(&self, section: Section, category_id: Option<&str>) -> anyhow::Result<Vec<ContentItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.log
                .lock()
                .unwrap()
                .push((section, category_id.map(str::to_string)));
            if self.fail {
                anyhow::bail!("connection refused");
            }
            let all = self.items.get(&section).cloned().unwrap_or_default();
            Ok(match category_id {
                Some(id) => all
                    .into_iter()
                    .filter(|i| i.category_id.as_deref() == Some(id))
                    .collect(),
                None => all,
            })
        }
    }

    fn browser() -> Browser {
        let store = Rc::new(Storage::open_in_memory().unwrap());
        Browser::new(FavoritesIndex::load(store))
    }

    /// Runs a command chain to the end.
    async fn drive(b: &mut Browser, catalog: &FakeCatalog, first: Option<Fetch>) -> Progress {
        let mut next = first;
        let mut last = Progress::Done;
        while let Some(fetch) = next.take() {
            let result = execute(catalog, &fetch).await;
            last = b.complete(fetch.ticket, result);
            if let Progress::Next(f) = &last {
                next = Some(f.clone());
            }
        }
        last
    }

    fn ids(b: &Browser) -> Vec<u64> {
        b.visible().iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn test_start_loads_categories_then_all() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        assert_eq!(first.kind, FetchKind::Categories);

        assert_eq!(drive(&mut b, &catalog, Some(first)).await, Progress::Done);
        assert_eq!(b.categories().len(), 2);
        assert_eq!(ids(&b), vec![10, 11, 20]);
        assert_eq!(catalog.log.lock().unwrap().as_slice(), &[(Section::Live, None)]);
        assert_eq!(b.load_state(), &LoadState::Ready);
    }

    #[tokio::test]
    async fn test_all_is_superset_of_each_category() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        let all = ids(&b);

        for cat in ["1", "2"] {
            let f = b.select_category(CategoryKey::Id(cat.into()));
            drive(&mut b, &catalog, f).await;
            assert!(!b.window().is_empty());
            for id in ids(&b) {
                assert!(all.contains(&id));
            }
        }
    }

    #[tokio::test]
    async fn test_category_all_omits_filter() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;

        let f = b.select_category(CategoryKey::Id("2".into()));
        drive(&mut b, &catalog, f).await;
        let f = b.select_category(CategoryKey::All);
        drive(&mut b, &catalog, f).await;

        let log = catalog.log.lock().unwrap().clone();
        assert_eq!(log.last(), Some(&(Section::Live, None)));
        assert_eq!(log[1], (Section::Live, Some("2".to_string())));
    }

    #[tokio::test]
    async fn test_empty_favorites_makes_no_call() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        let before = catalog.calls();

        let f = b.select_category(CategoryKey::Favorites);
        assert!(f.is_none());
        assert!(b.visible().is_empty());
        assert_eq!(catalog.calls(), before);
        assert_eq!(b.load_state(), &LoadState::Ready);
    }

    #[tokio::test]
    async fn test_favorites_resolution_filters_full_list() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        b.toggle_favorite(Section::Live, 20).unwrap();
        b.toggle_favorite(Section::Movie, 10).unwrap();

        let f = b.select_category(CategoryKey::Favorites).unwrap();
        assert_eq!(f.kind, FetchKind::Favorites);
        drive(&mut b, &catalog, Some(f)).await;
        assert_eq!(ids(&b), vec![20]);
        assert_eq!(catalog.log.lock().unwrap().last(), Some(&(Section::Live, None)));

        // Un-favoriting while viewing favorites drops the item right away.
        assert!(!b.toggle_favorite(Section::Live, 20).unwrap());
        assert!(b.visible().is_empty());
    }

    #[tokio::test]
    async fn test_section_switch_clears_window_before_fetch() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        assert!(!b.window().is_empty());

        let f = b.select_section(Section::Movie).unwrap();
        assert!(b.window().is_empty());
        assert!(b.visible().is_empty());
        assert!(b.categories().is_empty());
        assert_eq!(b.category(), &CategoryKey::All);
        assert_eq!(b.load_state(), &LoadState::Loading);

        drive(&mut b, &catalog, Some(f)).await;
        assert_eq!(ids(&b), vec![10]);
    }

    #[test]
    fn test_same_section_is_noop() {
        let mut b = browser();
        b.start(Section::Live);
        assert!(b.select_section(Section::Live).is_none());
        assert!(b.select_section(Section::Series).is_some());
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;

        let older = b.select_category(CategoryKey::Id("1".into())).unwrap();
        let newer = b.select_category(CategoryKey::Id("2".into())).unwrap();

        let newer_result = execute(&catalog, &newer).await;
        assert_eq!(b.complete(newer.ticket, newer_result), Progress::Done);
        let older_result = execute(&catalog, &older).await;
        assert_eq!(b.complete(older.ticket, older_result), Progress::Stale);
        assert_eq!(ids(&b), vec![20]);
    }

    #[tokio::test]
    async fn test_category_chosen_before_categories_arrive() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let cats = b.start(Section::Live);
        let pick = b.select_category(CategoryKey::Id("2".into())).unwrap();

        let r = execute(&catalog, &pick).await;
        assert_eq!(b.complete(pick.ticket, r), Progress::Done);
        let r = execute(&catalog, &cats).await;
        // Categories still land, but no "all" fetch follows.
        assert_eq!(b.complete(cats.ticket, r), Progress::Done);
        assert_eq!(b.categories().len(), 2);
        assert_eq!(ids(&b), vec![20]);
    }

    #[tokio::test]
    async fn test_search_filters_window_only() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        let calls = catalog.calls();

        b.search("news");
        assert_eq!(ids(&b), vec![11]);
        assert!(b.active_category().is_none());

        b.search("");
        assert_eq!(ids(&b), vec![10, 11, 20]);
        assert_eq!(b.active_category(), Some(&CategoryKey::All));
        assert_eq!(catalog.calls(), calls);
    }

    #[tokio::test]
    async fn test_category_switch_clears_search() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;
        b.search("espn");
        let f = b.select_category(CategoryKey::Id("1".into()));
        assert_eq!(b.query(), "");
        drive(&mut b, &catalog, f).await;
        assert_eq!(ids(&b), vec![10, 11]);
    }

    #[tokio::test]
    async fn test_initial_failure_is_fatal_later_is_not() {
        let failing = FakeCatalog {
            fail: true,
            ..FakeCatalog::sample()
        };
        let mut b = browser();
        let first = b.start(Section::Live);
        let p = drive(&mut b, &failing, Some(first)).await;
        assert_eq!(
            p,
            Progress::Failed {
                message: LOAD_FAILED.to_string(),
                fatal: true
            }
        );

        let ok = FakeCatalog::sample();
        let first = b.start(Section::Live);
        drive(&mut b, &ok, Some(first)).await;

        let f = b.select_category(CategoryKey::Id("1".into()));
        let p = drive(&mut b, &failing, f).await;
        assert_eq!(
            p,
            Progress::Failed {
                message: LOAD_FAILED.to_string(),
                fatal: false
            }
        );
        assert!(b.window().is_empty());
        assert_eq!(b.load_state(), &LoadState::Failed(LOAD_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_empty_favorites_during_first_load_ends_it() {
        let catalog = FakeCatalog::sample();
        let failing = FakeCatalog {
            fail: true,
            ..FakeCatalog::sample()
        };
        let mut b = browser();
        let first = b.start(Section::Live);

        assert!(b.select_category(CategoryKey::Favorites).is_none());
        let result = execute(&catalog, &first).await;
        assert_eq!(b.complete(first.ticket, result), Progress::Done);
        assert_eq!(b.categories().len(), 2);

        let f = b.select_category(CategoryKey::Id("1".into()));
        let p = drive(&mut b, &failing, f).await;
        assert_eq!(
            p,
            Progress::Failed {
                message: LOAD_FAILED.to_string(),
                fatal: false
            }
        );
    }

    #[tokio::test]
    async fn test_category_picked_during_first_load_keeps_it_fatal() {
        let catalog = FakeCatalog::sample();
        let failing = FakeCatalog {
            fail: true,
            ..FakeCatalog::sample()
        };
        let mut b = browser();
        let first = b.start(Section::Live);
        let picked = b.select_category(CategoryKey::Id("2".into())).unwrap();

        let result = execute(&catalog, &first).await;
        assert_eq!(b.complete(first.ticket, result), Progress::Done);

        // The picked category is still in flight, so the first load is too.
        let result = execute(&failing, &picked).await;
        assert_eq!(
            b.complete(picked.ticket, result),
            Progress::Failed {
                message: LOAD_FAILED.to_string(),
                fatal: true
            }
        );
    }

    #[tokio::test]
    async fn test_cursor_clamps_to_visible() {
        let catalog = FakeCatalog::sample();
        let mut b = browser();
        let first = b.start(Section::Live);
        drive(&mut b, &catalog, Some(first)).await;

        b.move_item_cursor(10);
        assert_eq!(b.item_cursor(), 2);
        assert_eq!(b.selected_item().map(|i| i.id), Some(20));
        b.move_item_cursor(-5);
        assert_eq!(b.item_cursor(), 0);

        b.move_category_cursor(1);
        assert_eq!(b.cursor_category(), Some(CategoryKey::Favorites));
        b.move_category_cursor(100);
        assert_eq!(b.cursor_category(), Some(CategoryKey::Id("2".into())));
    }

    #[test]
    fn test_reset_keeps_favorites() {
        let mut b = browser();
        b.start(Section::Live);
        b.toggle_favorite(Section::Live, 3).unwrap();
        b.reset();
        assert!(b.section().is_none());
        assert!(b.is_favorite(Section::Live, 3));
    }
}

use crate::storage::{DocumentStore, FAVORITES_KEY};
use crate::xtream::models::Section;
use anyhow::Context;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Per-section favorite ids, mirrored to the document store on every change.
pub struct FavoritesIndex {
    ids: BTreeMap<Section, Vec<u64>>,
    store: Rc<dyn DocumentStore>,
}

impl FavoritesIndex {
    /// Reads the favorites document once. A missing or unreadable document
    /// starts an empty index.
    pub fn load(store: Rc<dyn DocumentStore>) -> Self {
        let ids = match store.get_document(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_document(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable favorites: {e:#}");
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("favorites not loaded: {e:#}");
                BTreeMap::new()
            }
        };
        Self { ids, store }
    }

    pub fn is_favorite(&self, section: Section, id: u64) -> bool {
        self.ids.get(&section).is_some_and(|ids| ids.contains(&id))
    }

    pub fn ids(&self, section: Section) -> &[u64] {
        self.ids.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, section: Section) -> bool {
        self.ids(section).is_empty()
    }

    /// Flips membership and rewrites the whole document before returning the
    /// new state. On a write failure the in-memory change is rolled back.
    pub fn toggle(&mut self, section: Section, id: u64) -> anyhow::Result<bool> {
        let list = self.ids.entry(section).or_default();
        let now_favorite = match list.iter().position(|&x| x == id) {
            Some(pos) => {
                list.remove(pos);
                false
            }
            None => {
                list.push(id);
                true
            }
        };

        if let Err(e) = self.persist() {
            let list = self.ids.entry(section).or_default();
            if now_favorite {
                list.retain(|&x| x != id);
            } else {
                list.push(id);
            }
            return Err(e);
        }

        tracing::debug!(section = section.as_str(), id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    fn persist(&self) -> anyhow::Result<()> {
        let doc: BTreeMap<&str, &Vec<u64>> = self
            .ids
            .iter()
            .map(|(section, ids)| (section.as_str(), ids))
            .collect();
        let raw = serde_json::to_string(&doc).context("encode favorites")?;
        self.store.put_document(FAVORITES_KEY, &raw)
    }
}

/// `{"live":[1,2],"movie":[7]}`. Unknown keys are skipped and duplicate ids
/// collapse to their first occurrence.
fn parse_document(raw: &str) -> anyhow::Result<BTreeMap<Section, Vec<u64>>> {
    let doc: BTreeMap<String, Vec<u64>> =
        serde_json::from_str(raw).context("parse favorites document")?;
    let mut out = BTreeMap::new();
    for (key, ids) in doc {
        let Ok(section) = key.parse::<Section>() else {
            continue;
        };
        let mut unique: Vec<u64> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        out.insert(section, unique);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn index() -> (FavoritesIndex, Rc<Storage>) {
        let store = Rc::new(Storage::open_in_memory().unwrap());
        (FavoritesIndex::load(store.clone()), store)
    }

    #[test]
    fn test_toggle_parity() {
        let (mut fav, _) = index();
        for n in 1..=6 {
            let now = fav.toggle(Section::Movie, 5).unwrap();
            assert_eq!(now, n % 2 == 1);
            assert_eq!(fav.is_favorite(Section::Movie, 5), n % 2 == 1);
        }
        assert!(!fav.is_favorite(Section::Movie, 5));
    }

    #[test]
    fn test_sections_are_independent() {
        let (mut fav, _) = index();
        fav.toggle(Section::Movie, 5).unwrap();
        assert!(fav.is_favorite(Section::Movie, 5));
        assert!(!fav.is_favorite(Section::Live, 5));
        assert!(!fav.is_favorite(Section::Series, 5));
    }

    #[test]
    fn test_toggle_persists_whole_document() {
        let (mut fav, store) = index();
        fav.toggle(Section::Live, 1).unwrap();
        fav.toggle(Section::Live, 2).unwrap();
        fav.toggle(Section::Movie, 7).unwrap();

        let raw = store.get_document(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"live":[1,2],"movie":[7]}"#);

        let reloaded = FavoritesIndex::load(store);
        assert_eq!(reloaded.ids(Section::Live), &[1, 2]);
        assert!(reloaded.is_favorite(Section::Movie, 7));
    }

    #[test]
    fn test_order_is_insertion_order() {
        let (mut fav, _) = index();
        fav.toggle(Section::Live, 9).unwrap();
        fav.toggle(Section::Live, 3).unwrap();
        fav.toggle(Section::Live, 9).unwrap();
        fav.toggle(Section::Live, 9).unwrap();
        assert_eq!(fav.ids(Section::Live), &[3, 9]);
    }

    #[test]
    fn test_corrupt_document_starts_empty() {
        let store = Rc::new(Storage::open_in_memory().unwrap());
        store.put_document(FAVORITES_KEY, "not json").unwrap();
        let fav = FavoritesIndex::load(store);
        assert!(fav.is_empty(Section::Live));
    }

    #[test]
    fn test_parse_skips_unknown_and_duplicates() {
        let parsed = parse_document(r#"{"live":[1,1,2],"radio":[3]}"#).unwrap();
        assert_eq!(parsed.get(&Section::Live).unwrap(), &vec![1, 2]);
        assert_eq!(parsed.len(), 1);
    }
}

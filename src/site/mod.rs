//! In-memory page collection the post pipeline runs against.
//!
//! The host generator loads its pages into a [`Site`], runs
//! [`Posts::execute`](crate::posts::Posts::execute) once per build, then
//! renders whatever the site holds afterwards. Named collections hold the
//! published lists (e.g. `posts`) as ordered page ids.

mod page;

pub use page::{Page, PageDate, PageId};

use std::collections::BTreeMap;

/// Ordered page collection with named published lists.
#[derive(Debug, Default)]
pub struct Site {
    /// Keyed by id; ids grow monotonically, so iteration follows insertion.
    pages: BTreeMap<PageId, Page>,
    next_id: u64,
    collections: BTreeMap<String, Vec<PageId>>,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, returning its id.
    pub fn push(&mut self, page: Page) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        self.pages.insert(id, page);
        id
    }

    /// Add several pages in order.
    pub fn extend(&mut self, pages: impl IntoIterator<Item = Page>) -> Vec<PageId> {
        pages.into_iter().map(|page| self.push(page)).collect()
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.get_mut(&id)
    }

    /// Remove a page. Published lists keep no dangling ids.
    pub fn remove(&mut self, id: PageId) -> Option<Page> {
        let page = self.pages.remove(&id)?;
        for ids in self.collections.values_mut() {
            ids.retain(|other| *other != id);
        }
        Some(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = (PageId, &Page)> {
        self.pages.iter().map(|(id, page)| (*id, page))
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = (PageId, &mut Page)> {
        self.pages.iter_mut().map(|(id, page)| (*id, page))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Publish an ordered list under `name`, replacing any previous one.
    pub fn publish(&mut self, name: &str, ids: Vec<PageId>) {
        self.collections.insert(name.to_owned(), ids);
    }

    /// Ids of a published list.
    pub fn collection(&self, name: &str) -> Option<&[PageId]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Pages of a published list, in published order.
    pub fn published(&self, name: &str) -> impl Iterator<Item = &Page> {
        self.collection(name)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.pages.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut site = Site::new();
        let a = site.push(Page::new("/a.html"));
        let b = site.push(Page::new("/b.html"));

        assert_ne!(a, b);
        assert_eq!(site.len(), 2);
        assert_eq!(site.page(a).unwrap().source, "/a.html");
        assert_eq!(site.page(b).unwrap().source, "/b.html");
    }

    #[test]
    fn test_iteration_follows_insertion() {
        let mut site = Site::new();
        site.extend(["/c", "/a", "/b"].map(Page::new));

        let sources: Vec<_> = site.pages().map(|(_, p)| p.source.as_str()).collect();
        assert_eq!(sources, ["/c", "/a", "/b"]);
    }

    #[test]
    fn test_remove_keeps_other_ids() {
        let mut site = Site::new();
        let a = site.push(Page::new("/a"));
        let b = site.push(Page::new("/b"));
        let c = site.push(Page::new("/c"));

        assert!(site.remove(b).is_some());
        assert!(site.remove(b).is_none());
        assert_eq!(site.page(a).unwrap().source, "/a");
        assert_eq!(site.page(c).unwrap().source, "/c");

        // Fresh ids are never reused
        let d = site.push(Page::new("/d"));
        assert_ne!(d, b);
    }

    #[test]
    fn test_publish_and_read_back() {
        let mut site = Site::new();
        let a = site.push(Page::new("/a"));
        let b = site.push(Page::new("/b"));

        site.publish("posts", vec![b, a]);
        assert_eq!(site.collection("posts"), Some(&[b, a][..]));

        let sources: Vec<_> = site.published("posts").map(|p| p.source.as_str()).collect();
        assert_eq!(sources, ["/b", "/a"]);

        assert!(site.collection("missing").is_none());
        assert_eq!(site.published("missing").count(), 0);
    }

    #[test]
    fn test_remove_prunes_collections() {
        let mut site = Site::new();
        let a = site.push(Page::new("/a"));
        let b = site.push(Page::new("/b"));
        site.publish("posts", vec![a, b]);

        site.remove(a);
        assert_eq!(site.collection("posts"), Some(&[b][..]));
    }
}

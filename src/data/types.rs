//! Serialized shapes of published posts.

use serde::Serialize;

use crate::site::{Page, PageId, Site};

/// One post, as exposed in the published list export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    /// Post URL path (e.g., "/news/2012/03/04/hello/")
    pub url: String,

    /// Source path the post was read from
    pub source: String,

    pub slug: String,

    /// Publication date as RFC 3339 string
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// URL of the next newer post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// URL of the next older post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl PostData {
    /// Snapshot a classified post. Pages without slug, date or output path
    /// are not posts and yield `None`.
    pub fn from_page(site: &Site, page: &Page) -> Option<Self> {
        Some(Self {
            url: url_of(page)?,
            source: page.source.clone(),
            slug: page.slug.clone()?,
            date: page.resolved_date()?.to_rfc3339(),
            summary: page.summary.clone(),
            previous: neighbour_url(site, page.previous),
            next: neighbour_url(site, page.next),
        })
    }
}

/// Output path with a trailing `index.html` folded into its directory.
fn url_of(page: &Page) -> Option<String> {
    let path = page.output_path.as_deref()?;
    Some(path.strip_suffix("index.html").unwrap_or(path).to_owned())
}

fn neighbour_url(site: &Site, id: Option<PageId>) -> Option<String> {
    site.page(id?).and_then(url_of)
}

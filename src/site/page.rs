//! Page records handled by the post pipeline.

use chrono::{DateTime, FixedOffset};
use std::{fmt, time::SystemTime};

/// Stable handle of a page inside a [`Site`](super::Site).
///
/// Ids are never reused, so removing a page does not shift the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub(super) u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Explicit date carried by page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDate {
    /// Raw metadata value, parsed on demand.
    Text(String),
    /// Already a calendar value.
    Value(DateTime<FixedOffset>),
}

impl From<&str> for PageDate {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for PageDate {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<FixedOffset>> for PageDate {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Value(dt)
    }
}

/// A content page owned by the site.
///
/// Only the fields the post pipeline reads or writes live here:
///
/// | Field | Read | Written |
/// |-------|------|---------|
/// | `source` | classification | - |
/// | `date` | classification | resolved value |
/// | `slug` | precedence | derived slug |
/// | `content` | summary | - |
/// | `mtime`, `sequence` | ordering | - |
/// | `output_path`, `summary` | - | posts, archive pages |
/// | `previous`, `next` | - | posts |
/// | `archive` | - | archive pages |
#[derive(Debug, Clone)]
pub struct Page {
    /// Path relative to the site root, e.g. `/news/2024-06-15-hello.adoc`.
    pub source: String,
    pub date: Option<PageDate>,
    pub slug: Option<String>,
    /// Rendered HTML body.
    pub content: String,
    /// Source modification time, used only as an ordering tie-break.
    pub mtime: SystemTime,
    pub sequence: Option<i64>,

    pub output_path: Option<String>,
    pub summary: Option<String>,
    /// Newer neighbour in the published list.
    pub previous: Option<PageId>,
    /// Older neighbour in the published list.
    pub next: Option<PageId>,
    /// Posts of the bucket an archive page lists.
    pub archive: Vec<PageId>,
}

impl Page {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            date: None,
            slug: None,
            content: String::new(),
            mtime: SystemTime::UNIX_EPOCH,
            sequence: None,
            output_path: None,
            summary: None,
            previous: None,
            next: None,
            archive: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<PageDate>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_mtime(mut self, mtime: SystemTime) -> Self {
        self.mtime = mtime;
        self
    }

    pub fn with_sequence(mut self, sequence: i64) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Resolved date, if the pipeline (or the author) supplied a value.
    pub fn resolved_date(&self) -> Option<DateTime<FixedOffset>> {
        match self.date {
            Some(PageDate::Value(dt)) => Some(dt),
            _ => None,
        }
    }
}

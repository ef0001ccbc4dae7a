//! Post classification pipeline.
//!
//! One pass over the site, once per build:
//!
//! ```text
//! ┌──────────────┐    ┌──────────┐    ┌────────────┐    ┌───────────────┐
//! │ classify     │ ─► │ sort     │ ─► │ archive    │ ─► │ write back    │
//! │ (PathMatcher,│    │ newest   │    │ pages      │    │ drop stale,   │
//! │  read only)  │    │ first    │    │ (loader)   │    │ link, publish │
//! └──────────────┘    └──────────┘    └────────────┘    └───────────────┘
//! ```
//!
//! Every fallible step runs before the first write, so a failed run leaves
//! the site as it was.
//!
//! Posts are ordered by date, then sequence (missing = 0), then source
//! modification time, then slug, all descending.

mod archive;
mod error;
mod matcher;
mod summary;

pub use archive::{Archive, PageLoader};
pub use error::PostsError;
pub use matcher::{PathMatch, PathMatcher};
pub use summary::{ELLIPSIS, MORE_MARKER, extract_summary};

use std::{cmp::Ordering, time::SystemTime};

use anyhow::Result;
use chrono::{DateTime, FixedOffset};

use crate::{
    config::PostsConfig,
    log,
    site::{PageDate, PageId, Site},
};

/// Counts from one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostsReport {
    pub posts: usize,
    /// Pages dropped for being older than the cutoff.
    pub removed: usize,
    pub archive_pages: usize,
}

/// Configured post pipeline.
#[derive(Debug, Clone)]
pub struct Posts {
    matcher: PathMatcher,
    assign_to: String,
    archive_template: Option<String>,
    archive_path: Option<String>,
    cutoff: Option<DateTime<FixedOffset>>,
}

/// A recognised post, resolved but not yet written back.
#[derive(Debug)]
struct PostKey {
    id: PageId,
    date: DateTime<FixedOffset>,
    sequence: i64,
    mtime: SystemTime,
    slug: String,
    output_path: String,
}

impl PostKey {
    fn chronological(&self, other: &Self) -> Ordering {
        (self.date, self.sequence, self.mtime, &self.slug).cmp(&(
            other.date,
            other.sequence,
            other.mtime,
            &other.slug,
        ))
    }
}

impl Posts {
    /// Validate `config` and compile its path patterns.
    pub fn new(config: &PostsConfig) -> Result<Self> {
        config.validate()?;

        let (archive_template, archive_path) = if config.archive_enabled() {
            (config.archive_template.clone(), config.archive_path.clone())
        } else {
            (None, None)
        };

        Ok(Self {
            matcher: PathMatcher::new(&config.path_prefix, config.subdirs)?,
            assign_to: config.assign_to.clone(),
            archive_template,
            archive_path,
            cutoff: config.cutoff()?,
        })
    }

    /// Classify, link and publish the posts of `site`.
    ///
    /// On success every post has its date, slug, output path, summary and
    /// neighbours set, stale pages are gone, archive pages (if configured)
    /// are appended, and the sorted ids are published under `assign_to`.
    ///
    /// A malformed date or a failing archive template aborts the run before
    /// any page is touched.
    pub fn execute(&self, site: &mut Site, loader: &dyn PageLoader) -> Result<PostsReport> {
        let mut posts = Vec::new();
        let mut stale = Vec::new();

        for (id, page) in site.pages() {
            let Some(found) = self.matcher.match_page(&page.source, page.date.as_ref())? else {
                continue;
            };

            if self.cutoff.is_some_and(|cutoff| found.date < cutoff) {
                stale.push(id);
                continue;
            }

            let Some(slug) = page.slug.clone().or_else(|| found.slug.clone()) else {
                continue;
            };

            posts.push(PostKey {
                id,
                date: found.date,
                sequence: page.sequence.unwrap_or(0),
                mtime: page.mtime,
                output_path: found.output_path(self.matcher.prefix(), &slug),
                slug,
            });
        }

        posts.sort_by(|a, b| b.chronological(a));
        let ids: Vec<PageId> = posts.iter().map(|post| post.id).collect();

        let mut archive = Archive::new();
        for post in &posts {
            archive.insert(post.id, post.date);
        }
        let archive_pages = archive.generate_pages(
            loader,
            self.archive_template.as_deref(),
            self.archive_path.as_deref(),
        )?;

        // Nothing below can fail
        for id in &stale {
            if let Some(page) = site.remove(*id) {
                log!("posts"; "dropped {} (older than cutoff)", page.source);
            }
        }

        for (i, post) in posts.into_iter().enumerate() {
            let Some(page) = site.page_mut(post.id) else {
                continue;
            };
            page.date = Some(PageDate::Value(post.date));
            page.summary = Some(extract_summary(&page.content));
            page.slug = Some(post.slug);
            page.output_path = Some(post.output_path);
            page.previous = i.checked_sub(1).and_then(|j| ids.get(j)).copied();
            page.next = ids.get(i + 1).copied();
        }

        let report = PostsReport {
            posts: ids.len(),
            removed: stale.len(),
            archive_pages: archive_pages.len(),
        };

        site.extend(archive_pages);
        site.publish(&self.assign_to, ids);

        log!("posts"; "{} {}, {} removed", report.posts, self.assign_to, report.removed);
        if report.archive_pages > 0 {
            log!("archive"; "{} day pages", report.archive_pages);
        }

        Ok(report)
    }
}

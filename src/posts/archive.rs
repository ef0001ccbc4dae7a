//! Day archives: posts grouped by year, month and day.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use chrono::{DateTime, Datelike, FixedOffset};

use super::error::PostsError;
use crate::site::{Page, PageId};

/// Source of fresh template pages for generated archive pages.
///
/// Every call must return a new page; the archive fills in its
/// `archive` list and `output_path`.
pub trait PageLoader {
    fn load_page(&self, template: &str) -> Result<Page>;
}

impl<F> PageLoader for F
where
    F: Fn(&str) -> Result<Page>,
{
    fn load_page(&self, template: &str) -> Result<Page> {
        self(template)
    }
}

type Days = BTreeMap<u32, Vec<PageId>>;
type Months = BTreeMap<u32, Days>;

/// `year → month → day → posts`, iterated in calendar order.
///
/// Posts within a day keep insertion order.
#[derive(Debug, Default)]
pub struct Archive {
    years: BTreeMap<i32, Months>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a post under the calendar day of `date`.
    pub fn insert(&mut self, id: PageId, date: DateTime<FixedOffset>) {
        self.years
            .entry(date.year())
            .or_default()
            .entry(date.month())
            .or_default()
            .entry(date.day())
            .or_default()
            .push(id);
    }

    /// Posts filed under one day.
    pub fn day(&self, year: i32, month: u32, day: u32) -> Option<&[PageId]> {
        self.years
            .get(&year)?
            .get(&month)?
            .get(&day)
            .map(Vec::as_slice)
    }

    /// All populated days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = ((i32, u32, u32), &[PageId])> {
        self.years.iter().flat_map(|(&year, months)| {
            months.iter().flat_map(move |(&month, days)| {
                days.iter()
                    .map(move |(&day, ids)| ((year, month, day), ids.as_slice()))
            })
        })
    }

    /// One page per populated day, in ascending order.
    ///
    /// Returns nothing unless both `template` and `output_root` are set.
    /// Output paths are `<output_root>/<year>/<month>/<day>/<template name>.html`.
    pub fn generate_pages(
        &self,
        loader: &dyn PageLoader,
        template: Option<&str>,
        output_root: Option<&str>,
    ) -> Result<Vec<Page>> {
        let (Some(template), Some(output_root)) = (template, output_root) else {
            return Ok(Vec::new());
        };

        let name = Path::new(template)
            .file_name()
            .map_or_else(|| template.to_owned(), |name| name.to_string_lossy().into_owned());
        let root = output_root.trim_end_matches('/');

        self.days()
            .map(|((year, month, day), ids)| -> Result<Page> {
                let mut page = loader
                    .load_page(template)
                    .map_err(|err| PostsError::Template {
                        template: template.to_owned(),
                        err: err.into(),
                    })?;
                page.archive = ids.to_vec();
                page.output_path = Some(format!("{root}/{year}/{month}/{day}/{name}.html"));
                Ok(page)
            })
            .collect()
    }
}

//! Date and slug recognition from source paths.
//!
//! Two pattern families are compiled per prefix:
//!
//! | Family  | subdirs (default)                        | flat                              |
//! |---------|------------------------------------------|-----------------------------------|
//! | dated   | `<prefix>[/dirs]/YYYY-MM-DD-slug.ext`    | `<prefix>/YYYY-MM-DD-slug.ext`    |
//! | general | `<prefix>[/dirs]/name.ext`               | `<prefix>/name.ext`               |
//!
//! A page carrying its own date only needs the general pattern (for the
//! slug), but a dated filename still supplies the slug when it matches.
//! A page without a date must have a dated filename.

use chrono::{DateTime, Datelike, FixedOffset};
use regex::{Captures, Regex};

use super::error::PostsError;
use crate::{
    site::PageDate,
    utils::date::{parse_date, ymd_utc},
};

/// Date and slug recognised for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// Resolved publication date.
    pub date: DateTime<FixedOffset>,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Slug derived from the file name, if any.
    pub slug: Option<String>,
}

impl PathMatch {
    fn new(date: DateTime<FixedOffset>, slug: Option<String>) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            slug,
        }
    }

    /// `<prefix>/<YYYY>/<MM>/<DD>/<slug>/index.html`
    pub fn output_path(&self, prefix: &str, slug: &str) -> String {
        format!(
            "{prefix}/{:04}/{:02}/{:02}/{slug}/index.html",
            self.year, self.month, self.day
        )
    }
}

/// Classifies source paths under one prefix.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    prefix: String,
    /// `prefix` followed by `/`; only paths starting with it are considered.
    scope: String,
    dated: Regex,
    general: Regex,
}

impl PathMatcher {
    /// Compile the pattern families for `prefix`.
    ///
    /// With `subdirs`, any number of directories may sit between the prefix
    /// and the file name.
    pub fn new(prefix: &str, subdirs: bool) -> Result<Self, PostsError> {
        let escaped = regex::escape(prefix);
        let dirs = if subdirs { "(?:/.*)*" } else { "" };

        let dated = format!(
            r"^{escaped}{dirs}/(?P<year>[0-9]{{4}})-(?P<month>[01][0-9])-(?P<day>[0-3][0-9])-(?P<slug>[^.]+)\..*$"
        );
        let general = format!(r"^{escaped}{dirs}/(?P<slug>.*)\..*$");

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|err| PostsError::Pattern {
                prefix: prefix.to_owned(),
                err,
            })
        };

        Ok(Self {
            prefix: prefix.to_owned(),
            scope: format!("{prefix}/"),
            dated: compile(&dated)?,
            general: compile(&general)?,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Recognise a page from its source path and optional explicit date.
    ///
    /// Returns `Ok(None)` when the page is not a post candidate. An explicit
    /// date that cannot be parsed, or a filename day that does not exist, is
    /// an error.
    pub fn match_page(
        &self,
        source: &str,
        date: Option<&PageDate>,
    ) -> Result<Option<PathMatch>, PostsError> {
        if !source.starts_with(&self.scope) {
            return Ok(None);
        }

        let dated = self.dated.captures(source);

        if let Some(date) = date {
            let date = resolve(source, date)?;
            let slug = dated
                .as_ref()
                .and_then(slug_of)
                .or_else(|| self.general.captures(source).as_ref().and_then(slug_of));
            return Ok(Some(PathMatch::new(date, slug)));
        }

        let Some(caps) = dated else {
            return Ok(None);
        };
        let Some((year, month, day)) = ymd(&caps) else {
            return Ok(None);
        };
        let date = ymd_utc(year, month, day).ok_or_else(|| PostsError::InvalidFilenameDate {
            path: source.to_owned(),
            year,
            month,
            day,
        })?;

        Ok(Some(PathMatch::new(date, slug_of(&caps))))
    }
}

/// Turn an explicit page date into a calendar value.
fn resolve(source: &str, date: &PageDate) -> Result<DateTime<FixedOffset>, PostsError> {
    match date {
        PageDate::Value(dt) => Ok(*dt),
        PageDate::Text(raw) => parse_date(raw).ok_or_else(|| PostsError::DateParse {
            path: source.to_owned(),
            value: raw.clone(),
        }),
    }
}

fn slug_of(caps: &Captures<'_>) -> Option<String> {
    caps.name("slug")
        .map(|m| m.as_str())
        .filter(|slug| !slug.is_empty())
        .map(str::to_owned)
}

fn ymd(caps: &Captures<'_>) -> Option<(i32, u32, u32)> {
    Some((
        caps.name("year")?.as_str().parse().ok()?,
        caps.name("month")?.as_str().parse().ok()?,
        caps.name("day")?.as_str().parse().ok()?,
    ))
}

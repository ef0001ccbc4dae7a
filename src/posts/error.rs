//! Post pipeline error types.

use thiserror::Error;

/// Errors that abort a post pipeline run.
///
/// Anything that would corrupt ordering or URLs is fatal. Presentation
/// problems (odd summary markup) never surface here.
#[derive(Debug, Error)]
pub enum PostsError {
    #[error("unparsable date `{value}` in `{path}`")]
    DateParse { path: String, value: String },

    #[error("`{path}` names a day that does not exist: {year}-{month:02}-{day:02}")]
    InvalidFilenameDate {
        path: String,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("invalid path prefix `{prefix}`")]
    Pattern {
        prefix: String,
        #[source]
        err: regex::Error,
    },

    #[error("failed to load archive template `{template}`")]
    Template {
        template: String,
        #[source]
        err: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_display() {
        let err = PostsError::DateParse {
            path: "/news/hello.adoc".into(),
            value: "someday".into(),
        };
        let display = err.to_string();
        assert!(display.contains("someday"));
        assert!(display.contains("/news/hello.adoc"));
    }

    #[test]
    fn test_invalid_filename_date_display() {
        let err = PostsError::InvalidFilenameDate {
            path: "/news/2013-02-30-x.adoc".into(),
            year: 2013,
            month: 2,
            day: 30,
        };
        assert!(err.to_string().contains("2013-02-30"));
    }

    #[test]
    fn test_template_error_keeps_cause() {
        let err = PostsError::Template {
            template: "/news/_archive".into(),
            err: "no such page".into(),
        };
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "no such page");
    }
}

//! Published post data for templates.
//!
//! Serializes a published list to pretty JSON, newest first:
//!
//! ```json
//! [
//!   {
//!     "url": "/news/2012/03/04/hello/",
//!     "source": "/news/2012-03-04-hello.adoc",
//!     "slug": "hello",
//!     "date": "2012-03-04T00:00:00+00:00",
//!     "summary": "<div class=\"paragraph\">...</div>",
//!     "next": "/news/2012/01/02/older/"
//!   }
//! ]
//! ```

mod types;

pub use types::PostData;

use anyhow::Result;

use crate::site::Site;

/// Posts published under `name`, in list order.
///
/// An unknown name yields an empty list.
pub fn posts_data(site: &Site, name: &str) -> Vec<PostData> {
    site.published(name)
        .filter_map(|page| PostData::from_page(site, page))
        .collect()
}

/// JSON array of the posts published under `name`.
pub fn posts_json(site: &Site, name: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&posts_data(site, name))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::PostsConfig, posts::Posts, site::Page};
    use anyhow::bail;

    fn no_archive(template: &str) -> Result<Page> {
        bail!("unexpected template load: {template}")
    }

    fn site() -> Site {
        let mut site = Site::new();
        site.push(
            Page::new("/news/2012-01-02-older.adoc")
                .with_content(r#"<div class="paragraph"><p>Old</p></div>"#),
        );
        site.push(Page::new("/news/2012-03-04-hello.adoc"));
        site.push(Page::new("/about.adoc"));

        let config = PostsConfig {
            path_prefix: "/news".into(),
            ..Default::default()
        };
        Posts::new(&config)
            .unwrap()
            .execute(&mut site, &no_archive)
            .unwrap();
        site
    }

    #[test]
    fn test_posts_data_in_list_order() {
        let site = site();
        let data = posts_data(&site, "posts");

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].url, "/news/2012/03/04/hello/");
        assert_eq!(data[0].slug, "hello");
        assert_eq!(data[0].date, "2012-03-04T00:00:00+00:00");
        assert_eq!(data[0].previous, None);
        assert_eq!(data[0].next.as_deref(), Some("/news/2012/01/02/older/"));

        assert_eq!(data[1].previous.as_deref(), Some("/news/2012/03/04/hello/"));
        assert_eq!(data[1].next, None);
        assert_eq!(
            data[1].summary.as_deref(),
            Some(r#"<div class="paragraph"><p>Old</p></div>"#)
        );
    }

    #[test]
    fn test_posts_json_skips_missing_links() {
        let site = site();
        let json = posts_json(&site, "posts").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["slug"], "hello");
        assert!(first.get("previous").is_none());
        assert_eq!(first["next"], "/news/2012/01/02/older/");
        assert!(value[1].get("next").is_none());
    }

    #[test]
    fn test_unknown_list_is_empty() {
        let site = site();
        assert_eq!(posts_json(&site, "drafts").unwrap(), "[]");
    }
}

//! Dated posts for tola sites.
//!
//! Turns plain content pages into a chronological stream of posts:
//!
//! ```text
//! Site pages ──► PathMatcher ──► sort ──► link ──► Archive ──► archive pages
//!                    │                                             │
//!                    └── extract_summary (per post)                ▼
//!                                                   Site::publish("posts", ..)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let config = SiteConfig::from_path(Path::new("tola.toml"))?;
//! let posts = Posts::new(&config.posts)?;
//! posts.execute(&mut site, &|template: &str| load_template(template))?;
//!
//! for page in site.published("posts") {
//!     println!("{:?} -> {:?}", page.slug, page.output_path);
//! }
//! ```

pub mod config;
pub mod data;
pub mod logger;
pub mod posts;
pub mod site;
pub mod utils;

pub use config::{PostsConfig, SiteConfig};
pub use posts::{
    Archive, PageLoader, PathMatch, PathMatcher, Posts, PostsError, PostsReport, extract_summary,
};
pub use site::{Page, PageDate, PageId, Site};

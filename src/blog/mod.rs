//! Markdown blog: loading, routing, search, and pagination.

mod frontmatter;
mod loader;
mod query;
mod route;
mod slug;
mod types;

pub use frontmatter::{Frontmatter, parse_frontmatter, serialize_frontmatter};
pub use loader::{ContentSource, HttpSource, load_all_posts, load_manifest, load_post, read_time};
pub use query::{Page, filter_by_route, find_post, paginate, related, search};
pub use route::{BLOG_ROOT, CATEGORIES, Route, category_href, page_fragment, page_number, tag_href};
pub use slug::{slugify, unslug};
pub use types::{Manifest, Post};

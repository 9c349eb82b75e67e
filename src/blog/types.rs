use serde::{Deserialize, Serialize};

use super::frontmatter::Frontmatter;

/// `manifest.json`: post file names, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
	/// File names relative to the blog base path.
	pub posts: Vec<String>,
}

/// A canonicalized blog post.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
	/// Display title.
	pub title: String,
	/// One-line summary.
	pub description: String,
	/// Raw date string, `YYYY-MM-DD` prefixed; sorts lexicographically.
	pub date: String,
	/// Author name.
	pub author: String,
	/// Category label.
	pub category: String,
	/// Tag labels.
	pub tags: Vec<String>,
	/// Optional cover image URL.
	pub cover_image: Option<String>,
	/// Hidden from production builds.
	pub draft: bool,
	/// URL-safe identity derived from the title.
	pub slug: String,
	/// Four-digit year from the date.
	pub year: String,
	/// Two-digit month from the date.
	pub month: String,
	/// `#/blog/<year>/<month>/<slug>`.
	pub url: String,
	/// Markdown body.
	pub content: String,
	/// Frontmatter keys not mapped to a field above.
	pub extra: Frontmatter,
}

impl Post {
	/// Whether the post is in `category`, compared by slug.
	pub fn in_category(&self, slug: &str) -> bool {
		super::slugify(&self.category) == slug
	}

	/// Whether one of the tags slugifies to `slug`.
	pub fn has_tag(&self, slug: &str) -> bool {
		self.tags.iter().any(|t| super::slugify(t) == slug)
	}
}

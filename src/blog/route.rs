use super::slug::{slugify, unslug};

/// Categories offered in the blog navigation.
pub const CATEGORIES: [&str; 8] = [
	"AI & Machine Learning",
	"Product & Strategy",
	"Data Science & Analytics",
	"Quantum Computing",
	"Software & Systems",
	"Research & Academia",
	"Career & Learning",
	"Society & Tech",
];

/// Fragment the blog falls back to when the URL has none.
pub const BLOG_ROOT: &str = "#/blog";

/// Which blog view a fragment selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
	/// All posts.
	Index,
	/// Posts whose category slugifies to `slug`.
	Category {
		/// Category slug from the URL.
		slug: String,
		/// Slug with hyphens as spaces.
		label: String,
	},
	/// Posts carrying a tag that slugifies to `slug`.
	Tag {
		/// Tag slug from the URL.
		slug: String,
		/// Slug with hyphens as spaces.
		label: String,
	},
	/// A single post, looked up by its full url.
	Post,
}

impl Route {
	/// Route for a location fragment, with or without the leading `#`.
	///
	/// The query string never takes part in matching.
	pub fn parse(fragment: &str) -> Self {
		let path = path_of(fragment);
		let Some(rest) = path.strip_prefix("/blog/") else {
			return Self::Index;
		};
		if is_dated(rest) {
			return Self::Post;
		}
		if let Some(slug) = single_segment(rest, "category/") {
			return Self::Category {
				label: unslug(slug),
				slug: slug.to_string(),
			};
		}
		if let Some(slug) = single_segment(rest, "tag/") {
			return Self::Tag {
				label: unslug(slug),
				slug: slug.to_string(),
			};
		}
		Self::Index
	}

	/// Heading for list views.
	pub fn title(&self) -> String {
		match self {
			Self::Category { label, .. } => label.clone(),
			Self::Tag { label, .. } => format!("#{label}"),
			Self::Index | Self::Post => "Blog".into(),
		}
	}
}

fn path_of(fragment: &str) -> &str {
	let bare = fragment.strip_prefix('#').unwrap_or(fragment);
	bare.split_once('?').map_or(bare, |(path, _)| path)
}

fn query_of(fragment: &str) -> &str {
	fragment.split_once('?').map_or("", |(_, query)| query)
}

/// `YYYY/MM/` followed by anything.
fn is_dated(rest: &str) -> bool {
	let b = rest.as_bytes();
	b.len() >= 8
		&& b[..4].iter().all(u8::is_ascii_digit)
		&& b[4] == b'/'
		&& b[5..7].iter().all(u8::is_ascii_digit)
		&& b[7] == b'/'
}

fn single_segment<'a>(rest: &'a str, prefix: &str) -> Option<&'a str> {
	rest.strip_prefix(prefix).filter(|s| !s.is_empty() && !s.contains('/'))
}

/// Page requested by the fragment's `page` parameter; 1 when absent or unusable.
pub fn page_number(fragment: &str) -> usize {
	query_of(fragment)
		.split('&')
		.filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
		.find(|(key, _)| *key == "page")
		.map_or(1, |(_, value)| leading_int(value))
		.max(1)
}

/// Leading decimal digits of `value`, 0 if there are none.
fn leading_int(value: &str) -> usize {
	let digits = value.trim_start();
	let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
	digits[..end].parse().unwrap_or(0)
}

/// `fragment` with its `page` parameter set to `page`, other parameters kept.
pub fn page_fragment(fragment: &str, page: usize) -> String {
	let path = fragment.split_once('?').map_or(fragment, |(path, _)| path);
	let path = if path.is_empty() || path == "#" { BLOG_ROOT } else { path };

	let mut params: Vec<String> = query_of(fragment)
		.split('&')
		.filter(|pair| !pair.is_empty() && pair.split_once('=').map_or(*pair, |(k, _)| k) != "page")
		.map(str::to_string)
		.collect();
	params.push(format!("page={page}"));
	format!("{path}?{}", params.join("&"))
}

/// Link to a category listing.
pub fn category_href(label: &str) -> String {
	format!("{BLOG_ROOT}/category/{}", slugify(label))
}

/// Link to a tag listing.
pub fn tag_href(label: &str) -> String {
	format!("{BLOG_ROOT}/tag/{}", slugify(label))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_routes() {
		assert_eq!(
			Route::parse("#/blog/category/ai-ml"),
			Route::Category {
				slug: "ai-ml".into(),
				label: "ai ml".into()
			}
		);
		assert_eq!(Route::parse("#/blog/2025/06/my-post"), Route::Post);
		assert_eq!(Route::parse("#/about"), Route::Index);
		assert_eq!(Route::parse(""), Route::Index);
		assert_eq!(Route::parse("#/blog"), Route::Index);
		assert_eq!(
			Route::parse("/blog/tag/rust"),
			Route::Tag {
				slug: "rust".into(),
				label: "rust".into()
			}
		);
	}

	#[test]
	fn query_is_ignored_when_matching() {
		assert_eq!(
			Route::parse("#/blog/category/ai-ml?page=2"),
			Route::Category {
				slug: "ai-ml".into(),
				label: "ai ml".into()
			}
		);
		assert_eq!(Route::parse("#/blog/category/a/b"), Route::Index);
		assert_eq!(Route::parse("#/blog/2025/6/x"), Route::Index);
	}

	#[test]
	fn titles() {
		assert_eq!(Route::parse("#/blog/tag/web-dev").title(), "#web dev");
		assert_eq!(Route::Index.title(), "Blog");
	}

	#[test]
	fn page_numbers() {
		assert_eq!(page_number("#/blog"), 1);
		assert_eq!(page_number("#/blog?page=3"), 3);
		assert_eq!(page_number("#/blog?q=x&page=2"), 2);
		assert_eq!(page_number("#/blog?page=0"), 1);
		assert_eq!(page_number("#/blog?page=-4"), 1);
		assert_eq!(page_number("#/blog?page=abc"), 1);
		assert_eq!(page_number("#/blog?page=7x"), 7);
	}

	#[test]
	fn page_links_keep_other_params() {
		assert_eq!(page_fragment("#/blog", 2), "#/blog?page=2");
		assert_eq!(page_fragment("#/blog?page=2&q=rust", 3), "#/blog?q=rust&page=3");
		assert_eq!(page_fragment("", 1), "#/blog?page=1");
		assert_eq!(
			page_fragment("#/blog/tag/rust?page=4", 1),
			"#/blog/tag/rust?page=1"
		);
	}

	#[test]
	fn hrefs_use_slugs() {
		assert_eq!(category_href("AI & Machine Learning"), "#/blog/category/ai-machine-learning");
		assert_eq!(tag_href("Web Dev"), "#/blog/tag/web-dev");
	}
}

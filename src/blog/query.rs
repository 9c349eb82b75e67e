//! Filtering, search, and pagination over loaded posts.

use super::route::Route;
use super::types::Post;

/// Post whose url equals `fragment`.
pub fn find_post<'a>(posts: &'a [Post], fragment: &str) -> Option<&'a Post> {
	posts.iter().find(|p| p.url == fragment)
}

/// Posts listed by `route`. A post route lists nothing.
pub fn filter_by_route<'a>(posts: &'a [Post], route: &Route) -> Vec<&'a Post> {
	match route {
		Route::Index => posts.iter().collect(),
		Route::Category { slug, .. } => posts.iter().filter(|p| p.in_category(slug)).collect(),
		Route::Tag { slug, .. } => posts.iter().filter(|p| p.has_tag(slug)).collect(),
		Route::Post => Vec::new(),
	}
}

/// Case-insensitive substring search over title, description, and tags.
///
/// A blank query keeps every post.
pub fn search<'a>(posts: &[&'a Post], query: &str) -> Vec<&'a Post> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return posts.to_vec();
	}
	posts
		.iter()
		.copied()
		.filter(|p| {
			p.title.to_lowercase().contains(&needle)
				|| p.description.to_lowercase().contains(&needle)
				|| p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
		})
		.collect()
}

/// One page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
	/// Items on this page; empty past the last page.
	pub items: Vec<T>,
	/// 1-based page number.
	pub page: usize,
	/// At least 1.
	pub total_pages: usize,
}

impl<T> Page<T> {
	/// Whether a previous page exists.
	pub fn has_prev(&self) -> bool {
		self.page > 1
	}

	/// Whether a next page exists.
	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}
}

/// Slices `items` into page `page` of `size`.
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Page<T> {
	let size = size.max(1);
	let page = page.max(1);
	let total_pages = items.len().div_ceil(size).max(1);
	let start = (page - 1).saturating_mul(size).min(items.len());
	let end = start.saturating_add(size).min(items.len());
	Page {
		items: items[start..end].to_vec(),
		page,
		total_pages,
	}
}

/// Up to three other posts sharing the category or a tag.
pub fn related<'a>(posts: &'a [Post], post: &Post) -> Vec<&'a Post> {
	posts
		.iter()
		.filter(|p| p.url != post.url)
		.filter(|p| p.category == post.category || p.tags.iter().any(|t| post.tags.contains(t)))
		.take(3)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::blog::Frontmatter;

	fn post(n: usize, category: &str, tags: &[&str]) -> Post {
		Post {
			title: format!("Post {n}"),
			description: format!("About thing {n}"),
			date: format!("2025-01-{:02}", n + 1),
			author: "Ada".into(),
			category: category.into(),
			tags: tags.iter().map(|t| t.to_string()).collect(),
			cover_image: None,
			draft: false,
			slug: format!("post-{n}"),
			year: "2025".into(),
			month: "01".into(),
			url: format!("#/blog/2025/01/post-{n}"),
			content: String::new(),
			extra: Frontmatter::default(),
		}
	}

	fn ten() -> Vec<Post> {
		(0..10).map(|n| post(n, "Software & Systems", &["rust"])).collect()
	}

	#[test]
	fn pages_of_nine() {
		let posts = ten();
		let sizes: Vec<_> = (1..=3).map(|p| paginate(&posts, p, 9).items.len()).collect();
		assert_eq!(sizes, [9, 1, 0]);
		assert_eq!(paginate(&posts, 3, 9).total_pages, 2);
		assert_eq!(paginate::<Post>(&[], 1, 9).total_pages, 1);
		assert!(paginate(&posts, 1, 9).has_next());
		assert!(!paginate(&posts, 2, 9).has_next());
	}

	#[test]
	fn finds_by_exact_url() {
		let posts = ten();
		assert_eq!(find_post(&posts, "#/blog/2025/01/post-3").map(|p| p.slug.as_str()), Some("post-3"));
		assert!(find_post(&posts, "#/blog/2025/01/post-33").is_none());
	}

	#[test]
	fn filters_by_category_and_tag() {
		let posts = vec![
			post(0, "AI & Machine Learning", &["LLMs"]),
			post(1, "Quantum Computing", &["Qubits", "Rust"]),
		];
		let cat = Route::parse("#/blog/category/ai-machine-learning");
		assert_eq!(filter_by_route(&posts, &cat).len(), 1);
		let tag = Route::parse("#/blog/tag/rust?page=1");
		assert_eq!(filter_by_route(&posts, &tag)[0].slug, "post-1");
		assert!(filter_by_route(&posts, &Route::Post).is_empty());
	}

	#[test]
	fn search_is_case_insensitive() {
		let posts = vec![post(0, "x", &["WebAssembly"]), post(1, "x", &["Go"])];
		let all: Vec<&Post> = posts.iter().collect();
		assert_eq!(search(&all, "  ").len(), 2);
		assert_eq!(search(&all, "ASSEMBLY")[0].slug, "post-0");
		assert_eq!(search(&all, "thing 1")[0].slug, "post-1");
		assert!(search(&all, "nothing").is_empty());
	}

	#[test]
	fn related_excludes_self_and_caps_at_three() {
		let mut posts = ten();
		posts.push(post(10, "Elsewhere", &["other"]));
		let picked = related(&posts, &posts[0]);
		assert_eq!(picked.len(), 3);
		assert!(picked.iter().all(|p| p.slug != "post-0"));
		assert!(related(&posts, &posts[10]).is_empty());
	}
}

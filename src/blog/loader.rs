//! Fetching and canonicalizing posts.

use std::future::Future;

use chrono::{Datelike, NaiveDate};
use futures::future::try_join_all;
use log::{debug, info, warn};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::frontmatter::{Frontmatter, parse_frontmatter};
use super::slug::slugify;
use super::types::{Manifest, Post};
use crate::config::BlogConfig;
use crate::error::{ContentError, ContentResult};

/// Where post files and the manifest come from.
pub trait ContentSource {
	/// Text of the file at `path`, relative to the source root.
	fn fetch_text(&self, path: &str) -> impl Future<Output = ContentResult<String>>;
}

/// Static files served next to the app, read through `window.fetch`.
#[derive(Clone, Debug)]
pub struct HttpSource {
	base: String,
}

impl HttpSource {
	/// Source rooted at `base`, e.g. `/blog`.
	pub fn new(base: impl Into<String>) -> Self {
		Self { base: base.into() }
	}

	/// Source for the configured blog directory.
	pub fn from_config(config: &BlogConfig) -> Self {
		Self::new(config.base_path.clone())
	}
}

impl ContentSource for HttpSource {
	async fn fetch_text(&self, path: &str) -> ContentResult<String> {
		let url = format!("{}/{}", self.base, path);
		let fetch_failed = |reason: String| ContentError::Fetch {
			path: url.clone(),
			reason,
		};

		let window = web_sys::window().ok_or_else(|| fetch_failed("no window".into()))?;
		let response = JsFuture::from(window.fetch_with_str(&url))
			.await
			.map_err(|e| fetch_failed(format!("{e:?}")))?;
		let response: web_sys::Response = response
			.dyn_into()
			.map_err(|_| fetch_failed("not a response".into()))?;
		if !response.ok() {
			return Err(ContentError::NotFound { path: url.clone() });
		}

		let body = response.text().map_err(|e| fetch_failed(format!("{e:?}")))?;
		let text = JsFuture::from(body)
			.await
			.map_err(|e| fetch_failed(format!("{e:?}")))?;
		text.as_string()
			.ok_or_else(|| fetch_failed("body is not text".into()))
	}
}

/// Reads the manifest listing every post file.
pub async fn load_manifest(source: &impl ContentSource, name: &str) -> ContentResult<Manifest> {
	let text = source.fetch_text(name).await?;
	let manifest: Manifest = serde_json::from_str(&text)?;
	debug!("blog manifest lists {} posts", manifest.posts.len());
	Ok(manifest)
}

/// Fetches one post file and turns it into a [`Post`].
pub async fn load_post(source: &impl ContentSource, file: &str) -> ContentResult<Post> {
	let text = source.fetch_text(file).await?;
	canonicalize(file, &text).inspect_err(|e| warn!("{e}"))
}

fn canonicalize(file: &str, text: &str) -> ContentResult<Post> {
	let (mut meta, body) = parse_frontmatter(text).map_err(|e| e.at(file))?;

	let stem = file
		.strip_suffix(".mdx")
		.or_else(|| file.strip_suffix(".md"))
		.unwrap_or(file);
	let title = take_text(&mut meta, "title")
		.filter(|t| !t.is_empty())
		.unwrap_or_else(|| stem.to_string());

	let date = take_text(&mut meta, "date").unwrap_or_default();
	let day = date
		.get(..10)
		.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
		.ok_or_else(|| ContentError::Malformed {
			path: file.to_string(),
			reason: format!("unreadable date {date:?}"),
		})?;

	let slug = slugify(&title);
	let year = format!("{:04}", day.year());
	let month = format!("{:02}", day.month());
	let url = format!("#/blog/{year}/{month}/{slug}");

	Ok(Post {
		description: take_text(&mut meta, "description").unwrap_or_default(),
		author: take_text(&mut meta, "author").unwrap_or_default(),
		category: take_text(&mut meta, "category").unwrap_or_default(),
		tags: meta.remove("tags").map(tag_list).unwrap_or_default(),
		cover_image: take_text(&mut meta, "coverImage").filter(|c| !c.is_empty()),
		draft: meta.remove("draft").is_some_and(|v| truthy(&v)),
		title,
		date,
		slug,
		year,
		month,
		url,
		content: body,
		extra: meta,
	})
}

fn take_text(meta: &mut Frontmatter, key: &str) -> Option<String> {
	match meta.remove(key)? {
		Value::String(s) => Some(s),
		Value::Null => None,
		other => Some(other.to_string()),
	}
}

/// Flag values read loosely: any non-empty text counts, as do non-zero numbers.
fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Tags written either as a list or as `a, b, c`.
fn tag_list(value: Value) -> Vec<String> {
	let labels: Vec<String> = match value {
		Value::Array(items) => items
			.into_iter()
			.map(|v| match v {
				Value::String(s) => s,
				other => other.to_string(),
			})
			.collect(),
		Value::String(s) => s.split(',').map(str::to_string).collect(),
		_ => Vec::new(),
	};
	labels
		.into_iter()
		.map(|t| t.trim().to_string())
		.filter(|t| !t.is_empty())
		.collect()
}

/// Loads every post in the manifest, newest first.
///
/// All files are fetched concurrently and a single failure fails the whole
/// load. Drafts are dropped in production builds.
pub async fn load_all_posts(source: &impl ContentSource, config: &BlogConfig) -> ContentResult<Vec<Post>> {
	let manifest = load_manifest(source, &config.manifest).await?;
	let loaded = try_join_all(manifest.posts.iter().map(|file| load_post(source, file))).await?;

	let total = loaded.len();
	let hide_drafts = config.profile.is_production();
	let mut posts: Vec<Post> = loaded
		.into_iter()
		.filter(|p| !(hide_drafts && p.draft))
		.collect();
	posts.sort_by(|a, b| b.date.cmp(&a.date));

	info!("loaded {} of {} blog posts", posts.len(), total);
	Ok(posts)
}

/// Minutes to read `body` at 200 words per minute, at least one.
pub fn read_time(body: &str) -> u32 {
	let words = body.split_whitespace().count() as f64;
	((words / 200.0).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::future::ready;

	use futures::executor::block_on;

	use super::*;
	use crate::config::BuildProfile;

	#[derive(Default)]
	struct MemorySource(HashMap<String, String>);

	impl MemorySource {
		fn with(mut self, path: &str, text: &str) -> Self {
			self.0.insert(path.into(), text.into());
			self
		}
	}

	impl ContentSource for MemorySource {
		fn fetch_text(&self, path: &str) -> impl Future<Output = ContentResult<String>> {
			ready(self.0.get(path).cloned().ok_or_else(|| ContentError::NotFound { path: path.into() }))
		}
	}

	fn post(title: &str, date: &str, draft: bool) -> String {
		format!("---\ntitle: {title}\ndate: {date}\ndraft: {draft}\ncategory: AI & ML\ntags: rust, wasm\n---\nBody of {title}.\n")
	}

	fn source() -> MemorySource {
		MemorySource::default()
			.with("manifest.json", r#"{ "posts": ["old.md", "new.md", "draft.md"] }"#)
			.with("old.md", &post("Old News", "2024-01-01", false))
			.with("new.md", &post("New News", "2025-06-01", false))
			.with("draft.md", &post("Unfinished", "2025-07-01", true))
	}

	fn config(profile: BuildProfile) -> BlogConfig {
		BlogConfig {
			profile,
			..BlogConfig::default()
		}
	}

	#[test]
	fn production_drops_drafts_and_sorts_newest_first() {
		let posts = block_on(load_all_posts(&source(), &config(BuildProfile::Production))).unwrap();
		let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
		assert_eq!(titles, ["New News", "Old News"]);
	}

	#[test]
	fn development_keeps_drafts() {
		let posts = block_on(load_all_posts(&source(), &config(BuildProfile::Development))).unwrap();
		assert_eq!(posts.len(), 3);
		assert_eq!(posts[0].title, "Unfinished");
		assert!(posts[0].draft);
	}

	#[test]
	fn loose_draft_flags_hide_in_production() {
		let flagged = |file: &str, flag: &str| {
			format!("---\ntitle: {file}\ndate: 2025-01-0{}\ndraft: {flag}\n---\nBody.\n", file.len() % 9 + 1)
		};
		let files = MemorySource::default()
			.with("manifest.json", r#"{ "posts": ["yes.md", "off.md", "blank.md", "one.md"] }"#)
			.with("yes.md", &flagged("yes", "yes"))
			.with("off.md", &flagged("off", "false"))
			.with("blank.md", &flagged("blank", ""))
			.with("one.md", &flagged("one", "1"));

		let shown = block_on(load_all_posts(&files, &config(BuildProfile::Production))).unwrap();
		let mut titles: Vec<_> = shown.iter().map(|p| p.title.as_str()).collect();
		titles.sort_unstable();
		assert_eq!(titles, ["blank", "off"]);

		assert!(truthy(&Value::from(2)));
		assert!(!truthy(&Value::from(0)));
		assert!(!truthy(&Value::Null));
	}

	#[test]
	fn canonical_fields() {
		let post = block_on(load_post(&source(), "new.md")).unwrap();
		assert_eq!(post.slug, "new-news");
		assert_eq!((post.year.as_str(), post.month.as_str()), ("2025", "06"));
		assert_eq!(post.url, "#/blog/2025/06/new-news");
		assert_eq!(post.tags, ["rust", "wasm"]);
		assert_eq!(post.category, "AI & ML");
		assert_eq!(post.content, "Body of New News.\n");
		assert!(post.extra.is_empty());
	}

	#[test]
	fn title_falls_back_to_file_name() {
		let src = MemorySource::default().with("hello-world.mdx", "---\ndate: 2025-01-02\nmood: calm\n---\n");
		let post = block_on(load_post(&src, "hello-world.mdx")).unwrap();
		assert_eq!(post.title, "hello-world");
		assert_eq!(post.url, "#/blog/2025/01/hello-world");
		assert_eq!(post.extra.text("mood"), Some("calm"));
	}

	#[test]
	fn one_broken_post_fails_the_load() {
		let src = source().with("old.md", "no frontmatter here");
		let err = block_on(load_all_posts(&src, &config(BuildProfile::Development))).unwrap_err();
		assert!(matches!(err, ContentError::Malformed { ref path, .. } if path == "old.md"));
	}

	#[test]
	fn bad_dates_are_malformed() {
		let src = MemorySource::default().with("x.md", "---\ntitle: X\ndate: someday\n---\n");
		assert!(matches!(
			block_on(load_post(&src, "x.md")),
			Err(ContentError::Malformed { .. })
		));
	}

	#[test]
	fn missing_manifest_and_bad_json() {
		let empty = MemorySource::default();
		assert!(matches!(
			block_on(load_manifest(&empty, "manifest.json")),
			Err(ContentError::NotFound { .. })
		));
		let junk = MemorySource::default().with("manifest.json", "{ posts: nope");
		assert!(matches!(
			block_on(load_manifest(&junk, "manifest.json")),
			Err(ContentError::Manifest(_))
		));
	}

	#[test]
	fn read_time_rounds_and_floors_at_one() {
		assert_eq!(read_time(""), 1);
		assert_eq!(read_time(&"word ".repeat(299)), 1);
		assert_eq!(read_time(&"word ".repeat(300)), 2);
		assert_eq!(read_time(&"word ".repeat(1000)), 5);
	}
}

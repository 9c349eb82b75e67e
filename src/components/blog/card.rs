use chrono::NaiveDate;
use leptos::prelude::*;

use crate::blog::{Post, category_href, tag_href};

const CARD_TAGS: usize = 4;

/// `2025-06-01` as `Jun 1, 2025`; anything unparsable is shown as is.
pub fn display_date(date: &str) -> String {
	date.get(..10)
		.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
		.map_or_else(|| date.to_string(), |d| d.format("%b %-d, %Y").to_string())
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
	let tags = post
		.tags
		.iter()
		.take(CARD_TAGS)
		.map(|t| view! { <a class="badge-chip" href=tag_href(t)>{t.clone()}</a> })
		.collect_view();
	let category_link = category_href(&post.category);
	let byline = format!("{} \u{2022} {}", display_date(&post.date), post.author);

	view! {
		<article class="verse-card" role="article">
			{post
				.cover_image
				.map(|src| view! { <img src=src alt="" class="cover-image" loading="lazy" /> })}
			<h3 class="card-title">
				<a href=post.url>{post.title}</a>
			</h3>
			<p class="project-sub">{byline}</p>
			<p class="card-desc line-clamp-3">{post.description}</p>
			<div class="project-links">
				<a class="badge-chip" href=category_link>{post.category}</a>
				{tags}
			</div>
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dates_read_naturally() {
		assert_eq!(display_date("2025-06-01"), "Jun 1, 2025");
		assert_eq!(display_date("2024-12-31T08:00:00Z"), "Dec 31, 2024");
		assert_eq!(display_date("soon"), "soon");
	}
}

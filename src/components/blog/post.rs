use leptos::prelude::*;
use leptos_meta::Title;

use super::card::{PostCard, display_date};
use super::widgets::EmptyState;
use crate::blog::{Post, category_href, read_time, tag_href};

#[component]
pub fn PostPage(post: Option<Post>, related: Vec<Post>) -> impl IntoView {
	let Some(post) = post else {
		return view! {
			<section class="verse-section-alt">
				<div class="verse-container">
					<EmptyState message="Post not found." />
				</div>
			</section>
		}
		.into_any();
	};

	let byline = format!(
		"{} \u{2022} {} \u{2022} {} min read",
		display_date(&post.date),
		post.author,
		read_time(&post.content)
	);
	let page_title = post.title.clone();
	let category_link = category_href(&post.category);
	let tags = post
		.tags
		.iter()
		.map(|t| view! { <a class="badge-chip" href=tag_href(t)>{format!("#{t}")}</a> })
		.collect_view();
	let related = related
		.into_iter()
		.map(|p| view! { <PostCard post=p /> })
		.collect_view();

	view! {
		<Title text=page_title />
		<section class="verse-section-alt">
			<div class="verse-container">
				<h1 class="verse-heading">{post.title}</h1>
				<p class="project-sub">{byline}</p>
				<div class="project-links">
					<a class="badge-chip" href=category_link>{post.category}</a>
					{tags}
				</div>
				{post.cover_image.map(|src| view! { <img class="cover-image" src=src alt="" /> })}
				<article class="card-desc post-body">{post.content}</article>
				<hr />
				<h2 class="verse-heading related-heading">"Related"</h2>
				<div class="card-grid">{related}</div>
			</div>
		</section>
	}
	.into_any()
}

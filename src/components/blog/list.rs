use leptos::prelude::*;
use leptos_meta::Title;

use super::card::PostCard;
use super::widgets::{CategoryNav, EmptyState, SearchBar};
use crate::blog::{Post, page_fragment, page_number, paginate, search};
use crate::components::location::navigate;

/// A titled, searchable, paginated listing of `posts`.
#[component]
pub fn ListPage(
	title: String,
	posts: Vec<Post>,
	#[prop(into)] fragment: Signal<String>,
	query: RwSignal<String>,
	page_size: usize,
) -> impl IntoView {
	let page = Memo::new(move |_| {
		let refs: Vec<&Post> = posts.iter().collect();
		let matching: Vec<Post> = query.with(|q| search(&refs, q)).into_iter().cloned().collect();
		paginate(&matching, fragment.with(|f| page_number(f)), page_size)
	});

	let page_title = title.clone();
	let go = move |to: usize| navigate(&fragment.with_untracked(|f| page_fragment(f, to)));

	view! {
		<Title text=page_title />
		<section id="blog" class="verse-section-alt">
			<div class="verse-container">
				<h2 class="verse-heading">{title}</h2>
				<CategoryNav />
				<SearchBar query=query />
				<div class="card-grid">
					{move || {
						page.with(|p| {
							if p.items.is_empty() {
								view! { <EmptyState message="No posts match your search." /> }.into_any()
							} else {
								p.items
									.iter()
									.map(|post| view! { <PostCard post=post.clone() /> })
									.collect_view()
									.into_any()
							}
						})
					}}
				</div>
				<Show when=move || page.with(|p| p.total_pages > 1)>
					<div class="pagination">
						<button
							class="neon-btn"
							disabled=move || page.with(|p| !p.has_prev())
							on:click=move |_| go(page.with_untracked(|p| p.page.saturating_sub(1).max(1)))
						>
							"Prev"
						</button>
						<span class="page-count">
							{move || page.with(|p| format!("Page {} / {}", p.page, p.total_pages))}
						</span>
						<button
							class="neon-btn"
							disabled=move || page.with(|p| !p.has_next())
							on:click=move |_| go(page.with_untracked(|p| (p.page + 1).min(p.total_pages)))
						>
							"Next"
						</button>
					</div>
				</Show>
			</div>
		</section>
	}
}
